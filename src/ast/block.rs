use crate::ast::{CompoundStmt, Declarations, Node};
use crate::semantic::visitor::AstVisitor;

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub decls: Declarations,
    pub body: CompoundStmt,
}

impl Block {
    pub fn new(decls: Declarations, body: CompoundStmt) -> Self {
        Self { decls, body }
    }
}

impl Node for Block {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_block(self)
    }
}
