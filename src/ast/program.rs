use crate::ast::{Block, Node};
use crate::frontend::token::Token;
use crate::semantic::visitor::AstVisitor;

/// Root of every tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub name: Token,
    pub block: Block,
}

impl Program {
    pub fn new(name: Token, block: Block) -> Self {
        Self { name, block }
    }
}

impl Node for Program {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_program(self)
    }
}
