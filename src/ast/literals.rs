use crate::ast::{ExprId, Node};
use crate::frontend::token::Token;
use crate::semantic::visitor::AstVisitor;

/// A literal; the token kind tells integer, real, boolean, char and string apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub id: ExprId,
    pub value: Token,
}

impl Literal {
    pub fn new(id: ExprId, value: Token) -> Self {
        Self { id, value }
    }
}

impl Node for Literal {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_literal(self)
    }
}

/// A bare name in an expression; what it refers to is resolved elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub id: ExprId,
    pub name: Token,
}

impl Identifier {
    pub fn new(id: ExprId, name: Token) -> Self {
        Self { id, name }
    }
}

impl Node for Identifier {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_identifier(self)
    }
}
