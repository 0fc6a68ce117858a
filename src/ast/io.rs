use crate::ast::{Expr, Node};
use crate::frontend::token::Token;
use crate::semantic::visitor::AstVisitor;

/// `write (..)` or `writeln (..)`; `newline` tells them apart.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteStmt {
    pub newline: bool,
    pub args: Vec<Expr>,
}

impl WriteStmt {
    pub fn new(newline: bool, args: Vec<Expr>) -> Self {
        Self { newline, args }
    }
}

impl Node for WriteStmt {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_write(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadStmt {
    pub name: Token,
}

impl ReadStmt {
    pub fn new(name: Token) -> Self {
        Self { name }
    }
}

impl Node for ReadStmt {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_read(self)
    }
}
