use crate::ast::{ExprId, Identifier, Literal, Node};
use crate::frontend::token::Token;
use crate::semantic::visitor::AstVisitor;

/// The closed set of expressions.
///
/// Expression nodes carry no type; analyses record resolved types against
/// [`ExprId`] in a [`TypeTable`](crate::semantic::TypeTable).
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Identifier(Identifier),
    Unary(Unary),
    Binary(Binary),
    FnCall(FnCall),
}

impl Expr {
    pub fn id(&self) -> ExprId {
        match self {
            Expr::Literal(expr) => expr.id,
            Expr::Identifier(expr) => expr.id,
            Expr::Unary(expr) => expr.id,
            Expr::Binary(expr) => expr.id,
            Expr::FnCall(expr) => expr.id,
        }
    }
}

impl Node for Expr {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Literal(expr) => expr.accept(visitor),
            Expr::Identifier(expr) => expr.accept(visitor),
            Expr::Unary(expr) => expr.accept(visitor),
            Expr::Binary(expr) => expr.accept(visitor),
            Expr::FnCall(expr) => expr.accept(visitor),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    pub id: ExprId,
    pub op: Token,
    pub expr: Box<Expr>,
}

impl Unary {
    pub fn new(id: ExprId, op: Token, expr: Expr) -> Self {
        Self {
            id,
            op,
            expr: Box::new(expr),
        }
    }
}

impl Node for Unary {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_unary(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub id: ExprId,
    pub left: Box<Expr>,
    pub op: Token,
    pub right: Box<Expr>,
}

impl Binary {
    pub fn new(id: ExprId, left: Expr, op: Token, right: Expr) -> Self {
        Self {
            id,
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

impl Node for Binary {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_binary(self)
    }
}

/// A function call inside an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FnCall {
    pub id: ExprId,
    pub name: Token,
    pub args: Vec<Expr>,
}

impl FnCall {
    pub fn new(id: ExprId, name: Token, args: Vec<Expr>) -> Self {
        Self { id, name, args }
    }
}

impl Node for FnCall {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_fn_call(self)
    }
}
