use crate::ast::{Expr, Node, ReadStmt, WriteStmt};
use crate::frontend::token::{Token, TokenKind};
use crate::semantic::visitor::AstVisitor;

/// The closed set of statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Write(WriteStmt),
    Read(ReadStmt),
    Assign(AssignStmt),
    Call(CallStmt),
    If(IfStmt),
    While(WhileStmt),
    Repeat(RepeatStmt),
    For(ForStmt),
    Compound(CompoundStmt),
}

impl Node for Stmt {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Stmt::Write(stmt) => stmt.accept(visitor),
            Stmt::Read(stmt) => stmt.accept(visitor),
            Stmt::Assign(stmt) => stmt.accept(visitor),
            Stmt::Call(stmt) => stmt.accept(visitor),
            Stmt::If(stmt) => stmt.accept(visitor),
            Stmt::While(stmt) => stmt.accept(visitor),
            Stmt::Repeat(stmt) => stmt.accept(visitor),
            Stmt::For(stmt) => stmt.accept(visitor),
            Stmt::Compound(stmt) => stmt.accept(visitor),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub name: Token,
    pub expr: Expr,
}

impl AssignStmt {
    pub fn new(name: Token, expr: Expr) -> Self {
        Self { name, expr }
    }
}

impl Node for AssignStmt {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_assign(self)
    }
}

/// A procedure call used as a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CallStmt {
    pub name: Token,
    pub args: Vec<Expr>,
}

impl CallStmt {
    pub fn new(name: Token, args: Vec<Expr>) -> Self {
        Self { name, args }
    }
}

impl Node for CallStmt {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_call(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: CompoundStmt,
    pub else_branch: Option<CompoundStmt>,
}

impl IfStmt {
    pub fn new(condition: Expr, then_branch: CompoundStmt, else_branch: Option<CompoundStmt>) -> Self {
        Self {
            condition,
            then_branch,
            else_branch,
        }
    }
}

impl Node for IfStmt {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_if(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: CompoundStmt,
}

impl WhileStmt {
    pub fn new(condition: Expr, body: CompoundStmt) -> Self {
        Self { condition, body }
    }
}

impl Node for WhileStmt {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_while(self)
    }
}

/// `repeat .. until`: the body runs before the condition is tested.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatStmt {
    pub body: Vec<Stmt>,
    pub until: Expr,
}

impl RepeatStmt {
    pub fn new(body: Vec<Stmt>, until: Expr) -> Self {
        Self { body, until }
    }
}

impl Node for RepeatStmt {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_repeat(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForDirection {
    To,
    Downto,
}

impl ForDirection {
    pub fn from_keyword(kind: TokenKind) -> Option<ForDirection> {
        match kind {
            TokenKind::To => Some(ForDirection::To),
            TokenKind::Downto => Some(ForDirection::Downto),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            ForDirection::To => "to",
            ForDirection::Downto => "downto",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub var: Token,
    pub from: Expr,
    pub direction: ForDirection,
    pub to: Expr,
    pub body: CompoundStmt,
}

impl ForStmt {
    pub fn new(var: Token, from: Expr, direction: ForDirection, to: Expr, body: CompoundStmt) -> Self {
        Self {
            var,
            from,
            direction,
            to,
            body,
        }
    }
}

impl Node for ForStmt {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_for(self)
    }
}

/// `begin { stmt } end`, and the normalized body of `if`, `while` and `for`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundStmt {
    pub stmts: Vec<Stmt>,
}

impl CompoundStmt {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }
}

impl Node for CompoundStmt {
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_compound(self)
    }
}
