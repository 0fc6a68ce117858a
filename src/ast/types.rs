use std::fmt;

use crate::frontend::token::TokenKind;

/// The closed set of declarable types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NType {
    Int,
    Real,
    Bool,
    String,
    Char,
}

impl NType {
    pub fn from_keyword(kind: TokenKind) -> Option<NType> {
        match kind {
            TokenKind::Integer => Some(NType::Int),
            TokenKind::Real => Some(NType::Real),
            TokenKind::Boolean => Some(NType::Bool),
            TokenKind::String => Some(NType::String),
            TokenKind::Char => Some(NType::Char),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            NType::Int => "integer",
            NType::Real => "real",
            NType::Bool => "boolean",
            NType::String => "string",
            NType::Char => "char",
        }
    }
}

impl fmt::Display for NType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Identity of an expression node within one parse, assigned in construction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExprId(pub u32);

impl fmt::Display for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
