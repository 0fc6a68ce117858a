use crate::ast::{Binary, Expr, FnCall, Identifier, Literal, Unary};
use crate::frontend::parser::Parser;
use crate::frontend::source::TokenSource;
use crate::frontend::token::{Token, TokenKind};
use crate::utils::errors::ParseResult;

const EQUALITY: &[TokenKind] = &[TokenKind::Eq, TokenKind::Neq];
const COMPARISON: &[TokenKind] = &[TokenKind::Lt, TokenKind::Leq, TokenKind::Gt, TokenKind::Geq];
const TERM: &[TokenKind] = &[TokenKind::Add, TokenKind::Sub, TokenKind::Or];
const FACTOR: &[TokenKind] = &[TokenKind::Mul, TokenKind::Div, TokenKind::And, TokenKind::Mod];
const LITERALS: &[TokenKind] = &[
    TokenKind::LInteger,
    TokenKind::LReal,
    TokenKind::LBoolean,
    TokenKind::LChar,
    TokenKind::LString,
];

// Precedence climbs equality -> comparison -> term -> factor -> unary -> primary.
// Node ids are taken after the children are built, so they follow construction order.
impl<S: TokenSource> Parser<S> {
    pub(crate) fn expression(&mut self) -> ParseResult<Expr> {
        self.equality()
    }

    // equality = comparison [ ("=" | "<>") comparison ] .
    fn equality(&mut self) -> ParseResult<Expr> {
        let left = self.comparison()?;
        if self.matches(EQUALITY) {
            let op = self.prev().clone();
            let right = self.comparison()?;
            return Ok(self.binary(left, op, right));
        }
        Ok(left)
    }

    // comparison = term [ ("<" | "<=" | ">" | ">=") term ] .
    fn comparison(&mut self) -> ParseResult<Expr> {
        let left = self.term()?;
        if self.matches(COMPARISON) {
            let op = self.prev().clone();
            let right = self.term()?;
            return Ok(self.binary(left, op, right));
        }
        Ok(left)
    }

    // term = factor { ("+" | "-" | "or") factor } .
    fn term(&mut self) -> ParseResult<Expr> {
        let mut expr = self.factor()?;
        while self.matches(TERM) {
            let op = self.prev().clone();
            let right = self.factor()?;
            expr = self.binary(expr, op, right);
        }
        Ok(expr)
    }

    // factor = unary { ("*" | "/" | "and" | "mod") unary } .
    fn factor(&mut self) -> ParseResult<Expr> {
        let mut expr = self.unary()?;
        while self.matches(FACTOR) {
            let op = self.prev().clone();
            let right = self.unary()?;
            expr = self.binary(expr, op, right);
        }
        Ok(expr)
    }

    // unary = ("+" | "-") unary | "not" primary | primary .
    fn unary(&mut self) -> ParseResult<Expr> {
        if self.matches(&[TokenKind::Add, TokenKind::Sub]) {
            let op = self.prev().clone();
            let operand = self.unary()?;
            return Ok(Expr::Unary(Unary::new(self.next_id(), op, operand)));
        }
        if self.matches(&[TokenKind::Not]) {
            let op = self.prev().clone();
            let operand = self.primary()?;
            return Ok(Expr::Unary(Unary::new(self.next_id(), op, operand)));
        }
        self.primary()
    }

    // primary = IDENT [arglist] | literal | "(" expression ")" .
    fn primary(&mut self) -> ParseResult<Expr> {
        if self.matches(&[TokenKind::Ident]) {
            let name = self.prev().clone();
            if self.peek(&[TokenKind::Open]) {
                let args = self.arg_list()?;
                return Ok(Expr::FnCall(FnCall::new(self.next_id(), name, args)));
            }
            return Ok(Expr::Identifier(Identifier::new(self.next_id(), name)));
        }
        if self.matches(LITERALS) {
            let value = self.prev().clone();
            return Ok(Expr::Literal(Literal::new(self.next_id(), value)));
        }
        if self.matches(&[TokenKind::Open]) {
            let expr = self.expression()?;
            self.expect(&[TokenKind::Close])?;
            return Ok(expr);
        }
        Err(self.fail(format!("Expecting identifier or literal, found {}", self.describe_current())))
    }

    // arglist = "(" [ expression ("," expression)* ] ")" .
    pub(crate) fn arg_list(&mut self) -> ParseResult<Vec<Expr>> {
        self.expect(&[TokenKind::Open])?;
        let mut args = Vec::new();
        if !self.peek(&[TokenKind::Close]) {
            args.push(self.expression()?);
            while self.matches(&[TokenKind::Comma]) {
                args.push(self.expression()?);
            }
        }
        self.expect(&[TokenKind::Close])?;
        Ok(args)
    }

    fn binary(&mut self, left: Expr, op: Token, right: Expr) -> Expr {
        Expr::Binary(Binary::new(self.next_id(), left, op, right))
    }
}
