use super::PsiPrinter;
use crate::ast::{Binary, Expr, FnCall, Identifier, Literal, Node, Unary};
use crate::frontend::token::TokenKind;

// Token display restores the quotes around string and char literals and doubles a quote char.
pub fn handle_literal(expr: &Literal) -> String {
    expr.value.to_string()
}

pub fn handle_identifier(expr: &Identifier) -> String {
    expr.name.text.clone()
}

pub fn handle_unary(printer: &mut PsiPrinter, expr: &Unary) -> String {
    let operand = expr.expr.accept(printer);
    if !expr.op.is(TokenKind::Not) {
        return format!("{}{}", expr.op.text, operand);
    }
    // `not` only takes a primary
    match expr.expr.as_ref() {
        Expr::Unary(_) => format!("{} ({})", expr.op.text, operand),
        _ => format!("{} {}", expr.op.text, operand),
    }
}

pub fn handle_binary(printer: &mut PsiPrinter, expr: &Binary) -> String {
    let left = expr.left.accept(printer);
    let right = expr.right.accept(printer);
    format!("({} {} {})", left, expr.op.text, right)
}

pub fn handle_fn_call(printer: &mut PsiPrinter, expr: &FnCall) -> String {
    format!("{} ({})", expr.name, printer.comma_list(&expr.args))
}
