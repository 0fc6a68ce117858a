use super::PsiPrinter;
use crate::ast::{
    AssignStmt, CallStmt, CompoundStmt, ForStmt, IfStmt, Node, ReadStmt, RepeatStmt, WhileStmt, WriteStmt,
};

pub fn handle_write(printer: &mut PsiPrinter, stmt: &WriteStmt) -> String {
    let keyword = if stmt.newline { "writeln" } else { "write" };
    let args = printer.comma_list(&stmt.args);
    printer.line(&format!("{} ({})", keyword, args))
}

pub fn handle_read(printer: &mut PsiPrinter, stmt: &ReadStmt) -> String {
    printer.line(&format!("read ({})", stmt.name))
}

pub fn handle_assign(printer: &mut PsiPrinter, stmt: &AssignStmt) -> String {
    let expr = stmt.expr.accept(printer);
    printer.line(&format!("{} := {}", stmt.name, expr))
}

pub fn handle_call(printer: &mut PsiPrinter, stmt: &CallStmt) -> String {
    let args = printer.comma_list(&stmt.args);
    printer.line(&format!("{} ({})", stmt.name, args))
}

pub fn handle_if(printer: &mut PsiPrinter, stmt: &IfStmt) -> String {
    let condition = stmt.condition.accept(printer);
    let mut text = printer.line(&format!("if {} then", condition));
    text.push_str(&printer.nested(&stmt.then_branch));
    if let Some(else_branch) = &stmt.else_branch {
        text.push_str(&printer.line("else"));
        text.push_str(&printer.nested(else_branch));
    }
    text
}

pub fn handle_while(printer: &mut PsiPrinter, stmt: &WhileStmt) -> String {
    let condition = stmt.condition.accept(printer);
    let header = printer.line(&format!("while {} do", condition));
    header + &printer.nested(&stmt.body)
}

pub fn handle_repeat(printer: &mut PsiPrinter, stmt: &RepeatStmt) -> String {
    let mut text = printer.line("repeat");
    printer.level += 1;
    text.push_str(&printer.stmt_list(&stmt.body));
    printer.level -= 1;
    let until = stmt.until.accept(printer);
    text + &printer.line(&format!("until {}", until))
}

pub fn handle_for(printer: &mut PsiPrinter, stmt: &ForStmt) -> String {
    let from = stmt.from.accept(printer);
    let to = stmt.to.accept(printer);
    let header = printer.line(&format!(
        "for {} := {} {} {} do",
        stmt.var,
        from,
        stmt.direction.keyword(),
        to
    ));
    header + &printer.nested(&stmt.body)
}

pub fn handle_compound(printer: &mut PsiPrinter, stmt: &CompoundStmt) -> String {
    let mut text = printer.line("begin");
    printer.level += 1;
    text.push_str(&printer.stmt_list(&stmt.stmts));
    printer.level -= 1;
    text + &printer.line("end")
}
