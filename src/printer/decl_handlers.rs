use super::PsiPrinter;
use crate::ast::{Block, Declarations, FuncDecl, NType, Node, ParamList, ProcDecl, Program, VarDecl};
use crate::utils::config::printer::STATEMENT_TERMINATOR;

pub fn handle_program(printer: &mut PsiPrinter, program: &Program) -> String {
    let block = program.block.accept(printer);
    format!("program {};{}.", program.name, block)
}

pub fn handle_block(printer: &mut PsiPrinter, block: &Block) -> String {
    let decls = block.decls.accept(printer);
    decls + &block.body.accept(printer)
}

pub fn handle_declarations(printer: &mut PsiPrinter, decls: &Declarations) -> String {
    let mut text = String::new();
    if !decls.vars.is_empty() {
        text.push_str(&printer.line("var"));
        printer.level += 1;
        for (ty, names) in group_by_type(&decls.vars) {
            text.push_str(&printer.line(&format!("{} : {}{}", names.join(", "), ty, STATEMENT_TERMINATOR)));
        }
        printer.level -= 1;
    }
    for proc_fn in &decls.proc_fns {
        text.push_str(&proc_fn.accept(printer));
    }
    text
}

// Groups keep the order in which each type first appears.
fn group_by_type(vars: &[VarDecl]) -> Vec<(NType, Vec<&str>)> {
    let mut groups: Vec<(NType, Vec<&str>)> = Vec::new();
    for var in vars {
        match groups.iter_mut().find(|(ty, _)| *ty == var.ty) {
            Some((_, names)) => names.push(var.name.text.as_str()),
            None => groups.push((var.ty, vec![var.name.text.as_str()])),
        }
    }
    groups
}

pub fn handle_var_decl(decl: &VarDecl) -> String {
    format!("{} : {}", decl.name, decl.ty)
}

pub fn handle_param_list(printer: &mut PsiPrinter, params: &ParamList) -> String {
    format!("({})", printer.comma_list(&params.params))
}

pub fn handle_proc_decl(printer: &mut PsiPrinter, decl: &ProcDecl) -> String {
    let params = decl.params.accept(printer);
    let header = printer.line(&format!("procedure {} {};", decl.name, params));
    header + &printer.nested(&decl.block) + STATEMENT_TERMINATOR
}

pub fn handle_func_decl(printer: &mut PsiPrinter, decl: &FuncDecl) -> String {
    let params = decl.params.accept(printer);
    let header = printer.line(&format!("function {} {} : {};", decl.name, params, decl.return_type));
    header + &printer.nested(&decl.block) + STATEMENT_TERMINATOR
}
