use super::{decl_handlers, expression_handlers, statement_handlers, PsiPrinter};
use crate::ast::{
    AssignStmt, Binary, Block, CallStmt, CompoundStmt, Declarations, FnCall, ForStmt, FuncDecl, Identifier, IfStmt,
    Literal, ParamList, ProcDecl, Program, ReadStmt, RepeatStmt, Unary, VarDecl, WhileStmt, WriteStmt,
};
use crate::semantic::visitor::AstVisitor;

impl AstVisitor for PsiPrinter {
    type Output = String;

    // Declaration handlers
    fn visit_program(&mut self, program: &Program) -> String {
        decl_handlers::handle_program(self, program)
    }

    fn visit_block(&mut self, block: &Block) -> String {
        decl_handlers::handle_block(self, block)
    }

    fn visit_declarations(&mut self, decls: &Declarations) -> String {
        decl_handlers::handle_declarations(self, decls)
    }

    fn visit_var_decl(&mut self, decl: &VarDecl) -> String {
        decl_handlers::handle_var_decl(decl)
    }

    fn visit_proc_decl(&mut self, decl: &ProcDecl) -> String {
        decl_handlers::handle_proc_decl(self, decl)
    }

    fn visit_func_decl(&mut self, decl: &FuncDecl) -> String {
        decl_handlers::handle_func_decl(self, decl)
    }

    fn visit_param_list(&mut self, params: &ParamList) -> String {
        decl_handlers::handle_param_list(self, params)
    }

    // Statement handlers
    fn visit_write(&mut self, stmt: &WriteStmt) -> String {
        statement_handlers::handle_write(self, stmt)
    }

    fn visit_read(&mut self, stmt: &ReadStmt) -> String {
        statement_handlers::handle_read(self, stmt)
    }

    fn visit_assign(&mut self, stmt: &AssignStmt) -> String {
        statement_handlers::handle_assign(self, stmt)
    }

    fn visit_call(&mut self, stmt: &CallStmt) -> String {
        statement_handlers::handle_call(self, stmt)
    }

    fn visit_if(&mut self, stmt: &IfStmt) -> String {
        statement_handlers::handle_if(self, stmt)
    }

    fn visit_while(&mut self, stmt: &WhileStmt) -> String {
        statement_handlers::handle_while(self, stmt)
    }

    fn visit_repeat(&mut self, stmt: &RepeatStmt) -> String {
        statement_handlers::handle_repeat(self, stmt)
    }

    fn visit_for(&mut self, stmt: &ForStmt) -> String {
        statement_handlers::handle_for(self, stmt)
    }

    fn visit_compound(&mut self, stmt: &CompoundStmt) -> String {
        statement_handlers::handle_compound(self, stmt)
    }

    // Expression handlers
    fn visit_literal(&mut self, expr: &Literal) -> String {
        expression_handlers::handle_literal(expr)
    }

    fn visit_identifier(&mut self, expr: &Identifier) -> String {
        expression_handlers::handle_identifier(expr)
    }

    fn visit_unary(&mut self, expr: &Unary) -> String {
        expression_handlers::handle_unary(self, expr)
    }

    fn visit_binary(&mut self, expr: &Binary) -> String {
        expression_handlers::handle_binary(self, expr)
    }

    fn visit_fn_call(&mut self, expr: &FnCall) -> String {
        expression_handlers::handle_fn_call(self, expr)
    }
}
