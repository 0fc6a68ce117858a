use crate::ast::{
    AssignStmt, Binary, Block, CallStmt, CompoundStmt, Declarations, FnCall, ForStmt, FuncDecl, Identifier, IfStmt,
    Literal, ParamList, ProcDecl, Program, ReadStmt, RepeatStmt, Unary, VarDecl, WhileStmt, WriteStmt,
};

/// A traversal over the tree, with one handler per node variant.
///
/// There are no default methods, so a visitor that forgets a variant does not
/// compile. Handlers decide whether and how to descend into children (through
/// [`Node::accept`](crate::ast::Node::accept)) and how child results combine.
pub trait AstVisitor {
    type Output;

    // Declarations
    fn visit_program(&mut self, program: &Program) -> Self::Output;
    fn visit_block(&mut self, block: &Block) -> Self::Output;
    fn visit_declarations(&mut self, decls: &Declarations) -> Self::Output;
    fn visit_var_decl(&mut self, decl: &VarDecl) -> Self::Output;
    fn visit_proc_decl(&mut self, decl: &ProcDecl) -> Self::Output;
    fn visit_func_decl(&mut self, decl: &FuncDecl) -> Self::Output;
    fn visit_param_list(&mut self, params: &ParamList) -> Self::Output;

    // Statements
    fn visit_write(&mut self, stmt: &WriteStmt) -> Self::Output;
    fn visit_read(&mut self, stmt: &ReadStmt) -> Self::Output;
    fn visit_assign(&mut self, stmt: &AssignStmt) -> Self::Output;
    fn visit_call(&mut self, stmt: &CallStmt) -> Self::Output;
    fn visit_if(&mut self, stmt: &IfStmt) -> Self::Output;
    fn visit_while(&mut self, stmt: &WhileStmt) -> Self::Output;
    fn visit_repeat(&mut self, stmt: &RepeatStmt) -> Self::Output;
    fn visit_for(&mut self, stmt: &ForStmt) -> Self::Output;
    fn visit_compound(&mut self, stmt: &CompoundStmt) -> Self::Output;

    // Expressions
    fn visit_literal(&mut self, expr: &Literal) -> Self::Output;
    fn visit_identifier(&mut self, expr: &Identifier) -> Self::Output;
    fn visit_unary(&mut self, expr: &Unary) -> Self::Output;
    fn visit_binary(&mut self, expr: &Binary) -> Self::Output;
    fn visit_fn_call(&mut self, expr: &FnCall) -> Self::Output;
}
