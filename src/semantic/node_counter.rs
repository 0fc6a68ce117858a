use crate::ast::{
    AssignStmt, Binary, Block, CallStmt, CompoundStmt, Declarations, Expr, FnCall, ForStmt, FuncDecl, Identifier,
    IfStmt, Literal, Node, ParamList, ProcDecl, Program, ReadStmt, RepeatStmt, Stmt, Unary, VarDecl, WhileStmt,
    WriteStmt,
};
use crate::semantic::visitor::AstVisitor;

/// Counts every node in a tree. Each handler returns the size of its subtree.
#[derive(Debug, Default)]
pub struct NodeCounter;

impl NodeCounter {
    pub fn count<N: Node>(node: &N) -> usize {
        node.accept(&mut NodeCounter)
    }

    fn stmts(&mut self, stmts: &[Stmt]) -> usize {
        stmts.iter().map(|stmt| stmt.accept(self)).sum()
    }

    fn exprs(&mut self, exprs: &[Expr]) -> usize {
        exprs.iter().map(|expr| expr.accept(self)).sum()
    }
}

impl AstVisitor for NodeCounter {
    type Output = usize;

    fn visit_program(&mut self, program: &Program) -> usize {
        1 + program.block.accept(self)
    }

    fn visit_block(&mut self, block: &Block) -> usize {
        1 + block.decls.accept(self) + block.body.accept(self)
    }

    fn visit_declarations(&mut self, decls: &Declarations) -> usize {
        let vars: usize = decls.vars.iter().map(|var| var.accept(self)).sum();
        let proc_fns: usize = decls.proc_fns.iter().map(|decl| decl.accept(self)).sum();
        1 + vars + proc_fns
    }

    fn visit_var_decl(&mut self, _decl: &VarDecl) -> usize {
        1
    }

    fn visit_proc_decl(&mut self, decl: &ProcDecl) -> usize {
        1 + decl.params.accept(self) + decl.block.accept(self)
    }

    fn visit_func_decl(&mut self, decl: &FuncDecl) -> usize {
        1 + decl.params.accept(self) + decl.block.accept(self)
    }

    fn visit_param_list(&mut self, params: &ParamList) -> usize {
        1 + params.params.iter().map(|param| param.accept(self)).sum::<usize>()
    }

    fn visit_write(&mut self, stmt: &WriteStmt) -> usize {
        1 + self.exprs(&stmt.args)
    }

    fn visit_read(&mut self, _stmt: &ReadStmt) -> usize {
        1
    }

    fn visit_assign(&mut self, stmt: &AssignStmt) -> usize {
        1 + stmt.expr.accept(self)
    }

    fn visit_call(&mut self, stmt: &CallStmt) -> usize {
        1 + self.exprs(&stmt.args)
    }

    fn visit_if(&mut self, stmt: &IfStmt) -> usize {
        let else_branch = stmt.else_branch.as_ref().map_or(0, |branch| branch.accept(self));
        1 + stmt.condition.accept(self) + stmt.then_branch.accept(self) + else_branch
    }

    fn visit_while(&mut self, stmt: &WhileStmt) -> usize {
        1 + stmt.condition.accept(self) + stmt.body.accept(self)
    }

    fn visit_repeat(&mut self, stmt: &RepeatStmt) -> usize {
        1 + self.stmts(&stmt.body) + stmt.until.accept(self)
    }

    fn visit_for(&mut self, stmt: &ForStmt) -> usize {
        1 + stmt.from.accept(self) + stmt.to.accept(self) + stmt.body.accept(self)
    }

    fn visit_compound(&mut self, stmt: &CompoundStmt) -> usize {
        1 + self.stmts(&stmt.stmts)
    }

    fn visit_literal(&mut self, _expr: &Literal) -> usize {
        1
    }

    fn visit_identifier(&mut self, _expr: &Identifier) -> usize {
        1
    }

    fn visit_unary(&mut self, expr: &Unary) -> usize {
        1 + expr.expr.accept(self)
    }

    fn visit_binary(&mut self, expr: &Binary) -> usize {
        1 + expr.left.accept(self) + expr.right.accept(self)
    }

    fn visit_fn_call(&mut self, expr: &FnCall) -> usize {
        1 + self.exprs(&expr.args)
    }
}
