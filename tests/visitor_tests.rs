use std::collections::HashMap;

use psic::ast::{
    AssignStmt, Binary, Block, CallStmt, CompoundStmt, Declarations, Expr, FnCall, ForStmt, FuncDecl, Identifier,
    IfStmt, Literal, NType, Node, ParamList, ProcDecl, Program, ReadStmt, RepeatStmt, Stmt, Unary, VarDecl, WhileStmt,
    WriteStmt,
};
use psic::frontend::token::TokenKind;
use psic::parse_source;
use psic::semantic::{AstVisitor, NodeCounter, TypeTable};
use psic::utils::errors::{PsiError, PsiResult};

/// Annotates expression types into a side table, resolving names against
/// the variables declared in the program's outermost block.
struct Annotator {
    vars: HashMap<String, NType>,
    types: TypeTable,
}

impl Annotator {
    fn new() -> Self {
        Self {
            vars: HashMap::new(),
            types: TypeTable::new(),
        }
    }

    fn exprs(&mut self, exprs: &[Expr]) -> PsiResult<Option<NType>> {
        for expr in exprs {
            expr.accept(self)?;
        }
        Ok(None)
    }

    fn stmts(&mut self, stmts: &[Stmt]) -> PsiResult<Option<NType>> {
        for stmt in stmts {
            stmt.accept(self)?;
        }
        Ok(None)
    }
}

impl AstVisitor for Annotator {
    type Output = PsiResult<Option<NType>>;

    fn visit_program(&mut self, program: &Program) -> Self::Output {
        program.block.accept(self)
    }

    fn visit_block(&mut self, block: &Block) -> Self::Output {
        block.decls.accept(self)?;
        block.body.accept(self)
    }

    fn visit_declarations(&mut self, decls: &Declarations) -> Self::Output {
        for var in &decls.vars {
            var.accept(self)?;
        }
        Ok(None)
    }

    fn visit_var_decl(&mut self, decl: &VarDecl) -> Self::Output {
        self.vars.insert(decl.name.text.clone(), decl.ty);
        Ok(Some(decl.ty))
    }

    fn visit_proc_decl(&mut self, _decl: &ProcDecl) -> Self::Output {
        Ok(None)
    }

    fn visit_func_decl(&mut self, _decl: &FuncDecl) -> Self::Output {
        Ok(None)
    }

    fn visit_param_list(&mut self, _params: &ParamList) -> Self::Output {
        Ok(None)
    }

    fn visit_write(&mut self, stmt: &WriteStmt) -> Self::Output {
        self.exprs(&stmt.args)
    }

    fn visit_read(&mut self, _stmt: &ReadStmt) -> Self::Output {
        Ok(None)
    }

    fn visit_assign(&mut self, stmt: &AssignStmt) -> Self::Output {
        stmt.expr.accept(self)?;
        Ok(None)
    }

    fn visit_call(&mut self, stmt: &CallStmt) -> Self::Output {
        self.exprs(&stmt.args)
    }

    fn visit_if(&mut self, stmt: &IfStmt) -> Self::Output {
        stmt.condition.accept(self)?;
        stmt.then_branch.accept(self)?;
        if let Some(else_branch) = &stmt.else_branch {
            else_branch.accept(self)?;
        }
        Ok(None)
    }

    fn visit_while(&mut self, stmt: &WhileStmt) -> Self::Output {
        stmt.condition.accept(self)?;
        stmt.body.accept(self)
    }

    fn visit_repeat(&mut self, stmt: &RepeatStmt) -> Self::Output {
        self.stmts(&stmt.body)?;
        stmt.until.accept(self)?;
        Ok(None)
    }

    fn visit_for(&mut self, stmt: &ForStmt) -> Self::Output {
        stmt.from.accept(self)?;
        stmt.to.accept(self)?;
        stmt.body.accept(self)
    }

    fn visit_compound(&mut self, stmt: &CompoundStmt) -> Self::Output {
        self.stmts(&stmt.stmts)
    }

    fn visit_literal(&mut self, expr: &Literal) -> Self::Output {
        let ty = match expr.value.kind {
            TokenKind::LInteger => NType::Int,
            TokenKind::LReal => NType::Real,
            TokenKind::LBoolean => NType::Bool,
            TokenKind::LChar => NType::Char,
            _ => NType::String,
        };
        self.types.annotate(expr.id, ty)?;
        Ok(Some(ty))
    }

    fn visit_identifier(&mut self, expr: &Identifier) -> Self::Output {
        let ty = self.vars.get(&expr.name.text).copied();
        if let Some(ty) = ty {
            self.types.annotate(expr.id, ty)?;
        }
        Ok(ty)
    }

    fn visit_unary(&mut self, expr: &Unary) -> Self::Output {
        let ty = expr.expr.accept(self)?;
        if let Some(ty) = ty {
            self.types.annotate(expr.id, ty)?;
        }
        Ok(ty)
    }

    fn visit_binary(&mut self, expr: &Binary) -> Self::Output {
        let left = expr.left.accept(self)?;
        let right = expr.right.accept(self)?;
        let ty = match expr.op.kind {
            TokenKind::Eq | TokenKind::Neq | TokenKind::Lt | TokenKind::Leq | TokenKind::Gt | TokenKind::Geq => {
                Some(NType::Bool)
            }
            TokenKind::Div => Some(NType::Real),
            _ if left == Some(NType::Real) || right == Some(NType::Real) => Some(NType::Real),
            _ => left.or(right),
        };
        if let Some(ty) = ty {
            self.types.annotate(expr.id, ty)?;
        }
        Ok(ty)
    }

    fn visit_fn_call(&mut self, expr: &FnCall) -> Self::Output {
        self.exprs(&expr.args)
    }
}

fn assigned_expr(program: &Program, index: usize) -> &Expr {
    match &program.block.body.stmts[index] {
        Stmt::Assign(assign) => &assign.expr,
        other => panic!("Expected assignment, got {:?}", other),
    }
}

#[test]
fn test_node_counter_minimal() -> PsiResult<()> {
    let program = parse_source("test.pas", "program P; begin end.")?;
    // program, block, declarations, compound
    assert_eq!(NodeCounter::count(&program), 4);
    Ok(())
}

#[test]
fn test_node_counter_counts_every_variant() -> PsiResult<()> {
    let program = parse_source("test.pas", "program P; var a : integer; begin a := 1 + 2 end.")?;
    assert_eq!(NodeCounter::count(&program), 9);

    let program = parse_source(
        "test.pas",
        "program P;
         procedure Q (x : integer); begin end;
         begin if a then read (a) else write (-a) end.",
    )?;
    // program, block, declarations
    //   proc, params, var-decl, block, declarations, compound
    //   compound, if, identifier, compound, read, compound, write, unary, identifier
    assert_eq!(NodeCounter::count(&program), 18);
    Ok(())
}

#[test]
fn test_node_counter_on_subtree() -> PsiResult<()> {
    let program = parse_source("test.pas", "program P; begin x := f (1, 2 * y) end.")?;
    // call, literal, binary, literal, identifier
    assert_eq!(NodeCounter::count(assigned_expr(&program, 0)), 5);
    Ok(())
}

#[test]
fn test_annotation_pass() -> PsiResult<()> {
    let source = "program P; var i : integer; r : real; begin i := i + 1; r := r * 2; b := i < 3 end.";
    let program = parse_source("test.pas", source)?;
    let mut annotator = Annotator::new();
    program.accept(&mut annotator)?;
    let types = &annotator.types;

    assert_eq!(types.type_of_expr(assigned_expr(&program, 0)), Some(NType::Int));
    assert_eq!(types.type_of_expr(assigned_expr(&program, 1)), Some(NType::Real));
    assert_eq!(types.type_of_expr(assigned_expr(&program, 2)), Some(NType::Bool));
    // i, 1, +, r, 2, *, i, 3, <
    assert_eq!(types.len(), 9);
    Ok(())
}

#[test]
fn test_annotation_is_write_once() -> PsiResult<()> {
    let program = parse_source("test.pas", "program P; begin x := 'c' end.")?;
    let mut annotator = Annotator::new();
    program.accept(&mut annotator)?;

    // A second walk over the same tree would annotate the same ids again
    match program.accept(&mut annotator) {
        Err(PsiError::TypeAlreadyAnnotated { existing, .. }) => assert_eq!(existing, NType::Char),
        other => panic!("Expected TypeAlreadyAnnotated, got {:?}", other),
    }

    annotator.types.clear();
    assert!(annotator.types.is_empty());
    program.accept(&mut annotator)?;
    assert_eq!(annotator.types.len(), 1);
    Ok(())
}
