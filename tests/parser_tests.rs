use psic::ast::{Expr, ForDirection, NType, Program, Stmt};
use psic::frontend::lexer::scan;
use psic::frontend::parser::Parser;
use psic::frontend::source::TokenStream;
use psic::frontend::token::TokenKind;
use psic::parse_source;
use psic::utils::errors::{ParseError, PsiResult};

fn parse(source: &str) -> PsiResult<Program> {
    Ok(parse_source("test.pas", source)?)
}

fn parse_err(source: &str) -> ParseError {
    match parse_source("test.pas", source) {
        Ok(program) => panic!("Expected parse failure, got {:?}", program),
        Err(err) => err,
    }
}

// Parse `expr` as the right-hand side of a single assignment.
fn parse_expr(expr: &str) -> PsiResult<Expr> {
    let program = parse(&format!("program P; begin x := {} end.", expr))?;
    match program.block.body.stmts.into_iter().next() {
        Some(Stmt::Assign(assign)) => Ok(assign.expr),
        other => panic!("Expected assignment, got {:?}", other),
    }
}

fn literal(expr: &Expr) -> &str {
    match expr {
        Expr::Literal(lit) => &lit.value.text,
        other => panic!("Expected literal, got {:?}", other),
    }
}

#[test]
fn test_minimal_program() -> PsiResult<()> {
    let program = parse("program P; begin end.")?;
    assert_eq!(program.name.text, "P");
    assert!(program.block.decls.is_empty());
    assert!(program.block.body.stmts.is_empty());
    Ok(())
}

#[test]
fn test_multiplication_binds_tighter() -> PsiResult<()> {
    let Expr::Binary(add) = parse_expr("2 + 3 * 4")? else {
        panic!("Expected binary expression");
    };
    assert_eq!(add.op.kind, TokenKind::Add);
    assert_eq!(literal(&add.left), "2");
    let Expr::Binary(mul) = add.right.as_ref() else {
        panic!("Expected binary right operand");
    };
    assert_eq!(mul.op.kind, TokenKind::Mul);
    assert_eq!(literal(&mul.left), "3");
    assert_eq!(literal(&mul.right), "4");
    Ok(())
}

#[test]
fn test_parentheses_group() -> PsiResult<()> {
    let Expr::Binary(mul) = parse_expr("(2 + 3) * 4")? else {
        panic!("Expected binary expression");
    };
    assert_eq!(mul.op.kind, TokenKind::Mul);
    assert_eq!(literal(&mul.right), "4");
    let Expr::Binary(add) = mul.left.as_ref() else {
        panic!("Expected binary left operand");
    };
    assert_eq!(add.op.kind, TokenKind::Add);
    Ok(())
}

#[test]
fn test_binary_operators_associate_left() -> PsiResult<()> {
    let Expr::Binary(outer) = parse_expr("1 - 2 - 3")? else {
        panic!("Expected binary expression");
    };
    assert_eq!(literal(&outer.right), "3");
    let Expr::Binary(inner) = outer.left.as_ref() else {
        panic!("Expected nested subtraction on the left");
    };
    assert_eq!(literal(&inner.left), "1");
    assert_eq!(literal(&inner.right), "2");
    Ok(())
}

#[test]
fn test_comparison_below_term() -> PsiResult<()> {
    let Expr::Binary(eq) = parse_expr("a + 1 < b = c or d")? else {
        panic!("Expected binary expression");
    };
    assert_eq!(eq.op.kind, TokenKind::Eq);
    let Expr::Binary(lt) = eq.left.as_ref() else {
        panic!("Expected comparison on the left");
    };
    assert_eq!(lt.op.kind, TokenKind::Lt);
    let Expr::Binary(or) = eq.right.as_ref() else {
        panic!("Expected 'or' term on the right");
    };
    assert_eq!(or.op.kind, TokenKind::Or);
    Ok(())
}

#[test]
fn test_unary_operators() -> PsiResult<()> {
    let Expr::Unary(outer) = parse_expr("- -x")? else {
        panic!("Expected unary expression");
    };
    assert_eq!(outer.op.kind, TokenKind::Sub);
    assert!(matches!(outer.expr.as_ref(), Expr::Unary(inner) if inner.op.kind == TokenKind::Sub));

    // `not` takes a primary, so it binds tighter than `and`
    let Expr::Binary(and) = parse_expr("not a and b")? else {
        panic!("Expected binary expression");
    };
    assert_eq!(and.op.kind, TokenKind::And);
    assert!(matches!(and.left.as_ref(), Expr::Unary(not) if not.op.kind == TokenKind::Not));
    Ok(())
}

#[test]
fn test_not_requires_primary() {
    let err = parse_err("program P; begin x := not -y end.");
    assert!(err.message.starts_with("Expecting identifier or literal"), "{}", err.message);
}

#[test]
fn test_var_decls_expand_ident_lists() -> PsiResult<()> {
    let program = parse("program P; var a, b : integer; c : real; begin end.")?;
    let vars: Vec<(&str, NType)> = program
        .block
        .decls
        .vars
        .iter()
        .map(|var| (var.name.text.as_str(), var.ty))
        .collect();
    assert_eq!(vars, vec![("a", NType::Int), ("b", NType::Int), ("c", NType::Real)]);
    Ok(())
}

#[test]
fn test_all_declared_types() -> PsiResult<()> {
    let program = parse("program P; var a : integer; b : real; c : boolean; d : string; e : char; begin end.")?;
    let types: Vec<NType> = program.block.decls.vars.iter().map(|var| var.ty).collect();
    assert_eq!(types, vec![NType::Int, NType::Real, NType::Bool, NType::String, NType::Char]);
    Ok(())
}

#[test]
fn test_procedures_and_functions() -> PsiResult<()> {
    let source = "program P;
        procedure Show (a, b : integer, c : real);
        var t : integer;
        begin t := a end;
        function Twice (n : integer) : integer;
            procedure Inner ();
            begin end;
        begin Twice := n * 2 end;
        begin Show (1, 2, 3.0) end.";
    let program = parse(source)?;
    let decls = &program.block.decls.proc_fns;
    assert_eq!(decls.len(), 2);
    assert_eq!(decls[0].name().text, "Show");
    assert_eq!(decls[1].name().text, "Twice");

    let psic::ast::ProcFnDecl::Procedure(show) = &decls[0] else {
        panic!("Expected procedure");
    };
    let params: Vec<&str> = show.params.params.iter().map(|p| p.name.text.as_str()).collect();
    assert_eq!(params, vec!["a", "b", "c"]);
    assert_eq!(show.params.params[2].ty, NType::Real);
    assert_eq!(show.block.decls.vars.len(), 1);

    let psic::ast::ProcFnDecl::Function(twice) = &decls[1] else {
        panic!("Expected function");
    };
    assert_eq!(twice.return_type, NType::Int);
    assert_eq!(twice.block.decls.proc_fns.len(), 1);
    assert_eq!(decls[1].block().decls.proc_fns[0].name().text, "Inner");
    Ok(())
}

#[test]
fn test_assignment_versus_call() -> PsiResult<()> {
    let program = parse("program P; begin x := 1; x (1); x; y := f (1) + 2 end.")?;
    let stmts = &program.block.body.stmts;
    assert_eq!(stmts.len(), 4);

    let Stmt::Assign(assign) = &stmts[0] else {
        panic!("Expected assignment");
    };
    assert_eq!(assign.name.text, "x");

    let Stmt::Call(call) = &stmts[1] else {
        panic!("Expected call with arguments");
    };
    assert_eq!(call.name.text, "x");
    assert_eq!(call.args.len(), 1);

    let Stmt::Call(bare) = &stmts[2] else {
        panic!("Expected bare call");
    };
    assert!(bare.args.is_empty());

    let Stmt::Assign(assign) = &stmts[3] else {
        panic!("Expected assignment");
    };
    assert_eq!(assign.name.text, "y");
    let Expr::Binary(add) = &assign.expr else {
        panic!("Expected binary expression");
    };
    assert!(matches!(add.left.as_ref(), Expr::FnCall(call) if call.name.text == "f" && call.args.len() == 1));
    Ok(())
}

#[test]
fn test_if_branches_are_independent() -> PsiResult<()> {
    let program = parse("program P; begin if a then x := 1 else x := 2 end.")?;
    let Some(Stmt::If(stmt)) = program.block.body.stmts.first() else {
        panic!("Expected if statement");
    };
    let Some(else_branch) = &stmt.else_branch else {
        panic!("Expected else branch");
    };
    assert_ne!(&stmt.then_branch, else_branch);
    let Stmt::Assign(then_assign) = &stmt.then_branch.stmts[0] else {
        panic!("Expected assignment in then branch");
    };
    let Stmt::Assign(else_assign) = &else_branch.stmts[0] else {
        panic!("Expected assignment in else branch");
    };
    assert_eq!(literal(&then_assign.expr), "1");
    assert_eq!(literal(&else_assign.expr), "2");
    Ok(())
}

#[test]
fn test_if_without_else() -> PsiResult<()> {
    let program = parse("program P; begin if a then begin x := 1; y := 2 end end.")?;
    let Some(Stmt::If(stmt)) = program.block.body.stmts.first() else {
        panic!("Expected if statement");
    };
    assert_eq!(stmt.then_branch.stmts.len(), 2);
    assert!(stmt.else_branch.is_none());
    Ok(())
}

#[test]
fn test_loops() -> PsiResult<()> {
    let source = "program P; begin
        while i < 10 do i := i + 1;
        repeat read (x); writeln (x) until x = 0;
        for i := 10 downto 1 do begin write (i); write (\" \") end
    end.";
    let program = parse(source)?;
    let stmts = &program.block.body.stmts;

    let Stmt::While(stmt) = &stmts[0] else {
        panic!("Expected while statement");
    };
    assert_eq!(stmt.body.stmts.len(), 1);

    let Stmt::Repeat(stmt) = &stmts[1] else {
        panic!("Expected repeat statement");
    };
    assert_eq!(stmt.body.len(), 2);
    assert!(matches!(&stmt.body[0], Stmt::Read(read) if read.name.text == "x"));
    assert!(matches!(&stmt.body[1], Stmt::Write(write) if write.newline));

    let Stmt::For(stmt) = &stmts[2] else {
        panic!("Expected for statement");
    };
    assert_eq!(stmt.var.text, "i");
    assert_eq!(stmt.direction, ForDirection::Downto);
    assert_eq!(literal(&stmt.from), "10");
    assert_eq!(literal(&stmt.to), "1");
    assert_eq!(stmt.body.stmts.len(), 2);
    Ok(())
}

#[test]
fn test_semicolon_before_end_and_until() -> PsiResult<()> {
    let program = parse("program P; begin repeat x := 1; until x; y := 2; end.")?;
    assert_eq!(program.block.body.stmts.len(), 2);
    Ok(())
}

#[test]
fn test_empty_repeat_body_is_rejected() {
    let err = parse_err("program P; begin repeat until x end.");
    assert!(err.message.starts_with("Expecting statement"), "{}", err.message);
}

#[test]
fn test_expression_ids_follow_construction_order() -> PsiResult<()> {
    let Expr::Binary(add) = parse_expr("a + b")? else {
        panic!("Expected binary expression");
    };
    assert_eq!(add.left.id().0, 0);
    assert_eq!(add.right.id().0, 1);
    assert_eq!(add.id.0, 2);
    Ok(())
}

#[test]
fn test_missing_period() {
    let err = parse_err("program P; begin end");
    assert_eq!(err.file, "test.pas");
    assert_eq!((err.line, err.column), (1, 21));
    assert!(err.message.contains("'.'"), "{}", err.message);
    assert!(err.message.contains("end of input"), "{}", err.message);
}

#[test]
fn test_missing_period_before_trailing_newline() {
    let source = "program P;\nbegin\nend\n";
    let err = parse_err(source);
    assert_eq!(err.lines, 3);
    assert_eq!((err.line, err.column), (3, 4));
    let rendered = err.render(source);
    assert!(rendered.contains("3 | end"), "{}", rendered);
    assert!(rendered.trim_end().ends_with('^'), "{}", rendered);
}

#[test]
fn test_trailing_tokens() {
    let err = parse_err("program P; begin end. x");
    assert_eq!((err.line, err.column), (1, 23));
    assert!(err.message.starts_with("Unexpected"), "{}", err.message);
}

#[test]
fn test_lexical_error_is_forwarded() {
    let err = parse_err("program P;\nbegin x := # end.");
    assert_eq!(err.message, "Unknown symbol '#'");
    assert_eq!((err.line, err.column), (2, 12));
    assert_eq!(err.lines, 2);
}

#[test]
fn test_mismatch_names_expected_kinds() {
    let err = parse_err("program P; begin for i := 1 up 3 do x end.");
    assert!(err.message.contains("'to' or 'downto'"), "{}", err.message);
    assert!(err.message.contains("identifier 'up'"), "{}", err.message);
}

#[test]
fn test_empty_input() {
    let err = parse_err("");
    assert_eq!((err.line, err.column), (1, 1));
    assert!(err.message.contains("'program'"), "{}", err.message);
}

#[test]
fn test_parse_from_token_stream() -> PsiResult<()> {
    let source = "program P; var x : integer; begin x := 1 end.";
    let stream = TokenStream::new(scan(source)).with_file_name("stream.pas");
    let program = Parser::new(stream).parse()?;
    assert_eq!(program, parse(source)?);
    Ok(())
}
