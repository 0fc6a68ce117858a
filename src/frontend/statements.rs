use crate::ast::{
    AssignStmt, CallStmt, CompoundStmt, ForDirection, ForStmt, IfStmt, ReadStmt, RepeatStmt, Stmt, WhileStmt,
    WriteStmt,
};
use crate::frontend::parser::Parser;
use crate::frontend::source::TokenSource;
use crate::frontend::token::TokenKind;
use crate::utils::errors::ParseResult;

impl<S: TokenSource> Parser<S> {
    pub(crate) fn stmt(&mut self) -> ParseResult<Stmt> {
        if self.matches(&[TokenKind::Write, TokenKind::Writeln]) {
            return self.write_stmt();
        }
        if self.matches(&[TokenKind::Read]) {
            return self.read_stmt();
        }
        if self.matches(&[TokenKind::Ident]) {
            if self.matches(&[TokenKind::Assign]) {
                return self.assign_stmt();
            }
            return self.call_stmt();
        }
        if self.matches(&[TokenKind::If]) {
            return self.if_stmt();
        }
        if self.matches(&[TokenKind::While]) {
            return self.while_stmt();
        }
        if self.matches(&[TokenKind::Repeat]) {
            return self.repeat_stmt();
        }
        if self.matches(&[TokenKind::For]) {
            return self.for_stmt();
        }
        if self.peek(&[TokenKind::Begin]) {
            return Ok(Stmt::Compound(self.compound_stmt()?));
        }
        Err(self.fail(format!("Expecting statement, found {}", self.describe_current())))
    }

    // compound-stmt = "begin" [ statement (";" statement)* ] "end" .
    pub(crate) fn compound_stmt(&mut self) -> ParseResult<CompoundStmt> {
        self.expect(&[TokenKind::Begin])?;
        let stmts = self.stmt_list(TokenKind::End)?;
        self.expect(&[TokenKind::End])?;
        Ok(CompoundStmt::new(stmts))
    }

    // Statements separated by ";" up to (not including) `terminator`.
    // A single ";" right before the terminator is allowed.
    fn stmt_list(&mut self, terminator: TokenKind) -> ParseResult<Vec<Stmt>> {
        let mut stmts = Vec::new();
        while !self.peek(&[terminator]) {
            stmts.push(self.stmt()?);
            if !self.matches(&[TokenKind::Semi]) {
                break;
            }
        }
        Ok(stmts)
    }

    // Body of if/while/for: one statement or a begin...end block, both
    // normalized to a compound statement.
    fn stmt_or_block(&mut self) -> ParseResult<CompoundStmt> {
        if self.peek(&[TokenKind::Begin]) {
            return self.compound_stmt();
        }
        Ok(CompoundStmt::new(vec![self.stmt()?]))
    }

    // write-stmt = ("write" | "writeln") arglist .
    fn write_stmt(&mut self) -> ParseResult<Stmt> {
        let newline = self.prev().is(TokenKind::Writeln);
        let args = self.arg_list()?;
        Ok(Stmt::Write(WriteStmt::new(newline, args)))
    }

    // read-stmt = "read" "(" IDENT ")" .
    fn read_stmt(&mut self) -> ParseResult<Stmt> {
        self.expect(&[TokenKind::Open])?;
        let name = self.expect(&[TokenKind::Ident])?;
        self.expect(&[TokenKind::Close])?;
        Ok(Stmt::Read(ReadStmt::new(name)))
    }

    // assign-stmt = IDENT ":=" expression .
    fn assign_stmt(&mut self) -> ParseResult<Stmt> {
        let name = self.prev_prev().clone();
        let expr = self.expression()?;
        Ok(Stmt::Assign(AssignStmt::new(name, expr)))
    }

    // call-stmt = IDENT [arglist] .
    fn call_stmt(&mut self) -> ParseResult<Stmt> {
        let name = self.prev().clone();
        let args = if self.peek(&[TokenKind::Open]) {
            self.arg_list()?
        } else {
            Vec::new()
        };
        Ok(Stmt::Call(CallStmt::new(name, args)))
    }

    // if-stmt = "if" expression "then" stmt-or-block ["else" stmt-or-block] .
    fn if_stmt(&mut self) -> ParseResult<Stmt> {
        let condition = self.expression()?;
        self.expect(&[TokenKind::Then])?;
        let then_branch = self.stmt_or_block()?;
        let else_branch = if self.matches(&[TokenKind::Else]) {
            Some(self.stmt_or_block()?)
        } else {
            None
        };
        Ok(Stmt::If(IfStmt::new(condition, then_branch, else_branch)))
    }

    // while-stmt = "while" expression "do" stmt-or-block .
    fn while_stmt(&mut self) -> ParseResult<Stmt> {
        let condition = self.expression()?;
        self.expect(&[TokenKind::Do])?;
        let body = self.stmt_or_block()?;
        Ok(Stmt::While(WhileStmt::new(condition, body)))
    }

    // repeat-stmt = "repeat" statement (";" statement)* "until" expression .
    fn repeat_stmt(&mut self) -> ParseResult<Stmt> {
        if self.peek(&[TokenKind::Until]) {
            return Err(self.fail(format!("Expecting statement, found {}", self.describe_current())));
        }
        let body = self.stmt_list(TokenKind::Until)?;
        self.expect(&[TokenKind::Until])?;
        let until = self.expression()?;
        Ok(Stmt::Repeat(RepeatStmt::new(body, until)))
    }

    // for-stmt = "for" IDENT ":=" expression ("to"|"downto") expression "do" stmt-or-block .
    fn for_stmt(&mut self) -> ParseResult<Stmt> {
        let var = self.expect(&[TokenKind::Ident])?;
        self.expect(&[TokenKind::Assign])?;
        let from = self.expression()?;
        let keyword = self.expect(&[TokenKind::To, TokenKind::Downto])?;
        let direction = ForDirection::from_keyword(keyword.kind)
            .ok_or_else(|| self.fail(format!("Expecting 'to' or 'downto', found {}", keyword.kind)))?;
        let to = self.expression()?;
        self.expect(&[TokenKind::Do])?;
        let body = self.stmt_or_block()?;
        Ok(Stmt::For(ForStmt::new(var, from, direction, to, body)))
    }
}
