use crate::ast::{Block, Declarations, ExprId, FuncDecl, NType, ParamList, ProcDecl, ProcFnDecl, Program, VarDecl};
use crate::frontend::source::{TokenSource, TokenWindow};
use crate::frontend::token::{Token, TokenKind};
use crate::utils::config::frontend::LOOKBACK;
use crate::utils::errors::{ParseError, ParseResult};

const TYPES: &[TokenKind] = &[
    TokenKind::Integer,
    TokenKind::Real,
    TokenKind::Boolean,
    TokenKind::String,
    TokenKind::Char,
];

/// Recursive-descent parser with one token of lookahead.
///
/// Consumed tokens are kept in a small [`TokenWindow`] so a rule can look back
/// at what it has already matched. The first malformed construct ends the
/// parse; there is no recovery.
pub struct Parser<S: TokenSource> {
    source: S,
    token: Token,
    window: TokenWindow<LOOKBACK>,
    next_id: u32,
}

impl<S: TokenSource> Parser<S> {
    pub fn new(mut source: S) -> Self {
        let token = source.next_token();
        let window = TokenWindow::new(&token);
        Self {
            source,
            token,
            window,
            next_id: 0,
        }
    }

    /// Parse a whole program; trailing tokens after the final `.` are an error.
    #[tracing::instrument(skip_all, fields(file = %self.source.file_name()))]
    pub fn parse(&mut self) -> ParseResult<Program> {
        let program = self.program()?;
        if !self.token.is(TokenKind::Eof) {
            return Err(self.unexpected());
        }
        tracing::debug!(program = %program.name, expressions = self.next_id, "parsed program");
        Ok(program)
    }

    // program = "program" IDENT ";" block "." .
    fn program(&mut self) -> ParseResult<Program> {
        self.expect(&[TokenKind::Program])?;
        let name = self.expect(&[TokenKind::Ident])?;
        self.expect(&[TokenKind::Semi])?;
        let block = self.block()?;
        self.expect(&[TokenKind::Period])?;
        Ok(Program::new(name, block))
    }

    // block = declarations compound-stmt .
    fn block(&mut self) -> ParseResult<Block> {
        let decls = self.declarations()?;
        let body = self.compound_stmt()?;
        Ok(Block::new(decls, body))
    }

    // declarations = [ "var" (var-decl ";")+ ] (proc-decl | func-decl)* .
    fn declarations(&mut self) -> ParseResult<Declarations> {
        let mut vars = Vec::new();
        if self.matches(&[TokenKind::Var]) {
            loop {
                vars.extend(self.var_decls()?);
                self.expect(&[TokenKind::Semi])?;
                if !self.peek(&[TokenKind::Ident]) {
                    break;
                }
            }
        }

        let mut proc_fns = Vec::new();
        loop {
            if self.matches(&[TokenKind::Procedure]) {
                proc_fns.push(ProcFnDecl::Procedure(self.proc_decl()?));
            } else if self.matches(&[TokenKind::Function]) {
                proc_fns.push(ProcFnDecl::Function(self.func_decl()?));
            } else {
                break;
            }
        }
        Ok(Declarations::new(vars, proc_fns))
    }

    // ident-list = IDENT ("," IDENT)* .
    fn ident_list(&mut self) -> ParseResult<Vec<Token>> {
        let mut names = Vec::new();
        loop {
            names.push(self.expect(&[TokenKind::Ident])?);
            if !self.matches(&[TokenKind::Comma]) {
                break;
            }
        }
        Ok(names)
    }

    // var-decl = ident-list ":" type .
    // Each name becomes its own typed VarDecl.
    fn var_decls(&mut self) -> ParseResult<Vec<VarDecl>> {
        let names = self.ident_list()?;
        self.expect(&[TokenKind::Colon])?;
        let ty = self.type_name()?;
        Ok(names.into_iter().map(|name| VarDecl::new(name, ty)).collect())
    }

    // type = "integer" | "real" | "boolean" | "string" | "char" .
    fn type_name(&mut self) -> ParseResult<NType> {
        let token = self.expect(TYPES)?;
        NType::from_keyword(token.kind).ok_or_else(|| self.fail(format!("Unknown type {}", token.kind)))
    }

    // proc-decl = "procedure" IDENT paramlist ";" block ";" .
    fn proc_decl(&mut self) -> ParseResult<ProcDecl> {
        let name = self.expect(&[TokenKind::Ident])?;
        let params = self.param_list()?;
        self.expect(&[TokenKind::Semi])?;
        let block = self.block()?;
        self.expect(&[TokenKind::Semi])?;
        tracing::debug!(name = %name, params = params.params.len(), "procedure declared");
        Ok(ProcDecl::new(name, params, block))
    }

    // func-decl = "function" IDENT paramlist ":" type ";" block ";" .
    fn func_decl(&mut self) -> ParseResult<FuncDecl> {
        let name = self.expect(&[TokenKind::Ident])?;
        let params = self.param_list()?;
        self.expect(&[TokenKind::Colon])?;
        let return_type = self.type_name()?;
        self.expect(&[TokenKind::Semi])?;
        let block = self.block()?;
        self.expect(&[TokenKind::Semi])?;
        tracing::debug!(name = %name, params = params.params.len(), %return_type, "function declared");
        Ok(FuncDecl::new(name, params, return_type, block))
    }

    // paramlist = "(" [ var-decl ("," var-decl)* ] ")" .
    fn param_list(&mut self) -> ParseResult<ParamList> {
        self.expect(&[TokenKind::Open])?;
        let mut params = Vec::new();
        if !self.peek(&[TokenKind::Close]) {
            loop {
                params.extend(self.var_decls()?);
                if !self.matches(&[TokenKind::Comma]) {
                    break;
                }
            }
        }
        self.expect(&[TokenKind::Close])?;
        Ok(ParamList::new(params))
    }

    // Helpers -------------------------------------------------------------

    /// True if the current token is one of `kinds`. Consumes nothing.
    pub(crate) fn peek(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.token.kind)
    }

    /// Consume the current token if it is one of `kinds`.
    pub(crate) fn matches(&mut self, kinds: &[TokenKind]) -> bool {
        if self.peek(kinds) {
            self.advance();
            return true;
        }
        false
    }

    /// Consume a token of one of `kinds` and return it, or fail naming them.
    pub(crate) fn expect(&mut self, kinds: &[TokenKind]) -> ParseResult<Token> {
        if self.matches(kinds) {
            return Ok(self.prev().clone());
        }
        let expected = kinds.iter().map(|kind| kind.to_string()).collect::<Vec<_>>().join(" or ");
        Err(self.fail(format!("Expecting {}, found {}", expected, self.describe_current())))
    }

    fn advance(&mut self) {
        let next = self.source.next_token();
        let consumed = std::mem::replace(&mut self.token, next);
        tracing::trace!(kind = ?consumed.kind, line = consumed.line, column = consumed.column, "consumed");
        self.window.push(consumed);
    }

    /// The most recently consumed token.
    pub(crate) fn prev(&self) -> &Token {
        self.window.back(0)
    }

    /// The token consumed before `prev`.
    pub(crate) fn prev_prev(&self) -> &Token {
        self.window.back(1)
    }

    pub(crate) fn next_id(&mut self) -> ExprId {
        let id = ExprId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn describe_current(&self) -> String {
        match self.token.kind {
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::Ident => format!("identifier '{}'", self.token.text),
            kind if kind.is_literal() => format!("{} {}", kind, self.token),
            _ => format!("'{}'", self.token.text),
        }
    }

    /// Build a failure at the current token. A lexical error token replaces
    /// `message` with its own text.
    pub(crate) fn fail(&self, message: impl Into<String>) -> ParseError {
        let message = if self.token.is(TokenKind::Error) {
            self.token.text.clone()
        } else {
            message.into()
        };
        tracing::debug!(line = self.token.line, column = self.token.column, %message, "parse failure");
        ParseError::new(
            self.source.file_name(),
            self.source.line_count(),
            self.token.line,
            self.token.column,
            message,
        )
    }

    pub(crate) fn unexpected(&self) -> ParseError {
        self.fail(format!("Unexpected {}", self.describe_current()))
    }
}
