use std::sync::LazyLock;

use regex::Regex;

use crate::frontend::source::TokenSource;
use crate::frontend::token::{Token, TokenKind};
use crate::utils::config::frontend::ANONYMOUS_SOURCE;

// integer | real with fraction and/or exponent
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?").expect("numeric literal pattern is valid")
});

/// Scanner for the Pascal subset. Implements [`TokenSource`]; lexical errors
/// come back as `Error` tokens and scanning continues after them.
pub struct Lexer<'a> {
    source: &'a str,
    file_name: String,
    pos: usize,
    line: usize,
    column: usize,
    lines: usize,
    // Position just past the last scanned token; `Eof` is reported here
    last_end: (usize, usize),
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            file_name: ANONYMOUS_SOURCE.to_string(),
            pos: 0,
            line: 1,
            column: 1,
            lines: source.lines().count().max(1),
            last_end: (1, 1),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Drain the source into a vector, `Eof` included.
    #[tracing::instrument(skip_all, fields(file = %self.file_name))]
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is(TokenKind::Eof);
            tokens.push(token);
            if done {
                break;
            }
        }
        tracing::debug!(count = tokens.len(), "scanned tokens");
        tokens
    }

    fn rest(&self) -> &'a str {
        let source: &'a str = self.source;
        &source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    // Skips whitespace and comments. An unterminated comment yields an error token.
    fn skip_trivia(&mut self) -> Option<Token> {
        loop {
            match self.peek() {
                Some(ch) if ch.is_whitespace() => {
                    self.bump();
                }
                Some('{') => {
                    let (line, column) = (self.line, self.column);
                    self.bump();
                    if !self.skip_until("}") {
                        return Some(self.error("Unterminated comment", line, column));
                    }
                }
                Some('(') if self.peek_second() == Some('*') => {
                    let (line, column) = (self.line, self.column);
                    self.bump();
                    self.bump();
                    if !self.skip_until("*)") {
                        return Some(self.error("Unterminated comment", line, column));
                    }
                }
                _ => return None,
            }
        }
    }

    fn skip_until(&mut self, terminator: &str) -> bool {
        while !self.rest().is_empty() {
            if self.rest().starts_with(terminator) {
                for _ in terminator.chars() {
                    self.bump();
                }
                return true;
            }
            self.bump();
        }
        false
    }

    fn scan_token(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        let Some(ch) = self.peek() else {
            let (line, column) = self.last_end;
            return Token::new(TokenKind::Eof, "", line, column);
        };
        match ch {
            ch if ch.is_alphabetic() || ch == '_' => self.scan_identifier(line, column),
            ch if ch.is_ascii_digit() => self.scan_number(line, column),
            '"' => self.scan_string(line, column),
            '\'' => self.scan_char(line, column),
            ':' => self.scan_pair(TokenKind::Colon, &[('=', TokenKind::Assign)], line, column),
            '<' => self.scan_pair(TokenKind::Lt, &[('=', TokenKind::Leq), ('>', TokenKind::Neq)], line, column),
            '>' => self.scan_pair(TokenKind::Gt, &[('=', TokenKind::Geq)], line, column),
            ch => self.scan_single_char_token(ch, line, column),
        }
    }

    fn scan_identifier(&mut self, line: usize, column: usize) -> Token {
        let rest = self.rest();
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                self.bump();
            } else {
                break;
            }
        }
        let word = &rest[..rest.len() - self.rest().len()];
        let kind = TokenKind::keyword(word).unwrap_or(TokenKind::Ident);
        Token::new(kind, word, line, column)
    }

    fn scan_number(&mut self, line: usize, column: usize) -> Token {
        let text = match NUMBER.find(self.rest()) {
            Some(m) => m.as_str(),
            None => return self.error("Invalid number", line, column),
        };
        let kind = if text.contains(['.', 'e', 'E']) {
            TokenKind::LReal
        } else {
            TokenKind::LInteger
        };
        for _ in text.chars() {
            self.bump();
        }
        Token::new(kind, text, line, column)
    }

    fn scan_string(&mut self, line: usize, column: usize) -> Token {
        self.bump(); // Consume opening quote
        let rest = self.rest();
        loop {
            match self.peek() {
                Some('"') => {
                    let text = &rest[..rest.len() - self.rest().len()];
                    self.bump();
                    return Token::new(TokenKind::LString, text, line, column);
                }
                Some('\n') | None => return self.error("Unterminated string literal", line, column),
                Some(_) => {
                    self.bump();
                }
            }
        }
    }

    fn scan_char(&mut self, line: usize, column: usize) -> Token {
        self.bump(); // Consume opening quote
        let value = match self.peek() {
            Some('\n') | None => return self.error("Unterminated char literal", line, column),
            // '' inside a char literal stands for one quote
            Some('\'') if self.peek_second() == Some('\'') => {
                self.bump();
                '\''
            }
            Some('\'') => {
                self.bump();
                return self.error("Empty char literal", line, column);
            }
            Some(ch) => ch,
        };
        self.bump();
        if self.peek() == Some('\'') {
            self.bump();
            return Token::new(TokenKind::LChar, value.to_string(), line, column);
        }
        // Resynchronise on the closing quote if it is on this line
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.bump();
            if ch == '\'' {
                break;
            }
        }
        self.error("Char literal must hold exactly one character", line, column)
    }

    fn scan_pair(&mut self, single: TokenKind, pairs: &[(char, TokenKind)], line: usize, column: usize) -> Token {
        let first = self.bump().unwrap_or_default();
        if let Some(next) = self.peek() {
            if let Some(&(second, kind)) = pairs.iter().find(|(c, _)| *c == next) {
                self.bump();
                return Token::new(kind, format!("{}{}", first, second), line, column);
            }
        }
        Token::new(single, first.to_string(), line, column)
    }

    fn scan_single_char_token(&mut self, ch: char, line: usize, column: usize) -> Token {
        self.bump();
        let kind = match ch {
            '+' => TokenKind::Add,
            '-' => TokenKind::Sub,
            '*' => TokenKind::Mul,
            '/' => TokenKind::Div,
            '=' => TokenKind::Eq,
            ';' => TokenKind::Semi,
            '.' => TokenKind::Period,
            ',' => TokenKind::Comma,
            '(' => TokenKind::Open,
            ')' => TokenKind::Close,
            _ => return self.error(&format!("Unknown symbol '{}'", ch), line, column),
        };
        Token::new(kind, ch.to_string(), line, column)
    }

    fn error(&self, message: &str, line: usize, column: usize) -> Token {
        tracing::debug!(file = %self.file_name, line, column, message, "lexical error");
        Token::new(TokenKind::Error, message, line, column)
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        if let Some(error) = self.skip_trivia() {
            return error;
        }
        let token = self.scan_token();
        if !token.is(TokenKind::Eof) {
            self.last_end = (self.line, self.column);
        }
        token
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn line_count(&self) -> usize {
        self.lines
    }
}

// Convenience function mirroring the `scan` entry point of the driver
pub fn scan(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}
