use std::collections::VecDeque;

use crate::frontend::token::{Token, TokenKind};
use crate::utils::config::frontend::ANONYMOUS_SOURCE;

/// A forward-only supplier of tokens.
///
/// Once input is exhausted `next_token` keeps returning an `Eof` token. Lexical
/// errors arrive in-band as `Error` tokens.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;

    fn file_name(&self) -> &str;

    fn line_count(&self) -> usize;
}

/// A token source over tokens produced ahead of time, e.g. by a foreign scanner.
pub struct TokenStream {
    tokens: VecDeque<Token>,
    file_name: String,
    line_count: usize,
    eof: Token,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let line_count = tokens.iter().map(|t| t.line).max().unwrap_or(1);
        let eof = match tokens.last() {
            Some(last) => Token::new(TokenKind::Eof, "", last.line, last.column + last.text.chars().count().max(1)),
            None => Token::new(TokenKind::Eof, "", 1, 1),
        };
        Self {
            tokens: tokens.into(),
            file_name: ANONYMOUS_SOURCE.to_string(),
            line_count,
            eof,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        match self.tokens.pop_front() {
            Some(token) if token.is(TokenKind::Eof) => {
                self.eof = token.clone();
                token
            }
            Some(token) => token,
            None => self.eof.clone(),
        }
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn line_count(&self) -> usize {
        self.line_count
    }
}

/// Ring buffer of the last `N` consumed tokens.
///
/// `back(0)` is the most recently consumed token, `back(1)` the one before it.
/// The window starts filled with a seed token so lookups never miss.
#[derive(Debug, Clone)]
pub struct TokenWindow<const N: usize> {
    slots: [Token; N],
    head: usize,
}

impl<const N: usize> TokenWindow<N> {
    pub fn new(seed: &Token) -> Self {
        Self {
            slots: std::array::from_fn(|_| seed.clone()),
            head: 0,
        }
    }

    pub fn push(&mut self, token: Token) {
        self.head = (self.head + 1) % N;
        self.slots[self.head] = token;
    }

    /// Token consumed `n` steps ago. Panics if `n >= N`.
    pub fn back(&self, n: usize) -> &Token {
        assert!(n < N, "lookback {} exceeds window of {}", n, N);
        &self.slots[(self.head + N - n) % N]
    }
}
