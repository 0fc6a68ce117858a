use std::io;
use thiserror::Error;

use crate::ast::{ExprId, NType};

/// A parse failure: the only error the core front end raises.
///
/// Carries everything a caller needs to render a diagnostic; the parser itself
/// never prints anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{file}({line}:{column}): {message}")]
pub struct ParseError {
    pub file: String,
    /// Total number of lines in the source being parsed.
    pub lines: usize,
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(file: impl Into<String>, lines: usize, line: usize, column: usize, message: impl Into<String>) -> Self {
        ParseError {
            file: file.into(),
            lines,
            line,
            column,
            message: message.into(),
        }
    }

    /// Render the failure with the offending source line and a caret under the column.
    pub fn render(&self, source: &str) -> String {
        let mut out = format!("error: {}\n", self.message);
        let gutter = self.lines.max(self.line).to_string().len();
        out.push_str(&format!("{:>width$}--> {}:{}:{}\n", "", self.file, self.line, self.column, width = gutter));
        if let Some(text) = source.lines().nth(self.line.saturating_sub(1)) {
            out.push_str(&format!("{:>width$} |\n", "", width = gutter));
            out.push_str(&format!("{:>width$} | {}\n", self.line, text, width = gutter));
            let pad = " ".repeat(self.column.saturating_sub(1));
            out.push_str(&format!("{:>width$} | {}^\n", "", pad, width = gutter));
        }
        out
    }
}

#[derive(Debug, Error)]
pub enum PsiError {
    #[error("File read error: {0}")]
    FileReadError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Expression #{id} already annotated with type {existing}")]
    TypeAlreadyAnnotated { id: ExprId, existing: NType },
}

pub type PsiResult<T> = Result<T, PsiError>;

pub type ParseResult<T> = Result<T, ParseError>;
