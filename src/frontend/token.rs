use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Ident,
    // Literals
    LInteger,
    LReal,
    LBoolean,
    LChar,
    LString,
    // Keywords
    Program,
    Var,
    Procedure,
    Function,
    Begin,
    End,
    If,
    Then,
    Else,
    While,
    Do,
    Repeat,
    Until,
    For,
    To,
    Downto,
    Write,
    Writeln,
    Read,
    Integer,
    Real,
    Boolean,
    String,
    Char,
    Not,
    And,
    Or,
    Mod,
    // Operators and punctuation
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Neq,
    Lt,
    Leq,
    Gt,
    Geq,
    Assign,
    Semi,
    Period,
    Comma,
    Colon,
    Open,
    Close,
    // Stream markers
    Eof,
    Error,
}

impl TokenKind {
    pub fn keyword(word: &str) -> Option<TokenKind> {
        let kind = match word.to_ascii_lowercase().as_str() {
            "program" => TokenKind::Program,
            "var" => TokenKind::Var,
            "procedure" => TokenKind::Procedure,
            "function" => TokenKind::Function,
            "begin" => TokenKind::Begin,
            "end" => TokenKind::End,
            "if" => TokenKind::If,
            "then" => TokenKind::Then,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "do" => TokenKind::Do,
            "repeat" => TokenKind::Repeat,
            "until" => TokenKind::Until,
            "for" => TokenKind::For,
            "to" => TokenKind::To,
            "downto" => TokenKind::Downto,
            "write" => TokenKind::Write,
            "writeln" => TokenKind::Writeln,
            "read" => TokenKind::Read,
            "integer" => TokenKind::Integer,
            "real" => TokenKind::Real,
            "boolean" => TokenKind::Boolean,
            "string" => TokenKind::String,
            "char" => TokenKind::Char,
            "not" => TokenKind::Not,
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            "mod" => TokenKind::Mod,
            "true" | "false" => TokenKind::LBoolean,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::LInteger | TokenKind::LReal | TokenKind::LBoolean | TokenKind::LChar | TokenKind::LString
        )
    }

    /// Fixed spelling of keywords and symbols; `None` for kinds whose text varies.
    pub fn spelling(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Program => "program",
            TokenKind::Var => "var",
            TokenKind::Procedure => "procedure",
            TokenKind::Function => "function",
            TokenKind::Begin => "begin",
            TokenKind::End => "end",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Repeat => "repeat",
            TokenKind::Until => "until",
            TokenKind::For => "for",
            TokenKind::To => "to",
            TokenKind::Downto => "downto",
            TokenKind::Write => "write",
            TokenKind::Writeln => "writeln",
            TokenKind::Read => "read",
            TokenKind::Integer => "integer",
            TokenKind::Real => "real",
            TokenKind::Boolean => "boolean",
            TokenKind::String => "string",
            TokenKind::Char => "char",
            TokenKind::Not => "not",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Mod => "mod",
            TokenKind::Add => "+",
            TokenKind::Sub => "-",
            TokenKind::Mul => "*",
            TokenKind::Div => "/",
            TokenKind::Eq => "=",
            TokenKind::Neq => "<>",
            TokenKind::Lt => "<",
            TokenKind::Leq => "<=",
            TokenKind::Gt => ">",
            TokenKind::Geq => ">=",
            TokenKind::Assign => ":=",
            TokenKind::Semi => ";",
            TokenKind::Period => ".",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Open => "(",
            TokenKind::Close => ")",
            _ => return None,
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.spelling() {
            Some(text) => write!(f, "'{}'", text),
            None => {
                let name = match self {
                    TokenKind::Ident => "identifier",
                    TokenKind::LInteger => "integer literal",
                    TokenKind::LReal => "real literal",
                    TokenKind::LBoolean => "boolean literal",
                    TokenKind::LChar => "char literal",
                    TokenKind::LString => "string literal",
                    TokenKind::Eof => "end of input",
                    _ => "lexical error",
                };
                write!(f, "{}", name)
            }
        }
    }
}

/// A classified lexeme with its 1-based source position.
///
/// `text` holds the lexeme for identifiers and keywords, the unquoted value for
/// literals, and the message for `Error` tokens.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        // Position is not part of token identity
        self.kind == other.kind && self.text == other.text
    }
}

impl Eq for Token {}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::LString => write!(f, "\"{}\"", self.text),
            TokenKind::LChar => write!(f, "'{}'", self.text.replace('\'', "''")),
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "{}", self.text),
        }
    }
}
