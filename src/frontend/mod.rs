pub mod expressions;
pub mod lexer;
pub mod parser;
pub mod source;
pub mod statements;
pub mod token;

pub use lexer::Lexer;
pub use parser::Parser;
pub use source::{TokenSource, TokenStream, TokenWindow};
pub use token::{Token, TokenKind};
