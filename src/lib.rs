use std::{fs::File, io::Read, path::Path};

pub mod ast;
pub mod frontend;
pub mod printer;
pub mod semantic;
pub mod utils;

use crate::ast::Program;
use crate::frontend::{Lexer, Parser};
use crate::utils::config::frontend::SOURCE_EXTENSION;
use crate::utils::errors::{ParseResult, PsiError, PsiResult};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn read(path: &Path) -> PsiResult<String> {
    match path.extension() {
        Some(ext) if ext == SOURCE_EXTENSION => {}
        _ => {
            return Err(PsiError::FileReadError(format!(
                "File must have a .{} extension",
                SOURCE_EXTENSION
            )))
        }
    }
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Scan and parse `source`; failures are reported against `file_name`.
pub fn parse_source(file_name: &str, source: &str) -> ParseResult<Program> {
    let lexer = Lexer::new(source).with_file_name(file_name);
    Parser::new(lexer).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_manifest() {
        assert_eq!(VERSION, "0.1.0");
    }

    #[test]
    fn test_read_rejects_other_extensions() {
        let err = read(Path::new("program.pl0")).unwrap_err();
        assert!(matches!(err, PsiError::FileReadError(_)));
    }
}
