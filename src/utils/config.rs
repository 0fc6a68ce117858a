// Front end constants
pub mod frontend {
    // Number of consumed tokens the parser keeps behind the current one.
    // Two are needed to recover an assignment target after ':=' is consumed.
    pub const LOOKBACK: usize = 2;

    pub const SOURCE_EXTENSION: &str = "pas";

    // File name reported for sources that did not come from disk
    pub const ANONYMOUS_SOURCE: &str = "<input>";
}

// Reference printer constants
pub mod printer {
    // Spaces emitted per indentation level
    pub const INDENT_WIDTH: usize = 3;

    pub const STATEMENT_TERMINATOR: &str = ";";

    pub fn indent(level: usize) -> String {
        " ".repeat(level * INDENT_WIDTH)
    }
}
