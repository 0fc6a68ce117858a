use crate::ast::{Node, Program};
use crate::utils::config::printer::{indent, STATEMENT_TERMINATOR};

/// Regenerates source text from a tree.
///
/// Every handler returns its own fragment; composite handlers concatenate the
/// fragments of their children. Declaration and statement lines start with a
/// newline and the current indentation, sub-expressions stay on the line.
#[derive(Debug, Default)]
pub struct PsiPrinter {
    pub(crate) level: usize,
}

impl PsiPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(skip_all, fields(program = %program.name))]
    pub fn print(program: &Program) -> String {
        let text = program.accept(&mut PsiPrinter::new());
        tracing::debug!(bytes = text.len(), "printed program");
        text
    }

    /// `text` on a fresh line at the current indentation.
    pub(crate) fn line(&self, text: &str) -> String {
        format!("\n{}{}", indent(self.level), text)
    }

    /// Render `node` one level deeper than the current line.
    pub(crate) fn nested<N: Node>(&mut self, node: &N) -> String {
        self.level += 1;
        let text = node.accept(self);
        self.level -= 1;
        text
    }

    /// Render each statement of a list, terminating every one.
    pub(crate) fn stmt_list<N: Node>(&mut self, stmts: &[N]) -> String {
        stmts
            .iter()
            .map(|stmt| stmt.accept(self) + STATEMENT_TERMINATOR)
            .collect()
    }

    /// Comma-separated rendering of `nodes`, used for argument and parameter lists.
    pub(crate) fn comma_list<N: Node>(&mut self, nodes: &[N]) -> String {
        nodes.iter().map(|node| node.accept(self)).collect::<Vec<_>>().join(", ")
    }
}
