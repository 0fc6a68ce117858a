pub mod decl_handlers;
pub mod expression_handlers;
pub mod psi_printer;
pub mod statement_handlers;
pub mod visitor;

pub use psi_printer::PsiPrinter;
