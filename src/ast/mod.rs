// Abstract Syntax Tree definitions for the Pascal front end.
// Three node families: declarations, statements and expressions.

mod traits;
pub use traits::Node;

// AST node modules
mod program;
mod block;
mod declarations;
mod statements;
mod expressions;
mod literals;
mod io;
mod types;

pub use program::Program;
pub use block::Block;
pub use declarations::{Declarations, FuncDecl, ParamList, ProcDecl, ProcFnDecl, VarDecl};
pub use statements::{AssignStmt, CallStmt, CompoundStmt, ForDirection, ForStmt, IfStmt, RepeatStmt, Stmt, WhileStmt};
pub use expressions::{Binary, Expr, FnCall, Unary};
pub use literals::{Identifier, Literal};
pub use io::{ReadStmt, WriteStmt};
pub use types::{ExprId, NType};
