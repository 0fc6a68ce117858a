pub mod node_counter;
pub mod type_table;
pub mod visitor;

pub use node_counter::NodeCounter;
pub use type_table::TypeTable;
pub use visitor::AstVisitor;
