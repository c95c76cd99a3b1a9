//! The expression tree: nodes, their identity, construction, evaluation and traversal

mod builder;
mod errors;
mod eval;
mod identity;
mod kind;
mod leaves;
mod node;
mod render;
mod traversal;

pub use builder::Operand;
pub use errors::TreeError;
pub use eval::EvaluationPoint;
pub use kind::{BinaryOperator, SymbolKind};
pub use node::Symbol;
pub use render::RenderStyle;
pub use traversal::PreOrder;
