//! symtree - Symbolic expression trees for model equations
//!
//! Leaves (scalars, variables, parameters, state-vector slices, time) are
//! combined with arithmetic operators into trees. Every tree has a
//! deterministic structural id, can be walked in pre-order, drawn as a
//! diagram, and evaluated numerically for a time `t` and state vector `y`.
//!
//! Attaching a symbol to a new parent always copies it, so trees never
//! share nodes and the symbols you build with stay as they were.
//!
//! # Examples
//!
//! ```
//! use symtree::{Symbol, Value};
//!
//! let y = Symbol::state_vector(0..2)?;
//! let expr = (&y + &Symbol::scalar(1.0)) * Symbol::time();
//!
//! assert_eq!(expr.children()[0].children()[0].id(), y.id());
//! assert!(y.parent().is_none());
//!
//! let names: Vec<&str> = expr.pre_order().map(Symbol::name).collect();
//! assert_eq!(names, ["*", "+", "y[0:2]", "1", "t"]);
//!
//! let value = expr.evaluate(Some(2.0), Some(&[1.0, 3.0]))?;
//! assert_eq!(value, Value::Array(vec![4.0, 8.0]));
//! # Ok::<(), symtree::TreeError>(())
//! ```

pub mod settings;
pub mod spatial;
pub mod symbol;
pub mod value;

// Re-export the main public API
pub use settings::Settings;
pub use spatial::{CoordinateSystem, PointCounts};
pub use symbol::{
    BinaryOperator, EvaluationPoint, Operand, PreOrder, RenderStyle, Symbol, SymbolKind, TreeError,
};
pub use value::{Value, ValueError};
