//! Numeric results produced by evaluating an expression tree

mod errors;
mod ops;

pub use errors::ValueError;
pub use ops::Value;
