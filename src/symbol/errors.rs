use thiserror::Error;

use crate::symbol::kind::BinaryOperator;
use crate::value::ValueError;

/// Errors raised while building or evaluating an expression tree
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    #[error("Unsupported operand for '{operator}': {operand} is not a symbol")]
    UnsupportedOperand {
        operator: BinaryOperator,
        operand: String,
    },
    #[error("evaluate() is not implemented for symbol '{name}' of kind {kind}")]
    EvaluationNotImplemented { name: String, kind: &'static str },
    #[error("Symbol '{name}' needs a time value to evaluate")]
    MissingTime { name: String },
    #[error("Symbol '{name}' needs a state vector to evaluate")]
    MissingStateVector { name: String },
    #[error("Slice {start}..{stop} of '{name}' is out of bounds for a state vector of length {len}")]
    StateVectorOutOfBounds {
        name: String,
        start: usize,
        stop: usize,
        len: usize,
    },
    #[error("Invalid state vector range: start={start}, stop={stop}")]
    InvalidStateVectorRange { start: usize, stop: usize },
    #[error("Operator '{name}' expects {expected} children, found {found}")]
    InvalidArity {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("Symbol '{name}' of kind {kind} is not a spatial variable")]
    NotASpatialVariable { name: String, kind: &'static str },
    #[error("Unknown coordinate system: {0}")]
    UnknownCoordinateSystem(String),
    #[error("Value error: {0}")]
    Value(#[from] ValueError),
}
