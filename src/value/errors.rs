use thiserror::Error;

/// Errors raised while combining evaluated values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("Cannot combine arrays of length {left} and {right}")]
    ShapeMismatch { left: usize, right: usize },
}
