use std::fmt;

use log::trace;

use crate::value::errors::ValueError;

/// The result of evaluating a symbol: a single number or a flat array
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(f64),
    Array(Vec<f64>),
}

impl Value {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(v) => Some(*v),
            Value::Array(_) => None,
        }
    }

    pub fn as_slice(&self) -> Option<&[f64]> {
        match self {
            Value::Scalar(_) => None,
            Value::Array(values) => Some(values),
        }
    }

    /// Number of entries; a scalar counts as one
    pub fn len(&self) -> usize {
        match self {
            Value::Scalar(_) => 1,
            Value::Array(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Array(values) if values.is_empty())
    }

    /// Combine two values elementwise, broadcasting a scalar against an array.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::ShapeMismatch`] when both sides are arrays of
    /// different lengths.
    pub fn zip_with<F>(self, rhs: Value, op: F) -> Result<Value, ValueError>
    where
        F: Fn(f64, f64) -> f64,
    {
        match (self, rhs) {
            (Value::Scalar(l), Value::Scalar(r)) => Ok(Value::Scalar(op(l, r))),
            (Value::Scalar(l), Value::Array(r)) => {
                Ok(Value::Array(r.into_iter().map(|r| op(l, r)).collect()))
            }
            (Value::Array(l), Value::Scalar(r)) => {
                Ok(Value::Array(l.into_iter().map(|l| op(l, r)).collect()))
            }
            (Value::Array(l), Value::Array(r)) => {
                if l.len() != r.len() {
                    trace!("Shape mismatch: {} vs {}", l.len(), r.len());
                    return Err(ValueError::ShapeMismatch {
                        left: l.len(),
                        right: r.len(),
                    });
                }
                Ok(Value::Array(
                    l.into_iter().zip(r).map(|(l, r)| op(l, r)).collect(),
                ))
            }
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(value)
    }
}

impl From<Vec<f64>> for Value {
    fn from(values: Vec<f64>) -> Self {
        Value::Array(values)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Scalar(v) => write!(f, "{}", v),
            Value::Array(values) => {
                write!(f, "[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
        }
    }
}
