use log::debug;
use rayon::prelude::*;

use crate::settings::Settings;
use crate::symbol::errors::TreeError;
use crate::symbol::kind::{BinaryOperator, SymbolKind};
use crate::symbol::node::Symbol;
use crate::value::Value;

/// One `(t, y)` input for [`Symbol::evaluate_many`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationPoint {
    pub t: Option<f64>,
    pub y: Option<Vec<f64>>,
}

impl EvaluationPoint {
    pub fn new(t: Option<f64>, y: Option<Vec<f64>>) -> Self {
        Self { t, y }
    }
}

impl Symbol {
    /// Evaluate the tree at time `t` with state vector `y`.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - the symbol (or any descendant) is a bare node, variable, parameter
    ///   or spatial variable, which have no numeric value on their own
    /// - a time or state-vector leaf is reached without `t` or `y`
    /// - a state-vector slice does not fit inside `y`
    /// - two array operands have different lengths
    pub fn evaluate(&self, t: Option<f64>, y: Option<&[f64]>) -> Result<Value, TreeError> {
        self.evaluate_with(&Settings::default(), t, y)
    }

    /// Same as [`Symbol::evaluate`], with explicit settings.
    ///
    /// # Errors
    ///
    /// See [`Symbol::evaluate`].
    pub fn evaluate_with(
        &self,
        settings: &Settings,
        t: Option<f64>,
        y: Option<&[f64]>,
    ) -> Result<Value, TreeError> {
        let result = match self.kind() {
            SymbolKind::Scalar(value) => Ok(Value::Scalar(*value)),
            SymbolKind::Time => t.map(Value::Scalar).ok_or_else(|| TreeError::MissingTime {
                name: self.name().to_string(),
            }),
            SymbolKind::StateVector { start, stop } => self.evaluate_slice(*start, *stop, y),
            SymbolKind::Binary(operator) => self.evaluate_binary(settings, *operator, t, y),
            SymbolKind::Base
            | SymbolKind::Variable { .. }
            | SymbolKind::Parameter
            | SymbolKind::SpatialVariable { .. } => Err(TreeError::EvaluationNotImplemented {
                name: self.name().to_string(),
                kind: self.kind().tag(),
            }),
        };

        if settings.debug_mode {
            match &result {
                Ok(value) => debug!("'{}' evaluated to: {}", self, value),
                Err(e) => debug!("'{}' evaluation failed: {}", self, e),
            }
        }

        result
    }

    fn evaluate_slice(
        &self,
        start: usize,
        stop: usize,
        y: Option<&[f64]>,
    ) -> Result<Value, TreeError> {
        let y = y.ok_or_else(|| TreeError::MissingStateVector {
            name: self.name().to_string(),
        })?;

        match y.get(start..stop) {
            Some(slice) => Ok(Value::Array(slice.to_vec())),
            None => Err(TreeError::StateVectorOutOfBounds {
                name: self.name().to_string(),
                start,
                stop,
                len: y.len(),
            }),
        }
    }

    fn evaluate_binary(
        &self,
        settings: &Settings,
        operator: BinaryOperator,
        t: Option<f64>,
        y: Option<&[f64]>,
    ) -> Result<Value, TreeError> {
        let [left, right] = self.children() else {
            return Err(TreeError::InvalidArity {
                name: self.name().to_string(),
                expected: 2,
                found: self.children().len(),
            });
        };

        let left = left.evaluate_with(settings, t, y)?;
        let right = right.evaluate_with(settings, t, y)?;
        Ok(left.zip_with(right, |l, r| operator.apply(l, r))?)
    }

    /// Evaluate the same tree at many points in parallel.
    ///
    /// Results keep the order of `points`.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails at any of the points.
    pub fn evaluate_many(&self, points: &[EvaluationPoint]) -> Result<Vec<Value>, TreeError> {
        debug!("Evaluating '{}' at {} points", self, points.len());

        points
            .par_iter()
            .map(|point| self.evaluate(point.t, point.y.as_deref()))
            .collect()
    }
}
