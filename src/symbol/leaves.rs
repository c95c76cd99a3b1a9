use std::ops::Range;

use log::warn;

use crate::spatial::CoordinateSystem;
use crate::symbol::errors::TreeError;
use crate::symbol::kind::SymbolKind;
use crate::symbol::node::Symbol;

impl Symbol {
    /// A constant named after its value
    pub fn scalar(value: f64) -> Self {
        Self::with_kind(value.to_string(), SymbolKind::Scalar(value), &[])
    }

    pub fn named_scalar(name: impl Into<String>, value: f64) -> Self {
        Self::with_kind(name, SymbolKind::Scalar(value), &[])
    }

    pub fn variable<S: Into<String>>(name: impl Into<String>, domain: Vec<S>) -> Self {
        let domain = domain.into_iter().map(Into::into).collect();
        Self::with_kind(name, SymbolKind::Variable { domain }, &[])
    }

    pub fn parameter(name: impl Into<String>) -> Self {
        Self::with_kind(name, SymbolKind::Parameter, &[])
    }

    pub fn spatial_variable<S: Into<String>>(
        name: impl Into<String>,
        domain: Vec<S>,
        coord_sys: CoordinateSystem,
    ) -> Self {
        let domain = domain.into_iter().map(Into::into).collect();
        Self::with_kind(
            name,
            SymbolKind::SpatialVariable { domain, coord_sys },
            &[],
        )
    }

    /// The slice `y[range]` of the state vector, named `y[start:stop]`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidStateVectorRange`] if the range is empty.
    pub fn state_vector(range: Range<usize>) -> Result<Self, TreeError> {
        if range.start >= range.end {
            warn!(
                "Rejecting empty state vector range {}..{}",
                range.start, range.end
            );
            return Err(TreeError::InvalidStateVectorRange {
                start: range.start,
                stop: range.end,
            });
        }

        Ok(Self::with_kind(
            format!("y[{}:{}]", range.start, range.end),
            SymbolKind::StateVector {
                start: range.start,
                stop: range.end,
            },
            &[],
        ))
    }

    /// The simulation time `t`
    pub fn time() -> Self {
        Self::with_kind("t", SymbolKind::Time, &[])
    }
}
