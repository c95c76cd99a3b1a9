use std::fmt;

use crate::spatial::CoordinateSystem;

/// Arithmetic operators that combine two child symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl BinaryOperator {
    /// The canonical symbol, also used as the operator node's name
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Addition => "+",
            BinaryOperator::Subtraction => "-",
            BinaryOperator::Multiplication => "*",
            BinaryOperator::Division => "/",
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            BinaryOperator::Addition => "Addition",
            BinaryOperator::Subtraction => "Subtraction",
            BinaryOperator::Multiplication => "Multiplication",
            BinaryOperator::Division => "Division",
        }
    }

    #[inline]
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperator::Addition => left + right,
            BinaryOperator::Subtraction => left - right,
            BinaryOperator::Multiplication => left * right,
            BinaryOperator::Division => left / right,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The concrete variant of a symbol.
///
/// Everything that differs between variants lives here; the tree structure
/// (name, children, parent) is the same for all of them.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolKind {
    /// A bare node with no evaluation semantics
    Base,
    Scalar(f64),
    /// A free variable; it must be discretized before it can be evaluated
    Variable { domain: Vec<String> },
    Parameter,
    SpatialVariable {
        domain: Vec<String>,
        coord_sys: CoordinateSystem,
    },
    /// The slice `y[start..stop]` of the state vector
    StateVector { start: usize, stop: usize },
    Time,
    Binary(BinaryOperator),
}

impl SymbolKind {
    /// Type tag that feeds into the structural id
    pub fn tag(&self) -> &'static str {
        match self {
            SymbolKind::Base => "Symbol",
            SymbolKind::Scalar(_) => "Scalar",
            SymbolKind::Variable { .. } => "Variable",
            SymbolKind::Parameter => "Parameter",
            SymbolKind::SpatialVariable { .. } => "SpatialVariable",
            SymbolKind::StateVector { .. } => "StateVector",
            SymbolKind::Time => "Time",
            SymbolKind::Binary(op) => op.tag(),
        }
    }
}
