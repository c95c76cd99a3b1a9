use std::ops::{Add, Div, Mul, Sub};

use log::{debug, warn};

use crate::symbol::errors::TreeError;
use crate::symbol::kind::{BinaryOperator, SymbolKind};
use crate::symbol::node::Symbol;

/// Right-hand side accepted by the fallible tree builders.
///
/// Only [`Operand::Symbol`] can be attached; plain numbers are rejected
/// rather than promoted to scalars.
#[derive(Debug, Clone)]
pub enum Operand {
    Symbol(Symbol),
    Number(f64),
}

impl From<Symbol> for Operand {
    fn from(symbol: Symbol) -> Self {
        Operand::Symbol(symbol)
    }
}

impl From<&Symbol> for Operand {
    fn from(symbol: &Symbol) -> Self {
        Operand::Symbol(symbol.clone())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Number(value)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Number(f64::from(value))
    }
}

impl Symbol {
    /// # Errors
    ///
    /// Returns [`TreeError::UnsupportedOperand`] if `other` is not a symbol.
    pub fn try_add(&self, other: impl Into<Operand>) -> Result<Symbol, TreeError> {
        self.try_binary(BinaryOperator::Addition, other.into())
    }

    /// # Errors
    ///
    /// Returns [`TreeError::UnsupportedOperand`] if `other` is not a symbol.
    pub fn try_sub(&self, other: impl Into<Operand>) -> Result<Symbol, TreeError> {
        self.try_binary(BinaryOperator::Subtraction, other.into())
    }

    /// # Errors
    ///
    /// Returns [`TreeError::UnsupportedOperand`] if `other` is not a symbol.
    pub fn try_mul(&self, other: impl Into<Operand>) -> Result<Symbol, TreeError> {
        self.try_binary(BinaryOperator::Multiplication, other.into())
    }

    /// # Errors
    ///
    /// Returns [`TreeError::UnsupportedOperand`] if `other` is not a symbol.
    pub fn try_div(&self, other: impl Into<Operand>) -> Result<Symbol, TreeError> {
        self.try_binary(BinaryOperator::Division, other.into())
    }

    fn try_binary(&self, operator: BinaryOperator, other: Operand) -> Result<Symbol, TreeError> {
        match other {
            Operand::Symbol(other) => Ok(self.binary(operator, &other)),
            Operand::Number(n) => {
                warn!(
                    "Rejecting '{} {} {}': right operand is not a symbol",
                    self, operator, n
                );
                Err(TreeError::UnsupportedOperand {
                    operator,
                    operand: n.to_string(),
                })
            }
        }
    }

    /// New operator node with copies of `self` and `other` as its children
    pub fn binary(&self, operator: BinaryOperator, other: &Symbol) -> Symbol {
        debug!("Building {} of '{}' and '{}'", operator.tag(), self, other);
        Symbol::with_kind(
            operator.symbol(),
            SymbolKind::Binary(operator),
            &[self.clone(), other.clone()],
        )
    }
}

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $operator:expr) => {
        impl $trait<&Symbol> for &Symbol {
            type Output = Symbol;

            fn $method(self, rhs: &Symbol) -> Symbol {
                self.binary($operator, rhs)
            }
        }

        impl $trait<Symbol> for &Symbol {
            type Output = Symbol;

            fn $method(self, rhs: Symbol) -> Symbol {
                self.binary($operator, &rhs)
            }
        }

        impl $trait<&Symbol> for Symbol {
            type Output = Symbol;

            fn $method(self, rhs: &Symbol) -> Symbol {
                self.binary($operator, rhs)
            }
        }

        impl $trait<Symbol> for Symbol {
            type Output = Symbol;

            fn $method(self, rhs: Symbol) -> Symbol {
                self.binary($operator, &rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add, BinaryOperator::Addition);
impl_binary_operator!(Sub, sub, BinaryOperator::Subtraction);
impl_binary_operator!(Mul, mul, BinaryOperator::Multiplication);
impl_binary_operator!(Div, div, BinaryOperator::Division);
