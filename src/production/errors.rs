//! Errors for the Cobb-Douglas production model (parameter, constraint and
//! target validation, plus wrapped optimizer failures).
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

use crate::optimization::errors::OptError;

/// Result alias for production model operations.
pub type ProductionResult<T> = Result<T, ProductionError>;

#[derive(Debug, Clone, PartialEq)]
pub enum ProductionError {
    // ---- Parameters ----
    /// Technology, input, share, or price parameter out of range.
    InvalidParam { name: &'static str, value: f64, reason: &'static str },

    // ---- Input optimization ----
    /// Output or cost target must be finite and strictly positive.
    InvalidTarget { value: f64 },

    /// A cost target was requested without factor prices.
    MissingFactorPrices,

    /// Input bounds are malformed.
    InvalidInputBounds { input: &'static str, lower: f64, upper: f64 },

    /// Budget must be finite and admit at least the lower bounds.
    InvalidBudget { budget: f64, reason: &'static str },

    // ---- Wrapped ----
    /// Minimizer configuration or backend failure.
    Optimization(OptError),
}

impl std::error::Error for ProductionError {}

impl std::fmt::Display for ProductionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Parameters ----
            ProductionError::InvalidParam { name, value, reason } => {
                write!(f, "Invalid parameter {name} = {value}: {reason}")
            }

            // ---- Input optimization ----
            ProductionError::InvalidTarget { value } => {
                write!(f, "Invalid target {value}: must be finite and > 0")
            }
            ProductionError::MissingFactorPrices => {
                write!(f, "Cost target requires factor prices (wage, rental)")
            }
            ProductionError::InvalidInputBounds { input, lower, upper } => {
                write!(
                    f,
                    "Invalid bounds for {input}: [{lower}, {upper}] (need 0 <= lower < upper, finite)"
                )
            }
            ProductionError::InvalidBudget { budget, reason } => {
                write!(f, "Invalid budget {budget}: {reason}")
            }

            // ---- Wrapped ----
            ProductionError::Optimization(err) => write!(f, "Optimization failed: {err}"),
        }
    }
}

impl From<OptError> for ProductionError {
    fn from(err: OptError) -> Self {
        ProductionError::Optimization(err)
    }
}

#[cfg(feature = "python-bindings")]
impl std::convert::From<ProductionError> for PyErr {
    fn from(err: ProductionError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
