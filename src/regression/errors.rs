//! Errors for ordinary least-squares fits over scenario data.
//!
//! ## Conventions
//! - **Indices are 0-based** and refer to the observation position.
//! - Ratios and regressors fed to [`log_ratio_fit`](super::ols::log_ratio_fit)
//!   must be **strictly positive and finite**; anything else is rejected
//!   before a logarithm is taken.
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// Result alias for regression routines.
pub type RegressionResult<T> = Result<T, RegressionError>;

#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    // ---- Input validation ----
    /// Regressor and response have different lengths.
    LengthMismatch { x_len: usize, y_len: usize },

    /// Fewer observations than coefficients.
    InsufficientData { len: usize, required: usize },

    /// A data point is NaN/±inf.
    NonFiniteData { index: usize, value: f64 },

    // ---- Log-ratio domain ----
    /// Ratio is ≤ 0 or non-finite, so its logarithm is undefined.
    NonPositiveRatio { index: usize, value: f64 },

    /// Regressor is ≤ 0 or non-finite, so its logarithm is undefined.
    NonPositiveRegressor { index: usize, value: f64 },

    // ---- Solve ----
    /// Design matrix `[1, x]` does not have full column rank.
    RankDeficient,
}

impl std::error::Error for RegressionError {}

impl std::fmt::Display for RegressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input validation ----
            RegressionError::LengthMismatch { x_len, y_len } => {
                write!(f, "Regressor length {x_len} does not match response length {y_len}")
            }
            RegressionError::InsufficientData { len, required } => {
                write!(f, "Need at least {required} observations, found {len}")
            }
            RegressionError::NonFiniteData { index, value } => {
                write!(f, "Non-finite data at index {index}: {value}")
            }

            // ---- Log-ratio domain ----
            RegressionError::NonPositiveRatio { index, value } => {
                write!(f, "Cannot take log of non-positive ratio at index {index}: {value}")
            }
            RegressionError::NonPositiveRegressor { index, value } => {
                write!(f, "Cannot take log of non-positive regressor at index {index}: {value}")
            }

            // ---- Solve ----
            RegressionError::RankDeficient => {
                write!(f, "Design matrix is rank deficient (regressor has no variation)")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl std::convert::From<RegressionError> for PyErr {
    fn from(err: RegressionError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
