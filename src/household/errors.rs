//! Errors for the household specialization model (parameter and allocation
//! validation, scenario and grid checks, and wrapped optimizer/regression
//! failures).
//!
//! ## Conventions
//! - **Indices are 0-based** (scenario position, allocation coordinate).
//! - Hours are measured per day; each member's market plus home hours must
//!   not exceed [`HOURS_PER_DAY`](super::allocation::HOURS_PER_DAY).
//! - Optimizer and regression failures are wrapped, not flattened, so callers
//!   can tell a domain error in a calibration trial apart from a solver
//!   configuration problem.
use crate::{optimization::errors::OptError, regression::errors::RegressionError};
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// Result alias for household model operations.
pub type HouseholdResult<T> = Result<T, HouseholdError>;

#[derive(Debug, Clone, PartialEq)]
pub enum HouseholdError {
    // ---- Parameters ----
    /// A preference, technology, or wage parameter is out of range.
    InvalidParam { name: &'static str, value: f64, reason: &'static str },

    // ---- Allocation ----
    /// Hours must be finite and non-negative.
    InvalidHours { index: usize, value: f64 },

    /// A member's market plus home hours exceed the daily budget.
    TimeBudgetExceeded { member: &'static str, total: f64 },

    // ---- Scenarios / grid ----
    /// Wage scenario list is empty.
    EmptyScenarios,

    /// Relative wages must be finite and strictly positive.
    InvalidWageScenario { index: usize, value: f64 },

    /// Hour grid needs at least two points over a positive, finite range.
    InvalidGrid { points: usize, max_hours: f64, reason: &'static str },

    // ---- Calibration ----
    /// Target coefficients must be finite.
    InvalidTargets { intercept: f64, slope: f64 },

    /// Calibration start guess is outside `(0, 1) × (0, ∞)`.
    InvalidInitialGuess { alpha: f64, sigma: f64 },

    // ---- Wrapped ----
    /// Minimizer configuration or backend failure.
    Optimization(OptError),

    /// Regression failed, e.g. a non-positive home-production ratio.
    Regression(RegressionError),
}

impl std::error::Error for HouseholdError {}

impl std::fmt::Display for HouseholdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Parameters ----
            HouseholdError::InvalidParam { name, value, reason } => {
                write!(f, "Invalid parameter {name} = {value}: {reason}")
            }

            // ---- Allocation ----
            HouseholdError::InvalidHours { index, value } => {
                write!(f, "Invalid hours at index {index}: {value} (must be finite and >= 0)")
            }
            HouseholdError::TimeBudgetExceeded { member, total } => {
                write!(f, "Time budget exceeded for member {member}: {total} hours")
            }

            // ---- Scenarios / grid ----
            HouseholdError::EmptyScenarios => {
                write!(f, "Wage scenario list must not be empty")
            }
            HouseholdError::InvalidWageScenario { index, value } => {
                write!(f, "Invalid relative wage at index {index}: {value} (must be finite and > 0)")
            }
            HouseholdError::InvalidGrid { points, max_hours, reason } => {
                write!(f, "Invalid hour grid ({points} points on [0, {max_hours}]): {reason}")
            }

            // ---- Calibration ----
            HouseholdError::InvalidTargets { intercept, slope } => {
                write!(f, "Invalid calibration targets ({intercept}, {slope}): must be finite")
            }
            HouseholdError::InvalidInitialGuess { alpha, sigma } => {
                write!(
                    f,
                    "Invalid calibration start (alpha = {alpha}, sigma = {sigma}): need 0 < alpha < 1 and sigma > 0"
                )
            }

            // ---- Wrapped ----
            HouseholdError::Optimization(err) => write!(f, "Optimization failed: {err}"),
            HouseholdError::Regression(err) => write!(f, "Regression failed: {err}"),
        }
    }
}

impl From<OptError> for HouseholdError {
    fn from(err: OptError) -> Self {
        HouseholdError::Optimization(err)
    }
}

impl From<RegressionError> for HouseholdError {
    fn from(err: RegressionError) -> Self {
        HouseholdError::Regression(err)
    }
}

#[cfg(feature = "python-bindings")]
impl std::convert::From<HouseholdError> for PyErr {
    fn from(err: HouseholdError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
