//! optimization::errors — unified error surface for the minimizer layer.
//!
//! Every failure raised while configuring or running a minimization is
//! normalized into [`OptError`]; raw argmin errors never cross module
//! boundaries. Model layers wrap `OptError` in their own error enums.
use argmin::core::{ArgminError, Error};

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- MinimizerOptions ----
    /// Simplex standard-deviation tolerance needs to be positive and finite.
    InvalidSdTolerance {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// At least one tolerance must be provided.
    NoTolerancesProvided,

    /// Initial simplex step must be positive and finite.
    InvalidInitialStep {
        step: f64,
        reason: &'static str,
    },

    /// Constraint penalty weight must be positive and finite.
    InvalidPenaltyWeight {
        weight: f64,
        reason: &'static str,
    },

    // ---- Feasible region ----
    /// A bound is malformed (non-finite, or lower >= upper).
    InvalidBound {
        index: usize,
        lower: f64,
        upper: f64,
        reason: &'static str,
    },

    /// Number of bounds does not match the dimension of the start point.
    BoundsDimMismatch {
        expected: usize,
        found: usize,
    },

    /// A linear inequality has the wrong number of coefficients.
    ConstraintDimMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// A linear inequality has non-finite coefficients or right-hand side.
    InvalidConstraint {
        index: usize,
        reason: &'static str,
    },

    // ---- Start point ----
    /// Start point is empty.
    EmptyStartPoint,

    /// Start point entries must be finite.
    InvalidStartPoint {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- Cost function ----
    /// Objective returned a non-finite value.
    NonFiniteCost {
        value: f64,
    },

    /// Objective rejected a trial point; carries the model's message.
    ObjectiveFailed {
        text: String,
    },

    // ---- Optimizer outcome ----
    /// Best point must be finite.
    InvalidBestPoint {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Best point is missing
    MissingBestPoint,

    // ---- Argmin ---
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- MinimizerOptions ----
            OptError::InvalidSdTolerance { tol, reason } => {
                write!(f, "Invalid simplex tolerance {tol}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            OptError::NoTolerancesProvided => {
                write!(f, "No tolerances provided")
            }
            OptError::InvalidInitialStep { step, reason } => {
                write!(f, "Invalid initial simplex step {step}: {reason}")
            }
            OptError::InvalidPenaltyWeight { weight, reason } => {
                write!(f, "Invalid penalty weight {weight}: {reason}")
            }

            // ---- Feasible region ----
            OptError::InvalidBound { index, lower, upper, reason } => {
                write!(f, "Invalid bound at index {index}: [{lower}, {upper}]: {reason}")
            }
            OptError::BoundsDimMismatch { expected, found } => {
                write!(f, "Bounds dimension mismatch: expected {expected}, found {found}")
            }
            OptError::ConstraintDimMismatch { index, expected, found } => {
                write!(
                    f,
                    "Constraint {index} dimension mismatch: expected {expected} coefficients, found {found}"
                )
            }
            OptError::InvalidConstraint { index, reason } => {
                write!(f, "Invalid constraint {index}: {reason}")
            }

            // ---- Start point ----
            OptError::EmptyStartPoint => {
                write!(f, "Start point must contain at least one coordinate")
            }
            OptError::InvalidStartPoint { index, value, reason } => {
                write!(f, "Invalid start point at index {index}: {value}: {reason}")
            }

            // ---- Cost function ----
            OptError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }
            OptError::ObjectiveFailed { text } => {
                write!(f, "Objective evaluation failed: {text}")
            }

            // ---- Optimizer outcome ----
            OptError::InvalidBestPoint { index, value, reason } => {
                write!(f, "Invalid best point at index {index}: {value}: {reason}")
            }
            OptError::MissingBestPoint => {
                write!(f, "Missing best point")
            }

            // ---- Argmin ----
            OptError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            OptError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            OptError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            OptError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            OptError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint not found: {text}")
            }
            OptError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            OptError::ImpossibleError { text } => {
                write!(f, "Impossible error: {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Fallback ----
            OptError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        // Objective errors travel through argmin boxed; recover them first.
        let original_err = match original_err.downcast::<OptError>() {
            Ok(opt_err) => return opt_err,
            Err(err) => err,
        };
        match original_err.downcast() {
            Ok(opt_err) => match opt_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => OptError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => OptError::ImpossibleError { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}
