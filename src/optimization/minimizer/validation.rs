//! Validation helpers for bounded minimization.
//!
//! This module centralizes common consistency checks used across the
//! minimizer interface:
//!
//! - **Option checks**: [`verify_sd_tolerance`], [`verify_initial_step`],
//!   [`verify_penalty_weight`] ensure numeric settings are finite and
//!   strictly positive when provided.
//! - **Start points**: [`validate_start_point`] rejects empty or non-finite
//!   starting vectors.
//! - **Outcomes**: [`validate_best_point`] and [`validate_value`] check the
//!   solver's best point and objective value for finiteness.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`OptError`] variants.
use crate::optimization::{
    errors::{OptError, OptResult},
    minimizer::types::Point,
};

/// Validate the optional simplex standard-deviation tolerance.
///
/// # Errors
/// Returns [`OptError::InvalidSdTolerance`] if the value is non-finite or ≤ 0.0.
pub fn verify_sd_tolerance(tol: Option<f64>) -> OptResult<()> {
    if let Some(tol) = tol {
        if !tol.is_finite() {
            return Err(OptError::InvalidSdTolerance { tol, reason: "Tolerance must be finite." });
        }
        if tol <= 0.0 {
            return Err(OptError::InvalidSdTolerance {
                tol,
                reason: "Tolerance must be positive.",
            });
        }
    }
    Ok(())
}

/// Validate the initial simplex step.
///
/// # Errors
/// Returns [`OptError::InvalidInitialStep`] if the value is non-finite or ≤ 0.0.
pub fn verify_initial_step(step: f64) -> OptResult<()> {
    if !step.is_finite() {
        return Err(OptError::InvalidInitialStep { step, reason: "Step must be finite." });
    }
    if step <= 0.0 {
        return Err(OptError::InvalidInitialStep { step, reason: "Step must be positive." });
    }
    Ok(())
}

/// Validate the constraint penalty weight.
///
/// # Errors
/// Returns [`OptError::InvalidPenaltyWeight`] if the value is non-finite or ≤ 0.0.
pub fn verify_penalty_weight(weight: f64) -> OptResult<()> {
    if !weight.is_finite() {
        return Err(OptError::InvalidPenaltyWeight { weight, reason: "Weight must be finite." });
    }
    if weight <= 0.0 {
        return Err(OptError::InvalidPenaltyWeight {
            weight,
            reason: "Weight must be positive.",
        });
    }
    Ok(())
}

/// Validate a starting point: non-empty with finite entries.
///
/// # Errors
/// - [`OptError::EmptyStartPoint`] if `x0` has no coordinates.
/// - [`OptError::InvalidStartPoint`] for the first non-finite entry.
pub fn validate_start_point(x0: &Point) -> OptResult<()> {
    if x0.is_empty() {
        return Err(OptError::EmptyStartPoint);
    }
    for (index, &value) in x0.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidStartPoint {
                index,
                value,
                reason: "Start point entries must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate and unwrap the solver's best point.
///
/// # Errors
/// - [`OptError::MissingBestPoint`] if no vector was provided.
/// - [`OptError::InvalidBestPoint`] if any element is non-finite.
pub fn validate_best_point(best: Option<Point>) -> OptResult<Point> {
    match best {
        Some(x) => {
            for (index, &value) in x.iter().enumerate() {
                if !value.is_finite() {
                    return Err(OptError::InvalidBestPoint {
                        index,
                        value,
                        reason: "Best point entries must be finite.",
                    });
                }
            }
            Ok(x)
        }
        None => Err(OptError::MissingBestPoint),
    }
}

/// Validate that a scalar objective value is finite.
///
/// # Errors
/// Returns [`OptError::NonFiniteCost`] if the value is `NaN` or infinite.
pub fn validate_value(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteCost { value });
    }
    Ok(())
}
