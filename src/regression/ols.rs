//! regression::ols — two-coefficient ordinary least squares via SVD.
//!
//! Purpose
//! -------
//! Fit `y = β0 + β1·x` by ordinary least squares and expose the log-linear
//! variant used by calibration, `log(ratio) = β0 + β1·log(regressor)`.
//!
//! Key behaviors
//! -------------
//! - Validate lengths, observation count, and finiteness before building the
//!   design matrix `[1, x]`.
//! - Solve the least-squares problem with a singular value decomposition
//!   (`nalgebra`), rejecting rank-deficient designs instead of returning an
//!   arbitrary minimum-norm solution.
//! - Guard the log transform: non-positive ratios or regressors produce a
//!   distinguishable [`RegressionError`] rather than NaN.
//!
//! Invariants & assumptions
//! ------------------------
//! - At least two observations with at least two distinct `x` values.
//! - Returned coefficients are finite.
//!
//! Testing notes
//! -------------
//! - Exact recovery of coefficients on noise-free lines, least-squares
//!   behavior on noisy data, and each validation failure.
use crate::regression::errors::{RegressionError, RegressionResult};
use nalgebra::{DMatrix, DVector};

/// Relative singular-value cutoff used for the rank test and the solve.
const SINGULAR_EPS: f64 = 1e-10;

/// Intercept and slope of a fitted line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionFit {
    pub intercept: f64,
    pub slope: f64,
}

impl RegressionFit {
    /// Fitted value at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// fit — OLS of `y` on `[1, x]`.
///
/// Parameters
/// ----------
/// - `x`: `&[f64]`
///   Regressor values; at least two, finite, not all equal.
/// - `y`: `&[f64]`
///   Response values; same length as `x`, finite.
///
/// Returns
/// -------
/// `RegressionResult<RegressionFit>`
///   Least-squares intercept and slope.
///
/// Errors
/// ------
/// - `RegressionError::LengthMismatch` if `x.len() != y.len()`.
/// - `RegressionError::InsufficientData` for fewer than two observations.
/// - `RegressionError::NonFiniteData` for NaN/±inf entries (index refers to
///   the offending position in `x`, then `y`).
/// - `RegressionError::RankDeficient` when `x` has no variation.
///
/// Notes
/// -----
/// - The SVD solve is numerically preferable to the normal equations when
///   `x` values are close together, which is the usual case for relative
///   wages near one.
pub fn fit(x: &[f64], y: &[f64]) -> RegressionResult<RegressionFit> {
    if x.len() != y.len() {
        return Err(RegressionError::LengthMismatch { x_len: x.len(), y_len: y.len() });
    }
    if x.len() < 2 {
        return Err(RegressionError::InsufficientData { len: x.len(), required: 2 });
    }
    for (index, &value) in x.iter().chain(y.iter()).enumerate() {
        if !value.is_finite() {
            return Err(RegressionError::NonFiniteData { index: index % x.len(), value });
        }
    }

    let n = x.len();
    let design = DMatrix::<f64>::from_fn(n, 2, |i, j| if j == 0 { 1.0 } else { x[i] });
    let response = DVector::<f64>::from_column_slice(y);

    let svd = design.svd(true, true);
    let largest = svd.singular_values.max();
    let cutoff = SINGULAR_EPS * largest.max(1.0);
    if svd.rank(cutoff) < 2 {
        return Err(RegressionError::RankDeficient);
    }
    let beta = svd.solve(&response, cutoff).map_err(|_| RegressionError::RankDeficient)?;

    let (intercept, slope) = (beta[0], beta[1]);
    if !intercept.is_finite() || !slope.is_finite() {
        return Err(RegressionError::RankDeficient);
    }
    Ok(RegressionFit { intercept, slope })
}

/// Fit `log(ratio)` on `log(regressor)`.
///
/// Both inputs must be strictly positive and finite; the first offending
/// entry is reported with its index. Lengths are checked by [`fit`].
pub fn log_ratio_fit(regressors: &[f64], ratios: &[f64]) -> RegressionResult<RegressionFit> {
    if regressors.len() != ratios.len() {
        return Err(RegressionError::LengthMismatch {
            x_len: regressors.len(),
            y_len: ratios.len(),
        });
    }
    let log_x = log_positive(regressors, |index, value| RegressionError::NonPositiveRegressor {
        index,
        value,
    })?;
    let log_y =
        log_positive(ratios, |index, value| RegressionError::NonPositiveRatio { index, value })?;
    fit(&log_x, &log_y)
}

// ---- Helper Methods ----

fn log_positive<E>(values: &[f64], err: E) -> RegressionResult<Vec<f64>>
where
    E: Fn(usize, f64) -> RegressionError,
{
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if value.is_finite() && value > 0.0 { Ok(value.ln()) } else { Err(err(index, value)) }
        })
        .collect()
}
