//! regression — least-squares fits used to summarize scenario outcomes.
//!
//! Purpose
//! -------
//! Reduce a sequence of `(regressor, response)` pairs to an intercept and a
//! slope. The household calibration loop uses the log-linear form to relate
//! relative home production to relative wages.
//!
//! Key behaviors
//! -------------
//! - [`ols::fit`]: OLS on `[1, x]` via SVD.
//! - [`ols::log_ratio_fit`]: same, after guarded log transforms.
//!
//! Conventions
//! -----------
//! - Errors are reported as [`errors::RegressionError`]; domain violations
//!   (logs of non-positive values) are never turned into NaN.

pub mod errors;
pub mod ols;

pub use self::errors::{RegressionError, RegressionResult};
pub use self::ols::{RegressionFit, fit, log_ratio_fit};
