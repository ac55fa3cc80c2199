//! numerical_stability — guarded scalar transforms for bounded minimization.
//!
//! Purpose
//! -------
//! Collect the numerically stable transforms used to map unconstrained
//! optimizer coordinates into bounded model coordinates (interval and
//! half-line bounds). Centralizing them keeps the bound handling of every
//! minimization in the crate on the same well-conditioned arithmetic.
//!
//! Key behaviors
//! -------------
//! - `safe_softplus` / `safe_softplus_inv` for half-line bounds `(lo, ∞)`.
//! - `safe_logistic` / `safe_logit` for interval bounds `[lo, hi]`.
//! - `LOGIT_EPS` as the shared clamp margin when converting a start point
//!   that sits exactly on a bound.
//!
//! Conventions
//! -----------
//! - Pure functions on `f64`; no logging, I/O, or global state.
//! - Domain validation (finite bounds, lo < hi) happens in the minimizer
//!   layer, not here.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`transformations`] check agreement with naïve formulas,
//!   inverse round-trips, and tail behavior.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{
    LOGIT_EPS, safe_logistic, safe_logit, safe_softplus, safe_softplus_inv,
};

pub mod prelude {
    pub use super::transformations::{
        LOGIT_EPS, safe_logistic, safe_logit, safe_softplus, safe_softplus_inv,
    };
}
