//! optimization — minimizer stack, numerical helpers, and unified error surface.
//!
//! Purpose
//! -------
//! Provide a cohesive optimization layer for the household and production
//! models: an argmin-backed, bounded Nelder–Mead minimizer, numerically
//! stable bound transforms, and a single error/result surface. Model code
//! implements an objective, describes its feasible region, and obtains a best
//! point with diagnostics without touching solver details.
//!
//! Key behaviors
//! -------------
//! - Expose the [`minimizer::Minimizer`] capability and its Nelder–Mead
//!   implementation (`minimizer`).
//! - Supply the guarded transforms (`numerical_stability`) that map
//!   unconstrained solver coordinates into bounded model coordinates.
//! - Normalize configuration issues, numerical failures, and backend solver
//!   errors into a single enum (`errors::OptError`) with a common result
//!   alias (`OptResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Bounds are enforced structurally through reparameterization; linear
//!   inequalities through an exact penalty.
//! - Objective domain violations are reported as `OptError`, never as NaN
//!   costs or panics.
//!
//! Conventions
//! -----------
//! - Everything is a minimization; maximizing callers negate.
//! - Public entrypoints that can fail return `OptResult<T>`; callers never
//!   see raw argmin errors.
//! - Solver runs emit `tracing` debug events; the optional `obs_slog`
//!   feature additionally attaches argmin's slog observer in verbose mode.
//!
//! Downstream usage
//! ----------------
//! - Front-ends typically import `optimization::prelude::*`.
//!
//! Testing notes
//! -------------
//! - `minimizer`: region validation, penalties, solver wiring, and small
//!   end-to-end runs.
//! - `numerical_stability`: agreement with naïve formulas and inverses.
//! - `errors`: conversions from argmin errors into `OptError`.

pub mod errors;
pub mod minimizer;
pub mod numerical_stability;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_household::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::minimizer::prelude::*;
    pub use super::numerical_stability::prelude::*;
}
