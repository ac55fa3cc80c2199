//! minimizer — bounded, derivative-free minimization powered by argmin.
//!
//! Purpose
//! -------
//! Provide the minimization capability every model in this crate is built
//! on: given an objective, a start point, and a feasible region (bounds plus
//! linear inequalities), return the best point found and whether the solver
//! converged. Callers implement [`Objective`] and either call [`minimize`]
//! directly or take any [`Minimizer`] as an injected dependency.
//!
//! Key behaviors
//! -------------
//! - Map bounded coordinates into unconstrained ones via
//!   [`region::Bound`] (logistic for intervals, softplus for half-lines) so
//!   bounds hold structurally on every trial point.
//! - Enforce linear inequalities through an exact L1 penalty inside
//!   [`adapter::ArgMinAdapter`].
//! - Build a Nelder–Mead simplex ([`builders`]), run it ([`run`]), restart
//!   from the best point when that still helps ([`api`]), and normalize the
//!   result into a [`MinimizeOutcome`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Objectives are always minimized; maximization problems pass the negated
//!   value.
//! - [`Objective::value`] must treat invalid inputs as recoverable
//!   [`OptError`](crate::optimization::errors::OptError) values, not panics.
//! - Non-convergence is never an error: the best point is still returned
//!   with `converged = false`.
//!
//! Conventions
//! -----------
//! - Points are [`Point`] (`Array1<f64>`) in model space at the API boundary;
//!   unconstrained coordinates never leak out of this module.
//! - `MinimizeOutcome::value` is the raw objective at `x_hat`, without the
//!   constraint penalty.
//!
//! Downstream usage
//! ----------------
//! - Household solvers minimize negated utility over hours; calibration
//!   minimizes squared coefficient deviations over `(alpha, sigma)`; the
//!   production optimizer minimizes target deviations over `(K, L)`.
//! - Tests substitute their own [`Minimizer`] to exercise model code without
//!   a real solver.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover region validation and transforms,
//!   penalty arithmetic, simplex layout, option validation, termination
//!   mapping, and end-to-end runs on quadratic bowls.

pub mod adapter;
pub mod api;
pub mod builders;
pub mod region;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::{NelderMeadMinimizer, minimize};
pub use self::region::{Bound, FeasibleRegion, LinearInequality};
pub use self::traits::{MinimizeOutcome, Minimizer, MinimizerOptions, Objective, Tolerances};
pub use self::types::{Cost, FnEvalMap, Point};

pub mod prelude {
    pub use super::api::{NelderMeadMinimizer, minimize};
    pub use super::region::{Bound, FeasibleRegion, LinearInequality};
    pub use super::traits::{MinimizeOutcome, Minimizer, MinimizerOptions, Objective, Tolerances};
    pub use super::types::{Cost, Point};
}
