//! minimizer::types — shared numeric aliases, defaults, and solver wiring.
//!
//! Purpose
//! -------
//! Centralize the numeric types and solver aliases used by the minimizer so
//! the rest of the optimization code stays agnostic to `ndarray` and argmin
//! generics.
//!
//! Key behaviors
//! -------------
//! - Define canonical aliases for points and scalar costs (`Point`, `Cost`).
//! - Provide the function-evaluation counter map (`FnEvalMap`).
//! - Expose the Nelder–Mead solver alias over `(Point, Cost)` and the crate
//!   defaults used when building it.
//!
//! Invariants & assumptions
//! ------------------------
//! - All optimizer vectors are `ndarray::Array1<f64>`.
//! - `Point` is used both for model-space points (hours, inputs, structural
//!   parameters) and for the unconstrained coordinates the solver actually
//!   moves in; the adapter converts between the two.
//!
//! Testing notes
//! -------------
//! - This module only defines type aliases and constants; correctness is
//!   exercised by the surrounding minimizer tests.
use argmin::solver::neldermead::NelderMead;
use ndarray::Array1;
use std::collections::HashMap;

/// Point in either model space or unconstrained solver space.
pub type Point = Array1<f64>;

/// Scalar objective value; always minimized.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps human-readable counter names (e.g., `"cost_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// Default simplex standard-deviation tolerance.
pub const DEFAULT_SD_TOLERANCE: f64 = 1e-10;

/// Default iteration cap for a single minimization.
pub const DEFAULT_MAX_ITER: usize = 5000;

/// Default edge length of the initial simplex, in unconstrained coordinates.
pub const DEFAULT_INITIAL_STEP: f64 = 0.5;

/// Default weight of the exact L1 penalty on violated linear inequalities.
pub const DEFAULT_PENALTY_WEIGHT: f64 = 1e4;

/// Default number of restarts from the previous best point.
pub const DEFAULT_RESTARTS: usize = 2;

/// Nelder–Mead specialized to this crate's numeric types.
pub type NelderMeadSolver = NelderMead<Point, Cost>;
