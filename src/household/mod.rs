//! household — time allocation and specialization in a two-member household.
//!
//! Purpose
//! -------
//! Model a household whose members (`M`, `F`) split their day between market
//! work and home production, find the utility-maximizing allocation, and
//! calibrate the home-production structure to target regression
//! coefficients.
//!
//! Key behaviors
//! -------------
//! - `params`: immutable, validated [`HouseholdParams`] with `with_*`
//!   builders for trial copies.
//! - `home_production`: tagged CES / Cobb-Douglas / Leontief aggregate.
//! - `utility`: pure utility of an [`Allocation`].
//! - `solver`: grid and continuous strategies behind [`AllocationSolver`].
//! - `scenarios`: ordered relative-wage sweeps.
//! - `calibration`: outer search over `(alpha, sigma)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Each member has [`HOURS_PER_DAY`] hours; solvers never return an
//!   allocation that breaks this budget.
//! - Parameter records are never mutated in place; every trial works on its
//!   own copy.
//!
//! Conventions
//! -----------
//! - Allocations are ordered `(LM, HM, LF, HF)` wherever they are flattened.
//! - Errors are reported as [`HouseholdError`]; optimizer and regression
//!   failures are wrapped with their original variant.
//!
//! Downstream usage
//! ----------------
//! - Build a [`HouseholdParams`], pick a solver, and call
//!   [`AllocationSolver::solve`], [`solve_wage_scenarios`], or [`calibrate`].
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each component; the scenario → regression →
//!   calibration pipeline is exercised end to end in
//!   `tests/integration_household_pipeline.rs`.

pub mod allocation;
pub mod calibration;
pub mod errors;
pub mod home_production;
pub mod params;
pub mod scenarios;
pub mod solver;
pub mod utility;

pub use self::allocation::{Allocation, HOURS_PER_DAY};
pub use self::calibration::{
    CalibrationOptions, CalibrationOutcome, CalibrationTargets, TrialReport, calibrate,
    evaluate_trial,
};
pub use self::errors::{HouseholdError, HouseholdResult};
pub use self::home_production::{ELASTICITY_TOL, HomeAggregate};
pub use self::params::HouseholdParams;
pub use self::scenarios::{ScenarioSolution, WageScenarios, solve_wage_scenarios};
pub use self::solver::{AllocationSolver, ContinuousSolver, DiscreteSolver, HourGrid, Solution};
pub use self::utility::utility;
