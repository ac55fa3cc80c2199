//! production — Cobb-Douglas technology, marginal products, and input choice.
//!
//! Purpose
//! -------
//! Evaluate `Y = A · K^α · L^(1−α)` (optionally scaled by a technology shift),
//! its marginal products and input cost, and choose inputs that hit an output
//! or cost target or maximize output under bounds and a budget.
//!
//! Key behaviors
//! -------------
//! - `params`: validated [`ProductionParams`] plus optional
//!   [`TechnologyShift`] and [`FactorPrices`].
//! - `cobb_douglas`: pure evaluation ([`output`], [`marginal_product_capital`],
//!   [`marginal_product_labor`], [`cost`], [`analyze`]).
//! - `optimizer`: [`optimize_inputs`] and [`maximize_output`] on top of any
//!   [`Minimizer`](crate::optimization::minimizer::Minimizer).
//!
//! Invariants & assumptions
//! ------------------------
//! - Parameter records are immutable; optimization returns an
//!   [`InputSolution`] and never edits the record it was given.
//!
//! Testing notes
//! -------------
//! - Closed-form identities and finite-difference checks live in
//!   `cobb_douglas`; optimizer behavior is covered in `optimizer` and in
//!   `tests/integration_production.rs`.

pub mod cobb_douglas;
pub mod errors;
pub mod optimizer;
pub mod params;

pub use self::cobb_douglas::{
    ProductionAnalysis, analyze, cost, marginal_product_capital, marginal_product_labor, output,
};
pub use self::errors::{ProductionError, ProductionResult};
pub use self::optimizer::{
    FIXED_POINT_TOL, InputConstraints, InputSolution, InputTarget, maximize_output,
    optimize_inputs,
};
pub use self::params::{FactorPrices, ProductionParams, TechnologyShift};
