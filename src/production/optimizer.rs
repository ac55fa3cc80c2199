//! production::optimizer — choose capital and labor under bounds and a budget.
//!
//! Purpose
//! -------
//! Find inputs `(K, L)` that either hit a target (output or cost) as closely
//! as possible or maximize output, subject to interval bounds on each input
//! and an optional resource budget `K + L ≤ B`.
//!
//! Key behaviors
//! -------------
//! - [`optimize_inputs`] minimizes `|target(K, L) − value|` with an injected
//!   [`Minimizer`]. If the record's current inputs already hit the target
//!   (relative deviation ≤ [`FIXED_POINT_TOL`]) and are feasible, they are
//!   returned unchanged and the minimizer is not called.
//! - [`maximize_output`] minimizes `−Y(K, L)` over the same region.
//! - Both start from the record's `(K, L)`; a coordinate outside its bounds
//!   is replaced by the midpoint of its interval.
//!
//! Invariants & assumptions
//! ------------------------
//! - Returned inputs always lie within their bounds; the budget holds up to
//!   the minimizer's tolerance.
//! - The technology itself (`A`, `alpha`, shift) is never optimized.
//!
//! Conventions
//! -----------
//! - Points handed to the minimizer are ordered `(K, L)`.
//!
//! Testing notes
//! -------------
//! - Fixed-point short-circuit, output and cost targets, the constrained
//!   output maximum `K = αB`, and validation of constraints.
use crate::{
    optimization::{
        errors::OptResult,
        minimizer::{Bound, Cost, FeasibleRegion, LinearInequality, Minimizer, Objective, Point},
    },
    production::{
        cobb_douglas::{cost, output},
        errors::{ProductionError, ProductionResult},
        params::ProductionParams,
    },
};
use ndarray::array;
use tracing::{debug, warn};

/// Relative deviation at which the starting inputs count as already optimal.
pub const FIXED_POINT_TOL: f64 = 1e-12;

/// What the inputs should hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputTarget {
    /// Output level `Y*`.
    Output(f64),
    /// Total cost `w·L + r·K` (requires factor prices).
    Cost(f64),
}

impl InputTarget {
    pub fn value(&self) -> f64 {
        match *self {
            InputTarget::Output(v) | InputTarget::Cost(v) => v,
        }
    }

    /// Quantity the target refers to, evaluated at `(k, l)`.
    pub fn achieved(&self, k: f64, l: f64, params: &ProductionParams) -> ProductionResult<f64> {
        match self {
            InputTarget::Output(_) => Ok(output(k, l, params)),
            InputTarget::Cost(_) => {
                let prices = params.prices.ok_or(ProductionError::MissingFactorPrices)?;
                Ok(cost(k, l, &prices))
            }
        }
    }

    fn validate(&self, params: &ProductionParams) -> ProductionResult<()> {
        let value = self.value();
        if !value.is_finite() || value <= 0.0 {
            return Err(ProductionError::InvalidTarget { value });
        }
        if matches!(self, InputTarget::Cost(_)) && params.prices.is_none() {
            return Err(ProductionError::MissingFactorPrices);
        }
        Ok(())
    }
}

/// Interval bounds on capital and labor plus an optional budget `K + L ≤ B`.
///
/// Default: `K ∈ [5, 50]`, `L ∈ [30, 70]`, `B = 100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputConstraints {
    pub capital: (f64, f64),
    pub labor: (f64, f64),
    pub budget: Option<f64>,
}

impl InputConstraints {
    /// # Errors
    /// - [`ProductionError::InvalidInputBounds`] unless `0 ≤ lower < upper`,
    ///   both finite.
    /// - [`ProductionError::InvalidBudget`] if the budget is non-finite or
    ///   cannot cover the lower bounds.
    pub fn new(
        capital: (f64, f64), labor: (f64, f64), budget: Option<f64>,
    ) -> ProductionResult<Self> {
        check_bounds("capital", capital)?;
        check_bounds("labor", labor)?;
        if let Some(b) = budget {
            if !b.is_finite() {
                return Err(ProductionError::InvalidBudget {
                    budget: b,
                    reason: "Budget must be finite.",
                });
            }
            if b < capital.0 + labor.0 {
                return Err(ProductionError::InvalidBudget {
                    budget: b,
                    reason: "Budget cannot cover the lower bounds on capital and labor.",
                });
            }
        }
        Ok(Self { capital, labor, budget })
    }

    /// Feasible region over `(K, L)`.
    pub fn region(&self) -> OptResult<FeasibleRegion> {
        let bounds = vec![
            Bound::interval(self.capital.0, self.capital.1),
            Bound::interval(self.labor.0, self.labor.1),
        ];
        let inequalities = self
            .budget
            .map(|b| vec![LinearInequality::new(vec![1.0, 1.0], b)])
            .unwrap_or_default();
        FeasibleRegion::new(bounds, inequalities)
    }

    /// Start point from `params`, moving out-of-bounds inputs to the middle of
    /// their interval.
    fn start(&self, params: &ProductionParams) -> Point {
        let inside = |x: f64, (lo, hi): (f64, f64)| {
            if x > lo && x < hi { x } else { 0.5 * (lo + hi) }
        };
        array![inside(params.k, self.capital), inside(params.l, self.labor)]
    }
}

impl Default for InputConstraints {
    fn default() -> Self {
        Self { capital: (5.0, 50.0), labor: (30.0, 70.0), budget: Some(100.0) }
    }
}

/// Optimized inputs with diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSolution {
    pub capital: f64,
    pub labor: f64,
    /// Output at `(capital, labor)`.
    pub output: f64,
    /// Objective at the solution: absolute deviation from the target, or
    /// `−output` for maximization.
    pub objective: f64,
    pub converged: bool,
    pub iterations: usize,
}

/// Choose `(K, L)` to hit `target` as closely as possible.
///
/// # Errors
/// - [`ProductionError::InvalidTarget`] for non-positive or non-finite
///   targets; [`ProductionError::MissingFactorPrices`] for a cost target
///   without prices.
/// - [`ProductionError::Optimization`] for minimizer failures.
pub fn optimize_inputs<M: Minimizer>(
    params: &ProductionParams, target: InputTarget, constraints: &InputConstraints, minimizer: &M,
) -> ProductionResult<InputSolution> {
    target.validate(params)?;
    let region = constraints.region()?;

    let current = array![params.k, params.l];
    let deviation = (target.achieved(params.k, params.l, params)? - target.value()).abs();
    if region.is_feasible(&current, 0.0) && deviation <= FIXED_POINT_TOL * target.value() {
        debug!(k = params.k, l = params.l, deviation, "inputs already hit the target");
        return Ok(InputSolution {
            capital: params.k,
            labor: params.l,
            output: output(params.k, params.l, params),
            objective: deviation,
            converged: true,
            iterations: 0,
        });
    }

    let out =
        minimizer.minimize(&TargetDeviation, &constraints.start(params), &(*params, target), &region)?;
    finish(params, &out.x_hat, out.value, out.converged, out.iterations)
}

/// Maximize output over the constrained input set.
///
/// # Errors
/// - [`ProductionError::Optimization`] for minimizer failures.
pub fn maximize_output<M: Minimizer>(
    params: &ProductionParams, constraints: &InputConstraints, minimizer: &M,
) -> ProductionResult<InputSolution> {
    let region = constraints.region()?;
    let out = minimizer.minimize(&NegOutput, &constraints.start(params), params, &region)?;
    finish(params, &out.x_hat, out.value, out.converged, out.iterations)
}

// ---- Helper Methods ----

/// `|target(K, L) − value|`.
struct TargetDeviation;

impl Objective for TargetDeviation {
    type Data = (ProductionParams, InputTarget);

    fn value(&self, x: &Point, (params, target): &Self::Data) -> OptResult<Cost> {
        let (k, l) = (x[0], x[1]);
        let achieved = match target {
            InputTarget::Output(_) => output(k, l, params),
            InputTarget::Cost(_) => params.prices.map_or(f64::NAN, |p| cost(k, l, &p)),
        };
        Ok((achieved - target.value()).abs())
    }
}

/// `−Y(K, L)`.
struct NegOutput;

impl Objective for NegOutput {
    type Data = ProductionParams;

    fn value(&self, x: &Point, params: &ProductionParams) -> OptResult<Cost> {
        Ok(-output(x[0], x[1], params))
    }
}

fn finish(
    params: &ProductionParams, x_hat: &Point, objective: f64, converged: bool, iterations: usize,
) -> ProductionResult<InputSolution> {
    let (capital, labor) = (x_hat[0], x_hat[1]);
    if !converged {
        warn!(capital, labor, iterations, "input optimization did not converge; using best point");
    }
    debug!(capital, labor, objective, iterations, "input optimization finished");
    Ok(InputSolution {
        capital,
        labor,
        output: output(capital, labor, params),
        objective,
        converged,
        iterations,
    })
}

fn check_bounds(input: &'static str, (lower, upper): (f64, f64)) -> ProductionResult<()> {
    if !lower.is_finite() || !upper.is_finite() || lower < 0.0 || lower >= upper {
        return Err(ProductionError::InvalidInputBounds { input, lower, upper });
    }
    Ok(())
}
