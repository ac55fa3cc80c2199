//! Adapter that exposes a user `Objective` as an `argmin` problem.
//!
//! The solver moves in unconstrained coordinates `z`. Each cost evaluation
//! maps `z` into model space through the region's bounds, evaluates the
//! objective there, and adds an exact L1 penalty for violated linear
//! inequalities:
//!
//! `c(z) = f(x(z)) + w · Σ max(0, aᵢ·x(z) − bᵢ)`.
use crate::optimization::{
    errors::OptError,
    minimizer::{
        region::FeasibleRegion,
        traits::Objective,
        types::{Cost, Point},
    },
};
use argmin::core::{CostFunction, Error};

/// Bridges a user `Objective` to `argmin`'s `CostFunction`.
#[derive(Debug, Clone)]
pub struct ArgMinAdapter<'a, F: Objective> {
    pub f: &'a F,
    pub data: &'a F::Data,
    pub region: &'a FeasibleRegion,
    pub penalty_weight: f64,
}

impl<'a, F: Objective> CostFunction for ArgMinAdapter<'a, F> {
    type Param = Point;
    type Output = Cost;

    /// Evaluate the penalized cost at an unconstrained point.
    ///
    /// # Errors
    /// - Propagates any `OptError` from the user's `value` via `?`.
    /// - Returns `NonFiniteCost` if the objective is not finite.
    fn cost(&self, z: &Self::Param) -> Result<Self::Output, Error> {
        let x = self.region.to_model(z);
        let output = self.f.value(&x, self.data)?;
        if !output.is_finite() {
            return Err((OptError::NonFiniteCost { value: output }).into());
        }
        Ok(output + self.penalty_weight * self.region.total_violation(&x))
    }
}

impl<'a, F: Objective> ArgMinAdapter<'a, F> {
    /// Construct a new adapter over a user objective, its data, and region.
    pub fn new(f: &'a F, data: &'a F::Data, region: &'a FeasibleRegion, penalty_weight: f64) -> Self {
        Self { f, data, region, penalty_weight }
    }
}
