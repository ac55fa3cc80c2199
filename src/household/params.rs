//! Household parameters — immutable preference, technology, and wage record.
//!
//! Purpose
//! -------
//! Hold every scalar the utility function needs in one validated, `Copy`
//! record. Calibration and scenario sweeps never mutate a record in place;
//! they derive trial copies through the `with_*` builders, each of which
//! re-validates the changed fields.
//!
//! Key behaviors
//! -------------
//! - [`HouseholdParams::new`] checks every field against its admissible range.
//! - `with_*` builders return fresh validated copies (trial parameter sets).
//! - [`HouseholdParams::home_aggregate`] selects the home-production policy
//!   implied by `sigma`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `rho > 0`, `nu ≥ 0`, `epsilon > 0`, `omega ∈ [0, 1]`, `alpha ∈ [0, 1]`,
//!   `sigma ≥ 0`, `wage_m > 0`, `wage_f > 0`, all finite.
//!
//! Conventions
//! -----------
//! - `M` is the male member, `F` the female member; `alpha` is the weight on
//!   female home hours in the home-production aggregate.
//!
//! Testing notes
//! -------------
//! - Unit tests cover defaults, each rejection path, and that builders leave
//!   the source record untouched.
use crate::household::{
    errors::{HouseholdError, HouseholdResult},
    home_production::HomeAggregate,
};

/// HouseholdParams — validated parameter record for one utility evaluation.
///
/// Fields
/// ------
/// - `rho`: relative risk aversion of the composite good (`> 0`).
/// - `nu`: weight on the disutility of total work (`≥ 0`).
/// - `epsilon`: Frisch elasticity of labor supply (`> 0`).
/// - `omega`: weight on market consumption in the composite good (`[0, 1]`).
/// - `alpha`: weight on female home hours in home production (`[0, 1]`).
/// - `sigma`: elasticity of substitution between home hours (`≥ 0`).
/// - `wage_m`, `wage_f`: hourly market wages (`> 0`).
///
/// Notes
/// -----
/// - Defaults: `rho = 2`, `nu = 0.001`, `epsilon = 1`, `omega = 0.5`,
///   `alpha = 0.5`, `sigma = 1`, `wage_m = wage_f = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseholdParams {
    pub rho: f64,
    pub nu: f64,
    pub epsilon: f64,
    pub omega: f64,
    pub alpha: f64,
    pub sigma: f64,
    pub wage_m: f64,
    pub wage_f: f64,
}

impl HouseholdParams {
    /// Construct a validated record.
    ///
    /// # Errors
    /// - [`HouseholdError::InvalidParam`] naming the first field out of range.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        rho: f64, nu: f64, epsilon: f64, omega: f64, alpha: f64, sigma: f64, wage_m: f64,
        wage_f: f64,
    ) -> HouseholdResult<Self> {
        let params = Self { rho, nu, epsilon, omega, alpha, sigma, wage_m, wage_f };
        params.validate()?;
        Ok(params)
    }

    /// Trial copy with new home-production structure.
    pub fn with_alpha_sigma(&self, alpha: f64, sigma: f64) -> HouseholdResult<Self> {
        let next = Self { alpha, sigma, ..*self };
        next.validate()?;
        Ok(next)
    }

    /// Trial copy with new market wages.
    pub fn with_wages(&self, wage_m: f64, wage_f: f64) -> HouseholdResult<Self> {
        let next = Self { wage_m, wage_f, ..*self };
        next.validate()?;
        Ok(next)
    }

    /// Trial copy with a new disutility weight.
    pub fn with_nu(&self, nu: f64) -> HouseholdResult<Self> {
        let next = Self { nu, ..*self };
        next.validate()?;
        Ok(next)
    }

    /// Home-production policy selected by `sigma`.
    pub fn home_aggregate(&self) -> HomeAggregate {
        HomeAggregate::from_sigma(self.sigma)
    }

    /// Relative wage `wage_f / wage_m`.
    pub fn relative_wage(&self) -> f64 {
        self.wage_f / self.wage_m
    }

    fn validate(&self) -> HouseholdResult<()> {
        check(
            "rho",
            self.rho,
            |v| v > 0.0,
            "Risk aversion must be strictly positive and finite.",
        )?;
        check(
            "nu",
            self.nu,
            |v| v >= 0.0,
            "Disutility weight must be non-negative and finite.",
        )?;
        check(
            "epsilon",
            self.epsilon,
            |v| v > 0.0,
            "Labor supply elasticity must be strictly positive and finite.",
        )?;
        check(
            "omega",
            self.omega,
            |v| (0.0..=1.0).contains(&v),
            "Consumption weight must lie in [0, 1].",
        )?;
        check(
            "alpha",
            self.alpha,
            |v| (0.0..=1.0).contains(&v),
            "Home-production share must lie in [0, 1].",
        )?;
        check(
            "sigma",
            self.sigma,
            |v| v >= 0.0,
            "Substitution elasticity must be non-negative and finite.",
        )?;
        check("wage_m", self.wage_m, |v| v > 0.0, "Wages must be strictly positive and finite.")?;
        check("wage_f", self.wage_f, |v| v > 0.0, "Wages must be strictly positive and finite.")?;
        Ok(())
    }
}

impl Default for HouseholdParams {
    fn default() -> Self {
        Self {
            rho: 2.0,
            nu: 0.001,
            epsilon: 1.0,
            omega: 0.5,
            alpha: 0.5,
            sigma: 1.0,
            wage_m: 1.0,
            wage_f: 1.0,
        }
    }
}

// ---- Helper Methods ----

fn check(
    name: &'static str, value: f64, ok: impl Fn(f64) -> bool, reason: &'static str,
) -> HouseholdResult<()> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(HouseholdError::InvalidParam { name, value, reason })
    }
}
