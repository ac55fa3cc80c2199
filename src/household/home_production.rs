//! Home production — tagged CES / Cobb-Douglas / Leontief aggregate.
//!
//! Purpose
//! -------
//! Combine male and female home hours into a single home good `H`. The
//! closed form depends on the elasticity of substitution `sigma`, and the
//! boundary cases are kept as explicit variants so each can be tested on its
//! own.
//!
//! Key behaviors
//! -------------
//! - [`HomeAggregate::from_sigma`] selects the variant with a fixed
//!   tolerance [`ELASTICITY_TOL`]:
//!   - `|sigma − 1| < tol` → [`HomeAggregate::CobbDouglas`],
//!   - `sigma < tol` → [`HomeAggregate::Leontief`],
//!   - otherwise → [`HomeAggregate::Ces`] with `r = (sigma − 1) / sigma`.
//! - [`HomeAggregate::evaluate`] computes `H(HM, HF; alpha)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are non-negative hours; the result is finite and non-negative.
//! - The CES branch factors out the dominant term before exponentiating, so
//!   large `|r|` (sigma near zero) neither overflows nor underflows.
//! - With `r < 0` a zero input drives the aggregate to zero; no division by
//!   zero is performed.
//!
//! Testing notes
//! -------------
//! - Agreement of CES with Cobb-Douglas as `sigma → 1`, convergence to
//!   `min(HM, HF)` as `sigma → 0`, zero-input guards, and homogeneity.

/// Tolerance used to snap `sigma` onto its Cobb-Douglas or Leontief limit.
pub const ELASTICITY_TOL: f64 = 1e-6;

/// Home-production functional form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HomeAggregate {
    /// `HM^(1−α) · HF^α` (sigma = 1).
    CobbDouglas,
    /// `min(HM, HF)` (sigma = 0).
    Leontief,
    /// `((1−α)·HM^r + α·HF^r)^(1/r)` with `r = (σ − 1)/σ`.
    Ces { r: f64 },
}

impl HomeAggregate {
    pub fn from_sigma(sigma: f64) -> Self {
        if (sigma - 1.0).abs() < ELASTICITY_TOL {
            HomeAggregate::CobbDouglas
        } else if sigma < ELASTICITY_TOL {
            HomeAggregate::Leontief
        } else {
            HomeAggregate::Ces { r: (sigma - 1.0) / sigma }
        }
    }

    /// Evaluate `H(hm, hf)` with female weight `alpha`.
    pub fn evaluate(&self, hm: f64, hf: f64, alpha: f64) -> f64 {
        let (hm, hf) = (hm.max(0.0), hf.max(0.0));
        match *self {
            HomeAggregate::CobbDouglas => hm.powf(1.0 - alpha) * hf.powf(alpha),
            HomeAggregate::Leontief => hm.min(hf),
            HomeAggregate::Ces { r } => ces(hm, hf, alpha, r),
        }
    }
}

// ---- Helper Methods ----

/// CES aggregate in log-sum-exp form.
///
/// With `a_i = r·ln(h_i)` and `m = max a_i` over inputs with positive weight,
/// `ln H = (m + ln Σ w_i·exp(a_i − m)) / r`. `m` corresponds to the largest
/// input when `r > 0` and the smallest when `r < 0`.
fn ces(hm: f64, hf: f64, alpha: f64, r: f64) -> f64 {
    let weighted = [(1.0 - alpha, hm), (alpha, hf)];
    let active = || weighted.iter().filter(|(w, _)| *w > 0.0);

    if active().all(|&(_, h)| h <= 0.0) {
        return 0.0;
    }
    if r < 0.0 && active().any(|&(_, h)| h <= 0.0) {
        return 0.0;
    }

    let m = active()
        .filter(|&&(_, h)| h > 0.0)
        .map(|&(_, h)| r * h.ln())
        .fold(f64::NEG_INFINITY, f64::max);
    let sum: f64 = active()
        .filter(|&&(_, h)| h > 0.0)
        .map(|&(w, h)| w * (r * h.ln() - m).exp())
        .sum();
    ((m + sum.ln()) / r).exp()
}
