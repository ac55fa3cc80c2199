//! Cobb-Douglas output, marginal products, and input cost.
//!
//! With `s = A · level^share`:
//! - `Y = s · K^α · L^(1−α)`,
//! - `MPK = ∂Y/∂K = α · Y / K`,
//! - `MPL = ∂Y/∂L = (1 − α) · Y / L`,
//! - cost `= w · L + r · K`.
//!
//! Inputs are expected to be positive; at `K = 0` or `L = 0` output is zero
//! and the corresponding marginal product is computed from the derivative
//! formula directly (infinite when the exponent is negative).
use crate::production::params::{FactorPrices, ProductionParams};

/// Output, marginal products, and (when prices are known) cost at the
/// inputs stored in a parameter record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductionAnalysis {
    pub output: f64,
    pub mpk: f64,
    pub mpl: f64,
    pub cost: Option<f64>,
}

/// Output `Y(K, L)`.
pub fn output(k: f64, l: f64, params: &ProductionParams) -> f64 {
    params.scale() * k.powf(params.alpha) * l.powf(1.0 - params.alpha)
}

/// Marginal product of capital `α · s · K^(α−1) · L^(1−α)`.
pub fn marginal_product_capital(k: f64, l: f64, params: &ProductionParams) -> f64 {
    params.alpha * params.scale() * k.powf(params.alpha - 1.0) * l.powf(1.0 - params.alpha)
}

/// Marginal product of labor `(1−α) · s · K^α · L^(−α)`.
pub fn marginal_product_labor(k: f64, l: f64, params: &ProductionParams) -> f64 {
    (1.0 - params.alpha) * params.scale() * k.powf(params.alpha) * l.powf(-params.alpha)
}

/// Total input cost `w · L + r · K`.
pub fn cost(k: f64, l: f64, prices: &FactorPrices) -> f64 {
    prices.wage * l + prices.rental * k
}

/// Evaluate output, MPK, MPL, and cost at `(params.k, params.l)`.
pub fn analyze(params: &ProductionParams) -> ProductionAnalysis {
    let (k, l) = (params.k, params.l);
    ProductionAnalysis {
        output: output(k, l, params),
        mpk: marginal_product_capital(k, l, params),
        mpl: marginal_product_labor(k, l, params),
        cost: params.prices.map(|p| cost(k, l, &p)),
    }
}
