//! Production parameters — technology, inputs, shares, and optional prices.
//!
//! Purpose
//! -------
//! Immutable record for a Cobb-Douglas technology
//! `Y = A · K^α · L^(1−α) · S^s`, where the exogenous shift `S^s` and the
//! factor prices are optional.
//!
//! Invariants & assumptions
//! ------------------------
//! - `a > 0`, `k > 0`, `l > 0`, `alpha ∈ (0, 1)`, all finite.
//! - A shift has `level > 0` and `share ≥ 0`; prices are strictly positive.
//! - Input optimization never mutates a record; it returns new inputs that
//!   callers apply with [`ProductionParams::with_inputs`].
use crate::production::errors::{ProductionError, ProductionResult};

/// Exogenous technology shift `level^share` multiplying output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TechnologyShift {
    pub level: f64,
    pub share: f64,
}

impl TechnologyShift {
    pub fn new(level: f64, share: f64) -> ProductionResult<Self> {
        check("shift_level", level, |v| v > 0.0, "Shift level must be strictly positive.")?;
        check("shift_share", share, |v| v >= 0.0, "Shift share must be non-negative.")?;
        Ok(Self { level, share })
    }

    /// Multiplicative factor `level^share`.
    pub fn factor(&self) -> f64 {
        self.level.powf(self.share)
    }
}

/// Wage `w` per unit of labor and rental rate `r` per unit of capital.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorPrices {
    pub wage: f64,
    pub rental: f64,
}

impl FactorPrices {
    pub fn new(wage: f64, rental: f64) -> ProductionResult<Self> {
        check("wage", wage, |v| v > 0.0, "Wage must be strictly positive.")?;
        check("rental", rental, |v| v > 0.0, "Rental rate must be strictly positive.")?;
        Ok(Self { wage, rental })
    }
}

/// Cobb-Douglas technology and current inputs.
///
/// Defaults: `A = 1`, `K = 10`, `L = 50`, `alpha = 0.3`, no shift, no prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductionParams {
    pub a: f64,
    pub k: f64,
    pub l: f64,
    pub alpha: f64,
    pub shift: Option<TechnologyShift>,
    pub prices: Option<FactorPrices>,
}

impl ProductionParams {
    pub fn new(a: f64, k: f64, l: f64, alpha: f64) -> ProductionResult<Self> {
        let params = Self { a, k, l, alpha, shift: None, prices: None };
        params.validate()?;
        Ok(params)
    }

    pub fn with_shift(self, shift: TechnologyShift) -> Self {
        Self { shift: Some(shift), ..self }
    }

    pub fn with_prices(self, prices: FactorPrices) -> Self {
        Self { prices: Some(prices), ..self }
    }

    /// Copy with new capital and labor.
    pub fn with_inputs(&self, k: f64, l: f64) -> ProductionResult<Self> {
        let next = Self { k, l, ..*self };
        next.validate()?;
        Ok(next)
    }

    /// Total factor productivity `A · level^share`.
    pub fn scale(&self) -> f64 {
        self.a * self.shift.map_or(1.0, |s| s.factor())
    }

    fn validate(&self) -> ProductionResult<()> {
        check("a", self.a, |v| v > 0.0, "Technology level must be strictly positive.")?;
        check("k", self.k, |v| v > 0.0, "Capital must be strictly positive.")?;
        check("l", self.l, |v| v > 0.0, "Labor must be strictly positive.")?;
        check("alpha", self.alpha, |v| v > 0.0 && v < 1.0, "Capital share must lie in (0, 1).")
    }
}

impl Default for ProductionParams {
    fn default() -> Self {
        Self { a: 1.0, k: 10.0, l: 50.0, alpha: 0.3, shift: None, prices: None }
    }
}

// ---- Helper Methods ----

fn check(
    name: &'static str, value: f64, ok: impl Fn(f64) -> bool, reason: &'static str,
) -> ProductionResult<()> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(ProductionError::InvalidParam { name, value, reason })
    }
}
