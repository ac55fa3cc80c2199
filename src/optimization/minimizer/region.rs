//! minimizer::region — bounds and linear inequalities for a minimization.
//!
//! Purpose
//! -------
//! Describe the feasible region handed to a [`Minimizer`](super::traits::Minimizer):
//! per-coordinate bounds plus optional linear inequalities `a·x ≤ b`.
//!
//! Key behaviors
//! -------------
//! - [`Bound`] maps between model coordinates and the unconstrained
//!   coordinates a derivative-free solver moves in (logistic for intervals,
//!   softplus for half-lines), so bounds hold structurally.
//! - [`LinearInequality`] reports its violation `max(0, a·x − b)`; the
//!   Nelder–Mead adapter turns the total violation into an exact L1 penalty.
//! - [`FeasibleRegion::new`] validates every bound and inequality against the
//!   problem dimension once, up front.
//!
//! Invariants & assumptions
//! ------------------------
//! - Interval bounds are finite with `lower < upper`; half-line bounds have a
//!   finite lower end.
//! - Every inequality has exactly `dim` finite coefficients and a finite
//!   right-hand side.
//!
//! Testing notes
//! -------------
//! - Unit tests cover validation failures, round-trips through the bound
//!   transforms, and violation arithmetic.
use crate::optimization::{
    errors::{OptError, OptResult},
    minimizer::types::Point,
    numerical_stability::{LOGIT_EPS, safe_logistic, safe_logit, safe_softplus, safe_softplus_inv},
};

/// Admissible range of a single coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// No restriction.
    Free,
    /// Open half-line `(lower, ∞)`.
    Lower(f64),
    /// Closed interval `[lower, upper]`.
    Interval { lower: f64, upper: f64 },
}

impl Bound {
    /// Convenience constructor for `[lower, upper]`.
    pub fn interval(lower: f64, upper: f64) -> Self {
        Bound::Interval { lower, upper }
    }

    /// Map an unconstrained coordinate into the bounded range.
    pub fn to_model(&self, z: f64) -> f64 {
        match *self {
            Bound::Free => z,
            Bound::Lower(lower) => lower + safe_softplus(z),
            Bound::Interval { lower, upper } => lower + (upper - lower) * safe_logistic(z),
        }
    }

    /// Map a model coordinate into unconstrained space.
    ///
    /// Points on (or outside) a bound are pulled inside by [`LOGIT_EPS`] so
    /// the result stays finite.
    pub fn to_unconstrained(&self, x: f64) -> f64 {
        match *self {
            Bound::Free => x,
            Bound::Lower(lower) => safe_softplus_inv((x - lower).max(LOGIT_EPS)),
            Bound::Interval { lower, upper } => safe_logit((x - lower) / (upper - lower)),
        }
    }

    /// Whether `x` lies inside the bound, allowing `tol` of slack.
    pub fn contains(&self, x: f64, tol: f64) -> bool {
        match *self {
            Bound::Free => true,
            Bound::Lower(lower) => x >= lower - tol,
            Bound::Interval { lower, upper } => x >= lower - tol && x <= upper + tol,
        }
    }

    fn validate(&self, index: usize) -> OptResult<()> {
        match *self {
            Bound::Free => Ok(()),
            Bound::Lower(lower) => {
                if !lower.is_finite() {
                    return Err(OptError::InvalidBound {
                        index,
                        lower,
                        upper: f64::INFINITY,
                        reason: "Lower bound must be finite.",
                    });
                }
                Ok(())
            }
            Bound::Interval { lower, upper } => {
                if !lower.is_finite() || !upper.is_finite() {
                    return Err(OptError::InvalidBound {
                        index,
                        lower,
                        upper,
                        reason: "Interval bounds must be finite.",
                    });
                }
                if lower >= upper {
                    return Err(OptError::InvalidBound {
                        index,
                        lower,
                        upper,
                        reason: "Lower bound must be below upper bound.",
                    });
                }
                Ok(())
            }
        }
    }
}

/// Linear inequality `coeffs · x ≤ rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInequality {
    pub coeffs: Vec<f64>,
    pub rhs: f64,
}

impl LinearInequality {
    pub fn new(coeffs: Vec<f64>, rhs: f64) -> Self {
        Self { coeffs, rhs }
    }

    /// Amount by which `x` violates the inequality; zero when satisfied.
    pub fn violation(&self, x: &Point) -> f64 {
        let lhs: f64 = self.coeffs.iter().zip(x.iter()).map(|(a, xi)| a * xi).sum();
        (lhs - self.rhs).max(0.0)
    }
}

/// Bounds plus linear inequalities for one minimization problem.
#[derive(Debug, Clone, PartialEq)]
pub struct FeasibleRegion {
    bounds: Vec<Bound>,
    inequalities: Vec<LinearInequality>,
}

impl FeasibleRegion {
    /// Construct a validated region.
    ///
    /// # Errors
    /// - [`OptError::InvalidBound`] for malformed bounds.
    /// - [`OptError::ConstraintDimMismatch`] / [`OptError::InvalidConstraint`]
    ///   for inequalities that do not match `bounds.len()` or are non-finite.
    pub fn new(bounds: Vec<Bound>, inequalities: Vec<LinearInequality>) -> OptResult<Self> {
        for (index, bound) in bounds.iter().enumerate() {
            bound.validate(index)?;
        }
        let dim = bounds.len();
        for (index, ineq) in inequalities.iter().enumerate() {
            if ineq.coeffs.len() != dim {
                return Err(OptError::ConstraintDimMismatch {
                    index,
                    expected: dim,
                    found: ineq.coeffs.len(),
                });
            }
            if !ineq.rhs.is_finite() || ineq.coeffs.iter().any(|a| !a.is_finite()) {
                return Err(OptError::InvalidConstraint {
                    index,
                    reason: "Coefficients and right-hand side must be finite.",
                });
            }
        }
        Ok(Self { bounds, inequalities })
    }

    /// Region with no restriction in `dim` coordinates.
    pub fn unbounded(dim: usize) -> Self {
        Self { bounds: vec![Bound::Free; dim], inequalities: Vec::new() }
    }

    pub fn dim(&self) -> usize {
        self.bounds.len()
    }

    pub fn bounds(&self) -> &[Bound] {
        &self.bounds
    }

    pub fn inequalities(&self) -> &[LinearInequality] {
        &self.inequalities
    }

    /// Map an unconstrained point into model space coordinate by coordinate.
    pub fn to_model(&self, z: &Point) -> Point {
        Point::from_iter(self.bounds.iter().zip(z.iter()).map(|(b, &zi)| b.to_model(zi)))
    }

    /// Map a model-space point into unconstrained coordinates.
    pub fn to_unconstrained(&self, x: &Point) -> Point {
        Point::from_iter(self.bounds.iter().zip(x.iter()).map(|(b, &xi)| b.to_unconstrained(xi)))
    }

    /// Sum of inequality violations at `x`.
    pub fn total_violation(&self, x: &Point) -> f64 {
        self.inequalities.iter().map(|ineq| ineq.violation(x)).sum()
    }

    /// Whether `x` satisfies every bound and inequality within `tol`.
    pub fn is_feasible(&self, x: &Point, tol: f64) -> bool {
        x.len() == self.dim()
            && self.bounds.iter().zip(x.iter()).all(|(b, &xi)| b.contains(xi, tol))
            && self.inequalities.iter().all(|ineq| ineq.violation(x) <= tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Validation performed by `FeasibleRegion::new`.
    // - Round-trips through the per-coordinate bound transforms.
    // - Violation and feasibility arithmetic for linear inequalities.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Interval bounds with `lower >= upper` are rejected with their payload.
    fn new_rejects_inverted_interval() {
        let err = FeasibleRegion::new(vec![Bound::Free, Bound::interval(3.0, 1.0)], vec![])
            .unwrap_err();
        match err {
            OptError::InvalidBound { index, lower, upper, .. } => {
                assert_eq!(index, 1);
                assert_eq!(lower, 3.0);
                assert_eq!(upper, 1.0);
            }
            other => panic!("expected InvalidBound, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Inequalities must carry one coefficient per coordinate.
    fn new_rejects_mismatched_inequality() {
        let err = FeasibleRegion::new(
            vec![Bound::Free, Bound::Free],
            vec![LinearInequality::new(vec![1.0], 2.0)],
        )
        .unwrap_err();
        assert_eq!(err, OptError::ConstraintDimMismatch { index: 0, expected: 2, found: 1 });
    }

    #[test]
    // Purpose
    // -------
    // Interior points survive model → unconstrained → model unchanged.
    fn bound_transforms_round_trip_interior_points() {
        let region = FeasibleRegion::new(
            vec![Bound::Free, Bound::Lower(0.0), Bound::interval(0.0, 24.0)],
            vec![],
        )
        .expect("valid region");
        let x = array![-3.5, 0.7, 6.0];

        let back = region.to_model(&region.to_unconstrained(&x));

        for (a, b) in back.iter().zip(x.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-9);
        }
    }

    #[test]
    // Purpose
    // -------
    // Any unconstrained value lands inside its bound.
    fn to_model_respects_bounds_for_extreme_inputs() {
        let interval = Bound::interval(5.0, 50.0);
        let lower = Bound::Lower(0.0);
        for &z in &[-1e3, -10.0, 0.0, 10.0, 1e3] {
            assert!(interval.contains(interval.to_model(z), 0.0));
            assert!(lower.contains(lower.to_model(z), 0.0));
        }
    }

    #[test]
    // Purpose
    // -------
    // Violation is the positive part of `a·x − b` and drives feasibility.
    fn violation_and_feasibility() {
        let region = FeasibleRegion::new(
            vec![Bound::interval(0.0, 24.0), Bound::interval(0.0, 24.0)],
            vec![LinearInequality::new(vec![1.0, 1.0], 24.0)],
        )
        .expect("valid region");

        assert_eq!(region.total_violation(&array![10.0, 10.0]), 0.0);
        assert_relative_eq!(region.total_violation(&array![20.0, 10.0]), 6.0);
        assert!(region.is_feasible(&array![12.0, 12.0], 0.0));
        assert!(!region.is_feasible(&array![20.0, 10.0], 1e-9));
    }
}
