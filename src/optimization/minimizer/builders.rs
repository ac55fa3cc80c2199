//! minimizer::builders — Nelder–Mead solver construction.
//!
//! Purpose
//! -------
//! Build argmin's Nelder–Mead solver from a starting simplex and
//! [`MinimizerOptions`], hiding the simplex layout and tolerance wiring from
//! the runner.
//!
//! Key behaviors
//! -------------
//! - Lay out the initial simplex as the start point plus one vertex per
//!   coordinate, each shifted by a signed step along that axis.
//! - Apply the optional simplex standard-deviation tolerance.
//! - Leave iteration limits to the runner.
//!
//! Invariants & assumptions
//! ------------------------
//! - The start point is already in unconstrained coordinates and finite.
//! - A simplex in `n` dimensions has exactly `n + 1` vertices.
//!
//! Testing notes
//! -------------
//! - Unit tests check the simplex layout and that builder errors surface as
//!   [`OptError`](crate::optimization::errors::OptError).
use crate::optimization::{
    errors::OptResult,
    minimizer::{
        traits::MinimizerOptions,
        types::{NelderMeadSolver, Point},
    },
};

/// initial_simplex — start point plus one axis-shifted vertex per coordinate.
pub fn initial_simplex(z0: &Point, step: f64) -> Vec<Point> {
    let mut vertices = Vec::with_capacity(z0.len() + 1);
    vertices.push(z0.clone());
    for i in 0..z0.len() {
        let mut vertex = z0.clone();
        vertex[i] += step;
        vertices.push(vertex);
    }
    vertices
}

/// build_nelder_mead — construct a Nelder–Mead solver over `simplex`.
///
/// The caller must have evaluated every vertex successfully: argmin's
/// `init` does not propagate cost errors on the starting simplex.
///
/// # Errors
/// - `OptError` (via `From<argmin::core::Error>`) when argmin rejects the
///   tolerance.
pub fn build_nelder_mead(
    simplex: Vec<Point>, opts: &MinimizerOptions,
) -> OptResult<NelderMeadSolver> {
    let mut solver = NelderMeadSolver::new(simplex);
    if let Some(tol) = opts.tols.sd_tolerance {
        solver = solver.with_sd_tolerance(tol)?;
    }
    Ok(solver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // The simplex has `n + 1` vertices and each extra vertex differs from the
    // start point along exactly one axis.
    fn initial_simplex_layout() {
        let z0 = array![1.0, -2.0, 0.5];

        let simplex = initial_simplex(&z0, 0.25);

        assert_eq!(simplex.len(), 4);
        assert_eq!(simplex[0], z0);
        for (i, vertex) in simplex.iter().enumerate().skip(1) {
            let diff = vertex - &z0;
            for (j, d) in diff.iter().enumerate() {
                let expected = if j == i - 1 { 0.25 } else { 0.0 };
                assert_eq!(*d, expected);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // A negative step mirrors the simplex through the start point.
    fn initial_simplex_accepts_negative_step() {
        let simplex = initial_simplex(&array![1.0, 1.0], -0.5);

        assert_eq!(simplex, vec![array![1.0, 1.0], array![0.5, 1.0], array![1.0, 0.5]]);
    }

    #[test]
    fn build_nelder_mead_accepts_default_options() {
        let opts = MinimizerOptions::default();
        let simplex = initial_simplex(&array![0.0, 0.0], opts.initial_step);
        assert!(build_nelder_mead(simplex, &opts).is_ok());
    }
}
