//! Shared fixtures for the cross-family integration tests.

use nalgebra::{dmatrix, dvector, DMatrix, DVector};

/// The classic Newton demonstration cubic, `x^3 - 2x - 5`, with its root
/// near 2.0945515 inside `[1, 3]`.
pub fn cubic(x: f64) -> f64 {
    x * x * x - 2.0 * x - 5.0
}

/// Root of [`cubic`] to more digits than any solver tolerance used here.
pub const CUBIC_ROOT: f64 = 2.094_551_481_542_327;

/// A 2x2 system with solution (2, 1) that is *not* strictly diagonally
/// dominant: `2x + y = 5`, `x - y = 1`.
pub fn non_dominant_system() -> (DMatrix<f64>, DVector<f64>) {
    (dmatrix![2.0, 1.0; 1.0, -1.0], dvector![5.0, 1.0])
}

/// A strictly diagonally dominant 3x3 system, solvable by every method.
pub fn dominant_system() -> (DMatrix<f64>, DVector<f64>) {
    (
        dmatrix![5.0, 1.0, 1.0; 1.0, 6.0, 2.0; 1.0, 1.0, 7.0],
        dvector![10.0, 15.0, 20.0],
    )
}
