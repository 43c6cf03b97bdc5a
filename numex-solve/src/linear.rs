//! Dense linear systems `Ax = b`.
//!
//! One direct method (Gauss elimination with partial pivoting) and two
//! stationary iterative methods (Jacobi and Gauss-Seidel). The iterative
//! methods require strict diagonal dominance and refuse the system before
//! the first sweep when it does not hold; there is no row-reordering
//! fallback.

pub mod gauss;
pub mod gauss_seidel;
pub mod jacobi;

mod config;
mod record;

pub use config::Config;
pub use record::{EliminationRecord, LinearRecord, SweepRecord};

use nalgebra::{DMatrix, DVector};
use numex_core::{InputError, Report};

/// Report returned by the direct solver.
pub type GaussReport = Report<DVector<f64>, EliminationRecord>;

/// Report returned by the iterative solvers.
pub type SweepReport = Report<DVector<f64>, SweepRecord>;

/// Report with the unified trace shape produced by the comparison runner.
pub type LinearReport = Report<DVector<f64>, LinearRecord>;

/// Validates the matrix/vector shapes shared by all three methods.
pub(crate) fn check_system(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<usize, InputError> {
    let (rows, cols) = a.shape();
    if rows != cols {
        return Err(InputError::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(InputError::EmptySystem);
    }
    if b.len() != rows {
        return Err(InputError::DimensionMismatch { n: rows, len: b.len() });
    }
    Ok(rows)
}

/// Checks strict diagonal dominance, returning the first offending row.
pub(crate) fn diagonal_dominance(a: &DMatrix<f64>) -> Result<(), usize> {
    let n = a.nrows();
    for i in 0..n {
        let mut off_diagonal = 0.0;
        for j in 0..n {
            if j != i {
                off_diagonal += a[(i, j)].abs();
            }
        }
        if a[(i, i)].abs() <= off_diagonal {
            return Err(i);
        }
    }
    Ok(())
}

/// Infinity norm of the residual `Ax - b`.
pub(crate) fn residual_norm(a: &DMatrix<f64>, b: &DVector<f64>, x: &DVector<f64>) -> f64 {
    (a * x - b).amax()
}
