//! Gauss elimination with partial pivoting.

use nalgebra::{DMatrix, DVector};
use numex_core::{NumericalFailure, Status};

use super::{check_system, residual_norm, EliminationRecord, GaussReport};

const METHOD: &str = "gauss";

/// Pivots smaller than this are treated as zero.
const PIVOT_TOL: f64 = 1e-10;

/// Solves `Ax = b` by elimination on the augmented matrix.
///
/// Each pivot column selects the row with the largest absolute entry among
/// the remaining rows and swaps it into place; a pivot below `1e-10` fails
/// the solve as singular. Exactly `n` elimination steps are recorded, each
/// holding the augmented-matrix snapshot and the pivot row chosen.
#[must_use]
pub fn solve(a: &DMatrix<f64>, b: &DVector<f64>) -> GaussReport {
    let n = match check_system(a, b) {
        Ok(n) => n,
        Err(e) => return GaussReport::new(METHOD, Status::Input(e), None, Vec::new(), None),
    };

    let mut augmented = DMatrix::zeros(n, n + 1);
    augmented.view_mut((0, 0), (n, n)).copy_from(a);
    augmented.set_column(n, b);

    let mut trace = Vec::with_capacity(n);

    // Forward elimination.
    for col in 0..n {
        let mut pivot_row = col;
        for row in col + 1..n {
            if augmented[(row, col)].abs() > augmented[(pivot_row, col)].abs() {
                pivot_row = row;
            }
        }
        if pivot_row != col {
            augmented.swap_rows(col, pivot_row);
        }

        let pivot = augmented[(col, col)];
        if pivot.abs() < PIVOT_TOL {
            return GaussReport::new(
                METHOD,
                Status::Failed(NumericalFailure::SingularPivot { pivot, column: col }),
                None,
                trace,
                None,
            );
        }

        for row in col + 1..n {
            let factor = augmented[(row, col)] / pivot;
            for k in col..=n {
                augmented[(row, k)] -= factor * augmented[(col, k)];
            }
        }

        trace.push(EliminationRecord {
            step: col + 1,
            augmented: augmented.clone(),
            pivot_row,
        });
    }

    // Back substitution.
    let mut x = DVector::zeros(n);
    for i in (0..n).rev() {
        let mut value = augmented[(i, n)];
        for j in i + 1..n {
            value -= augmented[(i, j)] * x[j];
        }
        x[i] = value / augmented[(i, i)];
    }

    let residual = residual_norm(a, b, &x);
    GaussReport::new(METHOD, Status::Converged, Some(x), trace, Some(residual))
}
