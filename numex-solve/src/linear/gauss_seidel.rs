//! Gauss-Seidel iteration.

use nalgebra::{DMatrix, DVector};
use numex_core::Status;

use super::{jacobi::precheck, residual_norm, Config, SweepRecord, SweepReport};

const METHOD: &str = "gauss_seidel";

/// Solves `Ax = b` by Gauss-Seidel iteration.
///
/// Unlike Jacobi, each sweep reuses components already updated within the
/// same sweep: the strict lower triangle reads new values, the strict
/// upper triangle reads old ones. Same strict-dominance precheck, same
/// stopping rule on the increment norm.
#[must_use]
pub fn solve(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    initial: Option<&DVector<f64>>,
    config: &Config,
) -> SweepReport {
    let n = match precheck(a, b, initial, config) {
        Ok(n) => n,
        Err(status) => return SweepReport::new(METHOD, status, None, Vec::new(), None),
    };

    let mut x = initial.cloned().unwrap_or_else(|| DVector::zeros(n));
    let mut previous = DVector::zeros(n);
    let mut trace: Vec<SweepRecord> = Vec::new();

    for iteration in 1..=config.max_iterations {
        previous.copy_from(&x);

        for i in 0..n {
            let mut updated = 0.0;
            for j in 0..i {
                updated += a[(i, j)] * x[j];
            }
            let mut pending = 0.0;
            for j in i + 1..n {
                pending += a[(i, j)] * previous[j];
            }
            x[i] = (b[i] - updated - pending) / a[(i, i)];
        }

        let delta = (&x - &previous).amax();
        let residual = residual_norm(a, b, &x);
        trace.push(SweepRecord {
            iteration,
            x: x.clone(),
            residual,
            delta,
        });

        if delta < config.precision {
            return SweepReport::new(METHOD, Status::Converged, Some(x), trace, Some(residual));
        }
    }

    let residual = residual_norm(a, b, &x);
    SweepReport::new(
        METHOD,
        Status::IterationLimit {
            limit: config.max_iterations,
        },
        Some(x),
        trace,
        Some(residual),
    )
}
