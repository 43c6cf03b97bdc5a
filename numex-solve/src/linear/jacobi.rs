//! Jacobi iteration.

use nalgebra::{DMatrix, DVector};
use numex_core::{InputError, NumericalFailure, Status};

use super::{check_system, diagonal_dominance, residual_norm, Config, SweepRecord, SweepReport};

const METHOD: &str = "jacobi";

/// Solves `Ax = b` by Jacobi iteration.
///
/// Every component of the new iterate is computed from the previous full
/// iterate. Requires strict diagonal dominance; a system without it is
/// refused before the first sweep. `initial` seeds the iteration (zero
/// vector when `None`).
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
    let mut next = DVector::zeros(n);
    let mut trace: Vec<SweepRecord> = Vec::new();

    for iteration in 1..=config.max_iterations {
        for i in 0..n {
            let mut sum = 0.0;
            for j in 0..n {
                if j != i {
                    sum += a[(i, j)] * x[j];
                }
            }
            next[i] = (b[i] - sum) / a[(i, i)];
        }

        let delta = (&next - &x).amax();
        let residual = residual_norm(a, b, &next);
        trace.push(SweepRecord {
            iteration,
            x: next.clone(),
            residual,
            delta,
        });

        if delta < config.precision {
            return SweepReport::new(METHOD, Status::Converged, Some(next), trace, Some(residual));
        }

        x.copy_from(&next);
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

/// Shared precheck for both iterative solvers: shapes, config, seed shape,
/// and strict diagonal dominance.
pub(super) fn precheck(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    initial: Option<&DVector<f64>>,
    config: &Config,
) -> Result<usize, Status> {
    if let Err(reason) = config.validate() {
        return Err(Status::Input(InputError::Config { reason }));
    }
    let n = check_system(a, b).map_err(Status::Input)?;
    if let Some(seed) = initial
        && seed.len() != n
    {
        return Err(Status::Input(InputError::DimensionMismatch { n, len: seed.len() }));
    }
    if let Err(row) = diagonal_dominance(a) {
        return Err(Status::Failed(NumericalFailure::NotDiagonallyDominant { row }));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use nalgebra::{dmatrix, dvector};

    #[test]
    fn converges_on_a_dominant_system() {
        let a = dmatrix![4.0, 1.0; 2.0, 5.0];
        let b = dvector![9.0, 19.0];
        let report = solve(&a, &b, None, &Config::default());

        assert!(report.converged());
        let x = report.solution.unwrap();
        // Exact solution is (26/18, 58/18) = (13/9, 29/9).
        assert_relative_eq!(x[0], 13.0 / 9.0, epsilon = 1e-5);
        assert_relative_eq!(x[1], 29.0 / 9.0, epsilon = 1e-5);
        assert!(report.residual.unwrap() < 1e-4);
    }

    #[test]
    fn refuses_non_dominant_systems_before_iterating() {
        // 2x + y = 5, x - y = 1: row 1 fails strict dominance.
        let a = dmatrix![2.0, 1.0; 1.0, -1.0];
        let b = dvector![5.0, 1.0];
        let report = solve(&a, &b, None, &Config::default());

        assert!(!report.converged());
        assert!(matches!(
            report.status,
            Status::Failed(NumericalFailure::NotDiagonallyDominant { .. })
        ));
        assert_eq!(report.iterations, 0);
        assert!(report.trace.is_empty());
    }

    #[test]
    fn uses_the_provided_initial_guess() {
        let a = dmatrix![10.0, 1.0; 1.0, 10.0];
        let b = dvector![11.0, 11.0];
        let exact = dvector![1.0, 1.0];

        let seeded = solve(&a, &b, Some(&exact), &Config::default());
        assert!(seeded.converged());
        // Starting at the solution, the first sweep barely moves.
        assert_eq!(seeded.iterations, 1);
    }

    #[test]
    fn rejects_a_misshapen_initial_guess() {
        let a = dmatrix![4.0, 1.0; 1.0, 4.0];
        let b = dvector![5.0, 5.0];
        let seed = dvector![0.0, 0.0, 0.0];
        let report = solve(&a, &b, Some(&seed), &Config::default());

        assert!(matches!(
            report.status,
            Status::Input(InputError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn sweep_cap_keeps_the_last_iterate() {
        let a = dmatrix![4.0, 1.0; 2.0, 5.0];
        let b = dvector![9.0, 19.0];
        let config = Config {
            precision: 1e-15,
            max_iterations: 4,
        };
        let report = solve(&a, &b, None, &config);

        assert!(matches!(report.status, Status::IterationLimit { limit: 4 }));
        assert_eq!(report.iterations, 4);
        assert!(report.solution.is_some());
    }

    #[test]
    fn residuals_shrink_across_sweeps() {
        let a = dmatrix![5.0, 1.0, 1.0; 1.0, 6.0, 2.0; 1.0, 1.0, 7.0];
        let b = dvector![10.0, 15.0, 20.0];
        let report = solve(&a, &b, None, &Config::default());

        assert!(report.converged());
        let first = report.trace.first().unwrap().residual;
        let last = report.trace.last().unwrap().residual;
        assert!(last < first);
    }
}
