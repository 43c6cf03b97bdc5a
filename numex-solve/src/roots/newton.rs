//! Newton's method with a finite-difference derivative.

use numex_core::{DivergenceError, Function, InputError, NumericalFailure, Status};

use super::{central_difference, Config, DERIVATIVE_FLOOR, RootDetail, RootRecord, RootReport, RUNAWAY};

const METHOD: &str = "newton";

/// Finds a root of `f` starting from `x0`.
///
/// The derivative is a central finite difference with a step scaled to
/// `|x|` (see [`central_difference`](super::central_difference)). Converges
/// when the step or the residual drops below the tolerance; fails when the
/// derivative is near zero; diverges when an iterate runs past `1e10` or
/// stops being finite.
///
/// A stagnation guard watches the error sequence: after at least four
/// iterations, if the last three error values changed by less than `1e-15`,
/// the solve stops with [`Status::Stalled`] and keeps the last estimate.
#[must_use]
pub fn solve(f: &impl Function, x0: f64, config: &Config) -> RootReport {
    if let Err(reason) = config.validate() {
        return reject(Status::Input(InputError::Config { reason }));
    }
    if !x0.is_finite() {
        return reject(Status::Input(InputError::NonFiniteSeed { value: x0 }));
    }

    // The original solver floors the tolerance at 1e-12 so a caller asking
    // for more than double precision still terminates.
    let tol = config.precision.max(1e-12);

    let mut x = x0;
    let mut trace: Vec<RootRecord> = Vec::new();

    for iteration in 1..=config.max_iterations {
        let Some(fx) = f.sample(x) else {
            return RootReport::new(
                METHOD,
                Status::Failed(NumericalFailure::UndefinedSample { x }),
                None,
                trace,
                None,
            );
        };
        let Some(dfx) = central_difference(f, x) else {
            return RootReport::new(
                METHOD,
                Status::Failed(NumericalFailure::UndefinedSample { x }),
                None,
                trace,
                Some(fx.abs()),
            );
        };

        if dfx.abs() < DERIVATIVE_FLOOR {
            return RootReport::new(
                METHOD,
                Status::Failed(NumericalFailure::DerivativeNearZero { x }),
                None,
                trace,
                Some(fx.abs()),
            );
        }

        let next = x - fx / dfx;

        if !next.is_finite() {
            return RootReport::new(
                METHOD,
                Status::Diverged(DivergenceError::NonFinite { iteration }),
                None,
                trace,
                Some(fx.abs()),
            );
        }
        if next.abs() > RUNAWAY {
            return RootReport::new(
                METHOD,
                Status::Diverged(DivergenceError::Runaway { value: next, iteration }),
                None,
                trace,
                Some(fx.abs()),
            );
        }

        let error = (next - x).abs();
        trace.push(RootRecord {
            iteration,
            x,
            fx,
            error,
            detail: RootDetail::Slope { derivative: dfx, next },
        });

        // Cycle/plateau guard: the error has stopped moving.
        if trace.len() > 3 {
            let newest = trace[trace.len() - 1].error;
            let oldest = trace[trace.len() - 3].error;
            if (newest - oldest).abs() < 1e-15 {
                let residual = f.sample(next).map(f64::abs);
                return RootReport::new(
                    METHOD,
                    Status::Stalled { at: iteration },
                    Some(next),
                    trace,
                    residual,
                );
            }
        }

        if error < tol || fx.abs() < tol {
            let residual = f.sample(next).map(f64::abs);
            return RootReport::new(METHOD, Status::Converged, Some(next), trace, residual);
        }

        x = next;
    }

    let residual = f.sample(x).map(f64::abs);
    RootReport::new(
        METHOD,
        Status::IterationLimit {
            limit: config.max_iterations,
        },
        Some(x),
        trace,
        residual,
    )
}

fn reject(status: Status) -> RootReport {
    RootReport::new(METHOD, status, None, Vec::new(), None)
}
