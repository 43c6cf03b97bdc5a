//! Definite-integral quadrature over `[a, b]`.
//!
//! All four rules share one self-refinement loop: compute an estimate at
//! the current resolution, double it, and stop once two successive
//! estimates agree to within the configured precision. The change check
//! only arms after the first refinement, so a rule always evaluates at
//! least two resolutions before declaring convergence. A hard resolution
//! ceiling bounds worst-case cost even when the caller's precision is
//! unreachable.

pub mod midpoint;
pub mod monte_carlo;
pub mod simpson;
pub mod trapezoid;

mod config;
mod record;

pub use config::Config;
pub use record::QuadRecord;

use numex_core::{InputError, NumericalFailure, Report, Status};

/// Report returned by every quadrature rule. The solution is the integral
/// estimate.
pub type QuadReport = Report<f64, QuadRecord>;

/// Resolution ceiling for the deterministic rules (segments).
pub(crate) const SEGMENT_CEILING: usize = 1_000_000;

/// Resolution ceiling for Monte Carlo (samples).
pub(crate) const SAMPLE_CEILING: usize = 10_000_000;

/// Runs the shared doubling loop for one quadrature rule.
///
/// `rule` maps a resolution to an estimate, returning `None` when any
/// sample is undefined or non-finite; `spaced` controls whether records
/// carry a grid spacing (the stochastic rule has none).
pub(crate) fn refine(
    method: &'static str,
    a: f64,
    b: f64,
    config: &Config,
    initial: usize,
    ceiling: usize,
    spaced: bool,
    mut rule: impl FnMut(usize) -> Option<f64>,
) -> QuadReport {
    if let Err(reason) = config.validate() {
        return reject(method, Status::Input(InputError::Config { reason }));
    }
    if !a.is_finite() || !b.is_finite() || a >= b {
        return reject(method, Status::Input(InputError::EmptyInterval { a, b }));
    }

    let mut n = initial;
    let mut previous: Option<f64> = None;
    let Some(mut current) = rule(n) else {
        return reject(method, Status::Failed(NumericalFailure::DivergentIntegral));
    };

    let mut trace = Vec::new();

    for iteration in 1..=config.max_refinements {
        let change = previous.map(|p| (current - p).abs());
        trace.push(QuadRecord {
            iteration,
            resolution: n,
            estimate: current,
            spacing: spaced.then(|| (b - a) / n as f64),
            change,
        });

        // The first pass has nothing to compare against.
        if let Some(delta) = change
            && delta < config.precision
        {
            return QuadReport::new(method, Status::Converged, Some(current), trace, Some(delta));
        }

        if !current.is_finite() {
            return QuadReport::new(
                method,
                Status::Failed(NumericalFailure::DivergentIntegral),
                None,
                trace,
                None,
            );
        }

        previous = Some(current);
        n *= 2;

        if n > ceiling {
            return QuadReport::new(
                method,
                Status::IterationLimit { limit: ceiling },
                Some(current),
                trace,
                change,
            );
        }

        current = match rule(n) {
            Some(value) => value,
            None => {
                return QuadReport::new(
                    method,
                    Status::Failed(NumericalFailure::DivergentIntegral),
                    None,
                    trace,
                    None,
                );
            }
        };
    }

    let change = previous.map(|p| (current - p).abs());
    QuadReport::new(
        method,
        Status::IterationLimit {
            limit: config.max_refinements,
        },
        Some(current),
        trace,
        change,
    )
}

fn reject(method: &'static str, status: Status) -> QuadReport {
    QuadReport::new(method, status, None, Vec::new(), None)
}
