//! Initial-value ODE integration: `y' = f(x, y)`, `y(x0) = y0`.
//!
//! Fixed-step explicit methods. Both integrators share one stepping loop
//! and differ only in how they advance `y` across a step; both return the
//! full trajectory, not just the final value.

pub mod euler;
pub mod rk4;

mod config;
mod record;
mod trajectory;

pub use config::Config;
pub use record::OdeRecord;
pub use trajectory::Trajectory;

use numex_core::{DivergenceError, InputError, Report, Status};

/// Report returned by both integrators. The solution is the full
/// trajectory, initial point included.
pub type OdeReport = Report<Trajectory, OdeRecord>;

/// Runs the shared fixed-step loop.
///
/// `advance` maps `(x, y)` to the next `y`, returning `None` when any
/// slope evaluation is undefined or non-finite.
pub(crate) fn integrate(
    method: &'static str,
    x0: f64,
    y0: f64,
    x_end: f64,
    config: &Config,
    mut advance: impl FnMut(f64, f64) -> Option<f64>,
) -> OdeReport {
    if !config.step.is_finite() || config.step <= 0.0 {
        return reject(method, Status::Input(InputError::NonPositiveStep { step: config.step }));
    }
    if !x0.is_finite() || !x_end.is_finite() || x0 >= x_end {
        return reject(method, Status::Input(InputError::EmptyInterval { a: x0, b: x_end }));
    }
    if !y0.is_finite() {
        return reject(method, Status::Input(InputError::NonFiniteSeed { value: y0 }));
    }

    let mut trajectory = Trajectory::with_capacity(config.max_steps + 1);
    trajectory.push(x0, y0);

    let mut trace = Vec::new();
    let mut x = x0;
    let mut y = y0;
    let mut step = 0usize;

    while x < x_end && step < config.max_steps {
        let Some(next) = advance(x, y) else {
            return OdeReport::new(
                method,
                Status::Diverged(DivergenceError::NonFinite { iteration: step + 1 }),
                Some(trajectory),
                trace,
                None,
            );
        };

        y = next;
        x += config.step;
        step += 1;

        trajectory.push(x, y);
        trace.push(OdeRecord { step, x, y });

        if !y.is_finite() {
            return OdeReport::new(
                method,
                Status::Diverged(DivergenceError::NonFinite { iteration: step }),
                Some(trajectory),
                trace,
                None,
            );
        }
    }

    let status = if x >= x_end {
        Status::Converged
    } else {
        Status::IterationLimit {
            limit: config.max_steps,
        }
    };
    OdeReport::new(method, status, Some(trajectory), trace, None)
}

fn reject(method: &'static str, status: Status) -> OdeReport {
    OdeReport::new(method, status, None, Vec::new(), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_step() {
        let config = Config {
            step: 0.0,
            ..Config::default()
        };
        let report = integrate("euler", 0.0, 1.0, 1.0, &config, |_, y| Some(y));
        assert!(matches!(
            report.status,
            Status::Input(InputError::NonPositiveStep { .. })
        ));
    }

    #[test]
    fn rejects_reversed_range() {
        let report = integrate("euler", 2.0, 1.0, 0.0, &Config::default(), |_, y| Some(y));
        assert!(matches!(
            report.status,
            Status::Input(InputError::EmptyInterval { .. })
        ));
    }

    #[test]
    fn step_cap_leaves_partial_trajectory() {
        let config = Config {
            step: 0.1,
            max_steps: 3,
        };
        let report = integrate("euler", 0.0, 1.0, 10.0, &config, |_, y| Some(y));

        assert!(matches!(report.status, Status::IterationLimit { limit: 3 }));
        let trajectory = report.solution.unwrap();
        assert_eq!(trajectory.len(), 4); // initial point + 3 steps
        assert_eq!(report.iterations, 3);
    }

    #[test]
    fn failed_slope_reports_divergence_with_partial_trajectory() {
        let mut calls = 0usize;
        let report = integrate("euler", 0.0, 1.0, 1.0, &Config::default(), |_, y| {
            calls += 1;
            if calls > 2 { None } else { Some(y) }
        });

        assert!(matches!(report.status, Status::Diverged(_)));
        let trajectory = report.solution.unwrap();
        assert_eq!(trajectory.len(), 3); // initial point + 2 good steps
    }
}
