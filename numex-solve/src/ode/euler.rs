//! Explicit (forward) Euler integration.

use numex_core::OdeFunction;

use super::{integrate, Config, OdeReport};

const METHOD: &str = "euler";

/// Integrates `y' = f(x, y)` from `(x0, y0)` to `x_end` with forward
/// Euler: `y += h * f(x, y)`.
#[must_use]
pub fn solve(f: &impl OdeFunction, x0: f64, y0: f64, x_end: f64, config: &Config) -> OdeReport {
    let h = config.step;
    integrate(METHOD, x0, y0, x_end, config, |x, y| {
        let k = f.sample(x, y)?;
        Some(y + h * k)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use numex_core::Status;

    #[test]
    fn integrates_exponential_growth() {
        // y' = y, y(0) = 1 to x = 1: exact value is e, Euler with h = 0.01
        // lands within first-order error.
        let rhs = |_: f64, y: f64| y;
        let config = Config {
            step: 0.01,
            max_steps: 1000,
        };
        let report = solve(&rhs, 0.0, 1.0, 1.0, &config);

        assert!(report.converged());
        let trajectory = report.solution.unwrap();
        assert_eq!(trajectory.len(), 101);
        assert_relative_eq!(trajectory.final_y().unwrap(), std::f64::consts::E, epsilon = 2e-2);
    }

    #[test]
    fn exact_for_constant_slope() {
        let rhs = |_: f64, _: f64| 2.0;
        let config = Config {
            step: 0.25,
            max_steps: 100,
        };
        let report = solve(&rhs, 0.0, 0.0, 1.0, &config);

        assert!(report.converged());
        let trajectory = report.solution.unwrap();
        assert_eq!(trajectory.len(), 5);
        assert_relative_eq!(trajectory.final_y().unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn divergence_is_detected() {
        // y' = y^2 from y(0) = 1 blows up at x = 1; a large step pushes the
        // iterate past double range quickly.
        let rhs = |_: f64, y: f64| y * y;
        let config = Config {
            step: 0.9,
            max_steps: 1000,
        };
        let report = solve(&rhs, 0.0, 1e150, 900.0, &config);

        assert!(!report.converged());
        assert!(matches!(report.status, Status::Diverged(_)));
    }

    #[test]
    fn trace_matches_trajectory_tail() {
        let rhs = |x: f64, _: f64| x;
        let report = solve(&rhs, 0.0, 0.0, 0.5, &Config::default());

        let trajectory = report.solution.as_ref().unwrap();
        assert_eq!(report.trace.len() + 1, trajectory.len());
        for record in &report.trace {
            assert_relative_eq!(trajectory.x[record.step], record.x);
            assert_relative_eq!(trajectory.y[record.step], record.y);
        }
    }
}
