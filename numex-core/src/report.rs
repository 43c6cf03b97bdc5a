use crate::status::Status;

/// The canonical record returned by every `solve` call.
///
/// One schema serves all four solver families; only the shape of the
/// solution and the per-iteration record vary. A report is created fresh
/// per call and owned exclusively by the caller afterwards.
///
/// Invariants:
///
/// - `iterations == trace.len()`, including methods that converge on the
///   initial data without iterating (both are then zero).
/// - `trace.len()` never exceeds the configured iteration cap.
/// - A [`Status::Converged`] report carries a solution, and every numeric
///   field in it is finite.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report<S, R> {
    /// Stable method identifier, e.g. `"bisection"`.
    pub method: &'static str,
    /// Outcome of the solve.
    pub status: Status,
    /// Human-readable rendering of the status.
    pub message: String,
    /// The solution, when one can be reported. Soft outcomes such as an
    /// exhausted iteration cap still carry the last iterate.
    pub solution: Option<S>,
    /// Append-only per-iteration records, in order.
    pub trace: Vec<R>,
    /// Number of iterations performed; always equal to `trace.len()`.
    pub iterations: usize,
    /// Final numeric diagnostic (residual or estimated error), when
    /// meaningful.
    pub residual: Option<f64>,
}

impl<S, R> Report<S, R> {
    /// Assembles a report, deriving `message` from the status and the
    /// iteration count from the trace.
    #[must_use]
    pub fn new(
        method: &'static str,
        status: Status,
        solution: Option<S>,
        trace: Vec<R>,
        residual: Option<f64>,
    ) -> Self {
        let message = status.to_string();
        let iterations = trace.len();
        Self {
            method,
            status,
            message,
            solution,
            trace,
            iterations,
            residual,
        }
    }

    /// Whether the solve converged.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status.converged()
    }

    /// Maps every trace record, keeping all other fields intact.
    ///
    /// Lets callers that aggregate reports from methods with different
    /// record types (e.g. side-by-side comparisons) unify them.
    #[must_use]
    pub fn map_trace<T>(self, f: impl FnMut(R) -> T) -> Report<S, T> {
        Report {
            method: self.method,
            status: self.status,
            message: self.message,
            solution: self.solution,
            trace: self.trace.into_iter().map(f).collect(),
            iterations: self.iterations,
            residual: self.residual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterations_track_trace_length() {
        let report: Report<f64, u32> =
            Report::new("newton", Status::Converged, Some(2.0), vec![1, 2, 3], Some(1e-9));
        assert_eq!(report.iterations, 3);
        assert!(report.converged());
    }

    #[test]
    fn zero_iteration_convergence() {
        let report: Report<f64, u32> =
            Report::new("bisection", Status::Converged, Some(0.0), Vec::new(), Some(0.0));
        assert_eq!(report.iterations, 0);
        assert!(report.trace.is_empty());
    }

    #[test]
    fn map_trace_preserves_everything_else() {
        let report: Report<f64, u32> =
            Report::new("jacobi", Status::IterationLimit { limit: 5 }, Some(1.0), vec![7], None);
        let mapped = report.map_trace(|r| r as f64);
        assert_eq!(mapped.method, "jacobi");
        assert_eq!(mapped.iterations, 1);
        assert_eq!(mapped.trace, vec![7.0]);
        assert!(!mapped.converged());
    }
}
