/// One refinement pass of a quadrature rule.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuadRecord {
    /// 1-based refinement index.
    pub iteration: usize,
    /// Resolution used for this pass: segments for the deterministic
    /// rules, samples for Monte Carlo.
    pub resolution: usize,
    /// Integral estimate at this resolution.
    pub estimate: f64,
    /// Grid spacing `(b - a) / n`; `None` for the stochastic rule.
    pub spacing: Option<f64>,
    /// Absolute change against the previous estimate; `None` on the first
    /// pass, which has nothing to compare against.
    pub change: Option<f64>,
}
