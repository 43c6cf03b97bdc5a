/// One integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OdeRecord {
    /// 1-based step index.
    pub step: usize,
    /// Abscissa after the step.
    pub x: f64,
    /// Solution estimate after the step.
    pub y: f64,
}
