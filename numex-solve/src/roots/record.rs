/// One root-finding iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RootRecord {
    /// 1-based iteration index.
    pub iteration: usize,
    /// The estimate this iteration worked from.
    pub x: f64,
    /// Function value at `x`.
    pub fx: f64,
    /// Estimated error: half-width for bisection, step size otherwise.
    pub error: f64,
    /// Method-specific state captured at this iteration.
    pub detail: RootDetail,
}

/// Method-specific fields of a [`RootRecord`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RootDetail {
    /// Bisection: the bracket this iteration halved.
    Bracket { left: f64, right: f64 },
    /// Newton: the finite-difference slope and the resulting step.
    Slope { derivative: f64, next: f64 },
    /// Secant: the next estimate produced by the secant line.
    Secant { next: f64 },
    /// Fixed-point: the image of the iteration map.
    Map { next: f64 },
}
