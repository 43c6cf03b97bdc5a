use nalgebra::{DMatrix, DVector};

/// One elimination step of the direct solver.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EliminationRecord {
    /// 1-based elimination step (one per pivot column).
    pub step: usize,
    /// The augmented matrix after this column was eliminated.
    pub augmented: DMatrix<f64>,
    /// The row chosen as pivot for this column before swapping.
    pub pivot_row: usize,
}

/// Either trace shape, for callers that aggregate reports from the direct
/// and iterative solvers side by side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LinearRecord {
    Elimination(EliminationRecord),
    Sweep(SweepRecord),
}

/// One sweep of an iterative solver.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepRecord {
    /// 1-based sweep index.
    pub iteration: usize,
    /// The iterate after this sweep.
    pub x: DVector<f64>,
    /// Residual `‖Ax - b‖_inf` at this iterate.
    pub residual: f64,
    /// Increment norm `‖x_new - x_old‖_inf` for this sweep.
    pub delta: f64,
}
