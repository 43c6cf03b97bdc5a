/// A discrete solution trajectory: paired `x` and `y` samples, starting at
/// the initial condition.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trajectory {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Trajectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    /// Appends a point to the trajectory.
    pub fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    /// Number of stored points, the initial condition included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The last abscissa, if any point has been stored.
    #[must_use]
    pub fn final_x(&self) -> Option<f64> {
        self.x.last().copied()
    }

    /// The last solution value, if any point has been stored.
    #[must_use]
    pub fn final_y(&self) -> Option<f64> {
        self.y.last().copied()
    }
}
