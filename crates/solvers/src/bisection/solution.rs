use super::History;

/// Indicates how the refiner finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,

    /// Spent the iteration budget. The result is the estimate from the
    /// final step, a defined terminal state rather than an error.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Root estimate: the midpoint of the final iteration.
    pub root: f64,

    /// Function value at the root estimate.
    pub residual: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// The frozen iteration log, one record per iteration performed.
    pub history: History,
}
