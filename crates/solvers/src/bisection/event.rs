use super::IterationRecord;

/// Control actions supported by the bisection refiner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the refiner early and return the estimate from the current
    /// step.
    StopEarly,
}

/// Iteration event emitted by the bisection refiner.
#[derive(Debug)]
pub struct Event<'a> {
    /// Iteration counter (1-based within the refinement loop).
    pub iter: usize,
    /// The record appended by this iteration.
    pub record: &'a IterationRecord,
}
