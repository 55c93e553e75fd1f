/// Configuration for the randomized bracket search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Probe attempts before the sampling range widens.
    pub attempts_per_range: usize,
    /// Half-width of the initial sampling range.
    pub initial_range: f64,
    /// How many times the range may double before the search gives up.
    pub max_widenings: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attempts_per_range: 1000,
            initial_range: 10.0,
            max_widenings: 16,
        }
    }
}

impl Config {
    /// Validates the search parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the attempt budget is zero or the initial range
    /// is non-finite or non-positive.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.attempts_per_range == 0 {
            return Err("attempts_per_range must be at least 1");
        }
        if !self.initial_range.is_finite() || self.initial_range <= 0.0 {
            return Err("initial_range must be finite and positive");
        }
        Ok(())
    }
}
