/// Configuration for the bisection refiner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum number of refinement iterations.
    pub max_iters: usize,
    /// Convergence threshold on the midpoint residual magnitude.
    pub residual_tol: f64,
    /// Convergence threshold on the bracket half-width.
    pub width_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            residual_tol: 1e-6,
            width_tol: 1e-6,
        }
    }
}

impl Config {
    /// Validates the refiner parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the iteration budget is zero or a tolerance is
    /// negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.max_iters == 0 {
            return Err("max_iters must be at least 1");
        }
        if !self.residual_tol.is_finite() || self.residual_tol < 0.0 {
            return Err("residual_tol must be finite and non-negative");
        }
        if !self.width_tol.is_finite() || self.width_tol < 0.0 {
            return Err("width_tol must be finite and non-negative");
        }
        Ok(())
    }
}
