use thiserror::Error;

/// Errors that can occur during bracket search.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("no sign change found after {attempts} attempts (final range {final_range})")]
    Exhausted { attempts: usize, final_range: f64 },
}
