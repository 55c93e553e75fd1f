use thiserror::Error;

use crate::bracket::BracketError;

/// Errors that can occur during bisection refinement.
///
/// Both variants are precondition failures detected before the first
/// iteration; neither leaves any iteration state behind.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
}
