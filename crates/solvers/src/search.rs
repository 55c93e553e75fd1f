//! Randomized search for a sign-changing bracket.
//!
//! The search probes a symmetric range `[-R, R]` with random endpoint
//! pairs. Whenever an attempt budget is spent without finding a sign
//! change, `R` doubles and the budget resets, so roots far from the origin
//! are still reachable. The first qualifying pair wins; no attempt is made
//! to optimize bracket width.
//!
//! Widening is capped: a function with no real root (for example
//! `x^2 + 1`) would otherwise keep every probe on the same sign forever,
//! so the search fails with [`Error::Exhausted`] once the ceiling is hit.

mod config;
mod error;

pub use config::Config;
pub use error::Error;

use rand::{Rng, SeedableRng, rngs::StdRng};

use taproot_core::RealFn;

use crate::bracket::Bracket;

/// Searches for a bracket using the provided random source.
///
/// Each attempt draws `a` uniformly from `[-R, R]` and `b` uniformly from
/// `[a, a + R/5]`, where `R` starts at the configured initial range and
/// doubles after every spent attempt budget. Callers that need
/// reproducible draws pass a seeded generator; [`search_from_entropy`]
/// covers the common case.
///
/// The search is inherently randomized: re-running it on the same function
/// with a fresh random source can return a different bracket. Every
/// returned bracket satisfies `fa * fb < 0`.
///
/// # Errors
///
/// Returns an error if the config is invalid, or if the widening ceiling
/// is reached without finding a sign change.
pub fn search<F, R>(f: &F, config: &Config, rng: &mut R) -> Result<Bracket, Error>
where
    F: RealFn,
    R: Rng + ?Sized,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let mut range = config.initial_range;
    let mut attempts = 0;
    let mut widenings = 0;

    loop {
        for _ in 0..config.attempts_per_range {
            attempts += 1;

            let a = rng.random_range(-range..=range);
            let b = rng.random_range(a..=a + range / 5.0);

            let candidate = Bracket::from_endpoints(f, a, b);
            if candidate.has_sign_change() {
                return Ok(candidate);
            }
        }

        if widenings == config.max_widenings {
            return Err(Error::Exhausted {
                attempts,
                final_range: range,
            });
        }

        widenings += 1;
        range *= 2.0;
    }
}

/// Searches for a bracket using the thread-local random source.
///
/// # Errors
///
/// Returns an error if the config is invalid, or if the widening ceiling
/// is reached without finding a sign change.
pub fn search_from_entropy<F>(f: &F, config: &Config) -> Result<Bracket, Error>
where
    F: RealFn,
{
    search(f, config, &mut rand::rng())
}

/// Searches for a bracket using a random source seeded with `seed`.
///
/// Reproducible: the same function, config, and seed always return the
/// same bracket.
///
/// # Errors
///
/// Returns an error if the config is invalid, or if the widening ceiling
/// is reached without finding a sign change.
pub fn search_seeded<F>(f: &F, config: &Config, seed: u64) -> Result<Bracket, Error>
where
    F: RealFn,
{
    search(f, config, &mut StdRng::seed_from_u64(seed))
}
