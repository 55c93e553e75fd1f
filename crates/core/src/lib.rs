//! Core traits and types for the Taproot root-finding engine.
//!
//! This crate defines the shared abstractions that the solver and reporting
//! crates build on:
//!
//! - [`RealFn`] — a scalar real-valued function of one real variable
//! - [`Polynomial`] — a real polynomial stored as descending coefficients
//! - [`Observer`] — receives solver events and optionally returns control
//!   actions

mod function;
mod observer;
mod polynomial;

pub use function::RealFn;
pub use observer::Observer;
pub use polynomial::{Polynomial, PolynomialError};
