//! Diagnostic summaries for Taproot root-finding runs.
//!
//! A [`Summary`] turns a polynomial and the iteration history of a
//! bisection run into the forms downstream consumers want: the rendered
//! polynomial, the four per-iteration [`Series`], and a fixed-width table
//! via [`Display`](std::fmt::Display). External plotters consume the
//! series directly; nothing here mutates its inputs or performs I/O.

mod summary;

pub use summary::{Series, Summary};
