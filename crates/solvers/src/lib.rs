//! Solvers for the Taproot root-finding engine.
//!
//! Finding a root is a two-phase pipeline:
//!
//! 1. [`search`] probes randomly for a [`Bracket`] (an interval whose
//!    endpoint values differ in sign), doubling its sampling range whenever
//!    an attempt budget is spent, up to a hard widening ceiling.
//! 2. [`bisection`] refines a bracket to a root estimate, logging every
//!    step in an append-only [`History`] for diagnostic consumption.
//!
//! Both phases run to completion on the calling thread; each invocation
//! owns its own bracket and history, so no state is shared across calls.
//!
//! [`Bracket`]: bracket::Bracket
//! [`History`]: bisection::History

pub mod bisection;
pub mod bracket;
pub mod search;
