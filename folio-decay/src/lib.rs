//! # folio-decay
//!
//! Time-based score decay. Each category carries its own decay law:
//! a grace period during which no decay applies, an exponential
//! half-life past it, and a floor capping the total loss. Pure and
//! deterministic — the caller supplies `now`.

pub mod engine;
pub mod formula;

pub use engine::DecayEngine;
