//! # folio-compose
//!
//! The score composer: runs the six category calculators, applies
//! per-category decay, folds the results into a weighted composite,
//! applies the skills boost, and packages the full audit record.
//! Composition never fails — an agent with zero data on every
//! platform still yields a record (composite 0, lowest tier).

pub mod composer;

pub use composer::{weighted_composite, Composer};
