//! Explicit injected configuration. Nothing here is read from ambient
//! or global state — the composer receives its config at construction,
//! keeping every scoring call a pure function of its inputs.

mod boost_config;
mod decay_config;
mod scoring_config;

pub use boost_config::BoostConfig;
pub use decay_config::{DecayConfig, DecayConfigSet};
pub use scoring_config::ScoringConfig;
