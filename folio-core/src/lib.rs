//! # folio-core
//!
//! Foundation crate for the folio reputation scoring system.
//! Defines profile and score records, the category/tier taxonomy,
//! configuration, errors, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod profile;
pub mod taxonomy;

// Re-export the most commonly used types at the crate root.
pub use config::ScoringConfig;
pub use errors::{ConfigError, FolioResult};
pub use models::{CategoryScore, RawScore, ScoreRecord};
pub use profile::{PlatformSignals, ProfileRecord};
pub use taxonomy::{Category, Tier};
