mod config_error;

pub use config_error::ConfigError;

/// Result alias for the one fallible surface in the core:
/// configuration construction. Scoring itself never fails.
pub type FolioResult<T> = Result<T, ConfigError>;
