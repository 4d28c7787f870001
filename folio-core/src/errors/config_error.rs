use crate::taxonomy::Category;

/// Configuration validation errors.
///
/// These surface loudly at construction time, before any scoring call:
/// an invalid decay configuration is a programming mistake, not an
/// external-data gap.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("non-positive half-life {half_life_days} for category {category}")]
    NonPositiveHalfLife {
        category: Category,
        half_life_days: f64,
    },

    #[error("max decay percent {value} out of range [0, 100] for category {category}")]
    MaxDecayOutOfRange { category: Category, value: f64 },

    #[error("invalid config document: {message}")]
    Parse { message: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}
