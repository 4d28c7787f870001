use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::signals::PlatformSignals;
use crate::taxonomy::Category;

/// Normalized per-agent input data assembled from all platforms.
///
/// Owned by the caller (the fetch layer) and read-only to the scoring
/// core. An absent platform key means "no data available for this
/// platform" — a first-class condition, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Opaque agent identifier. Not validated by the core.
    pub handle: String,
    /// When the fetch layer collected this snapshot. Used as the
    /// decay fallback when a category exposes no activity timestamp.
    #[serde(default)]
    pub fetched_at: Option<DateTime<Utc>>,
    /// Platform key → platform-specific signals.
    #[serde(default)]
    pub platforms: BTreeMap<String, PlatformSignals>,
}

impl ProfileRecord {
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            fetched_at: None,
            platforms: BTreeMap::new(),
        }
    }

    pub fn with_fetched_at(mut self, fetched_at: DateTime<Utc>) -> Self {
        self.fetched_at = Some(fetched_at);
        self
    }

    pub fn with_platform(mut self, key: &str, signals: PlatformSignals) -> Self {
        self.platforms.insert(key.to_string(), signals);
        self
    }

    /// The signals feeding a category, if any were fetched.
    pub fn platform(&self, category: Category) -> Option<&PlatformSignals> {
        self.platforms.get(category.platform_key())
    }

    /// Whether the category's platform was fetched and carries fields.
    /// An empty sub-map counts as a failed source.
    pub fn has_data(&self, category: Category) -> bool {
        self.platform(category).is_some_and(|s| !s.is_empty())
    }
}
