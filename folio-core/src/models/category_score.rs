use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::raw_score::RawScore;
use crate::taxonomy::Category;

/// Output of one category calculator: the bounded sub-score plus the
/// per-metric breakdown that makes the number auditable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    /// Sub-score, clamped to [0, 100].
    pub raw: RawScore,
    /// Metric name → points awarded.
    pub breakdown: BTreeMap<String, f64>,
    /// Most recent activity detected in this category's signals.
    /// Feeds the decay engine; `None` triggers its fallback chain.
    #[serde(default)]
    pub last_activity: Option<DateTime<Utc>>,
    /// Number of self-declared skills. Set only by the identity
    /// calculator; carried first-class so the skills boost never has
    /// to reverse-derive the count from breakdown points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_count: Option<u32>,
}

impl CategoryScore {
    /// Zero score for a category with no fetched data.
    pub fn empty(category: Category) -> Self {
        Self {
            category,
            raw: RawScore::ZERO,
            breakdown: BTreeMap::new(),
            last_activity: None,
            skill_count: None,
        }
    }
}
