use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::boost_outcome::BoostOutcome;
use super::decay_outcome::DecayOutcome;
use crate::taxonomy::{Category, Tier};

/// One category's contribution to the composite, with its audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Sub-score before decay.
    pub raw: f64,
    /// Sub-score after decay. Absent when decay was disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decayed: Option<f64>,
    pub weight: f64,
    /// Effective score × weight — the term that entered the composite.
    pub weighted: f64,
    /// Metric name → points awarded.
    pub details: BTreeMap<String, f64>,
}

/// Which platforms produced data for this run and which did not.
/// A failed source still counts in the composite denominator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSources {
    pub succeeded: Vec<String>,
    pub failed: Vec<String>,
}

/// The final score record: composite, tier, and the full audit trail.
///
/// Purely derived data — recomputed fresh on every scoring run. The
/// core never persists it; storage belongs to an external collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub handle: String,
    /// Final composite, post-decay and post-boost, 0–100.
    pub score: u32,
    pub tier: Tier,
    pub generated_at: DateTime<Utc>,
    pub breakdown: BTreeMap<Category, CategoryBreakdown>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills_boost: Option<BoostOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decay_details: Option<BTreeMap<Category, DecayOutcome>>,
    pub data_sources: DataSources,
}
