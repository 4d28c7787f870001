use serde::{Deserialize, Serialize};

/// Result of applying the skills boost to a composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostOutcome {
    /// Composite before the boost (already rounded).
    pub raw_score: u32,
    /// Self-declared skill count from the identity category.
    pub skill_count: u32,
    /// Multiplier from the boost tier table. 1.0 when disabled.
    pub multiplier: f64,
    /// min(round(raw × multiplier), 100).
    pub boosted_score: u32,
    pub points_gained: u32,
}
