use serde::{Deserialize, Serialize};

/// Result of applying time-based decay to one category score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayOutcome {
    pub raw_score: f64,
    pub decayed_score: f64,
    /// Effective age used by the formula, in (fractional) days.
    pub days_since_activity: f64,
    /// 100 × (1 − decayed/raw). Zero when raw is zero.
    pub decay_percent: f64,
    /// The multiplier that was applied, after the decay floor.
    pub multiplier: f64,
}

impl DecayOutcome {
    /// Pass-through outcome for when decay is disabled: decayed == raw.
    pub fn passthrough(raw_score: f64, days_since_activity: f64) -> Self {
        Self {
            raw_score,
            decayed_score: raw_score,
            days_since_activity,
            decay_percent: 0.0,
            multiplier: 1.0,
        }
    }
}
