use chrono::{DateTime, Utc};
use folio_core::config::DecayConfigSet;
use folio_core::models::DecayOutcome;
use folio_core::{Category, FolioResult};

use crate::formula;

/// Decay engine holding one validated decay configuration per category.
#[derive(Debug, Clone)]
pub struct DecayEngine {
    configs: DecayConfigSet,
}

impl DecayEngine {
    /// Create an engine from a config set, validating it up front.
    pub fn new(configs: DecayConfigSet) -> FolioResult<Self> {
        configs.validate()?;
        Ok(Self { configs })
    }

    pub fn configs(&self) -> &DecayConfigSet {
        &self.configs
    }

    /// Apply the category's decay law to a raw sub-score.
    ///
    /// `last_activity` is the timestamp detected in the category's own
    /// signals; `fetched_at` is the profile-level fallback.
    pub fn apply(
        &self,
        category: Category,
        raw_score: f64,
        last_activity: Option<DateTime<Utc>>,
        fetched_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> DecayOutcome {
        let config = self.configs.get(category);
        let days = formula::effective_days(last_activity, fetched_at, now);
        let multiplier = formula::multiplier(days, config);
        let decayed_score = raw_score * multiplier;

        let decay_percent = if raw_score > 0.0 {
            100.0 * (1.0 - decayed_score / raw_score)
        } else {
            0.0
        };

        tracing::trace!(
            %category,
            raw_score,
            decayed_score,
            days_since_activity = days,
            multiplier,
            "applied decay"
        );

        DecayOutcome {
            raw_score,
            decayed_score,
            days_since_activity: days,
            decay_percent,
            multiplier,
        }
    }

    /// Pass-through outcome for presenting undecayed scores. The
    /// effective age is still reported for the audit trail.
    pub fn passthrough(
        &self,
        raw_score: f64,
        last_activity: Option<DateTime<Utc>>,
        fetched_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> DecayOutcome {
        let days = formula::effective_days(last_activity, fetched_at, now);
        DecayOutcome::passthrough(raw_score, days)
    }
}

impl Default for DecayEngine {
    fn default() -> Self {
        // The built-in config set is known-valid.
        Self {
            configs: DecayConfigSet::default(),
        }
    }
}
