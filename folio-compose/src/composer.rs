use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use folio_core::config::ScoringConfig;
use folio_core::constants::TOTAL_COMPOSITE_WEIGHT;
use folio_core::models::{CategoryBreakdown, DataSources, DecayOutcome};
use folio_core::{Category, FolioResult, ProfileRecord, ScoreRecord, Tier};
use folio_decay::DecayEngine;

/// Weighted composite over effective (post-decay) category scores.
///
/// The denominator is always the full weight total — a category with
/// no data contributes zero to the numerator but still divides, so
/// missing data is penalized rather than ignored. Rounded to the
/// integer the boost is applied to.
pub fn weighted_composite<I>(scores: I) -> u32
where
    I: IntoIterator<Item = (Category, f64)>,
{
    let total: f64 = scores
        .into_iter()
        .map(|(category, score)| score * category.weight())
        .sum();
    (total / TOTAL_COMPOSITE_WEIGHT).round() as u32
}

/// Orchestrates the full scoring pipeline for one profile snapshot.
///
/// Holds only immutable configuration; every `compose` call is a pure
/// function of the profile and `now`, so re-scoring an agent is simply
/// another call with a newer snapshot.
#[derive(Debug, Clone)]
pub struct Composer {
    config: ScoringConfig,
    decay: DecayEngine,
}

impl Composer {
    /// Build a composer, validating the configuration up front. This
    /// is the only fallible step in the pipeline.
    pub fn new(config: ScoringConfig) -> FolioResult<Self> {
        config.validate()?;
        let decay = DecayEngine::new(config.decay.clone())?;
        Ok(Self { config, decay })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a profile snapshot into a complete record.
    pub fn compose(&self, profile: &ProfileRecord, now: DateTime<Utc>) -> ScoreRecord {
        let mut breakdown: BTreeMap<Category, CategoryBreakdown> = BTreeMap::new();
        let mut decay_details: BTreeMap<Category, DecayOutcome> = BTreeMap::new();
        let mut sources = DataSources::default();
        let mut effective: Vec<(Category, f64)> = Vec::with_capacity(Category::ALL.len());
        let mut skill_count = 0u32;

        for category in Category::ALL {
            let score = folio_categories::calculate(category, profile, now);
            if category == Category::Identity {
                skill_count = score.skill_count.unwrap_or(0);
            }

            let raw = score.raw.value();
            let (effective_score, decayed) = if self.config.apply_decay {
                let outcome =
                    self.decay
                        .apply(category, raw, score.last_activity, profile.fetched_at, now);
                let decayed = outcome.decayed_score;
                decay_details.insert(category, outcome);
                (decayed, Some(decayed))
            } else {
                (raw, None)
            };

            tracing::debug!(
                handle = %profile.handle,
                %category,
                raw,
                effective = effective_score,
                "scored category"
            );

            let key = category.platform_key().to_string();
            if profile.has_data(category) {
                sources.succeeded.push(key);
            } else {
                sources.failed.push(key);
            }

            breakdown.insert(
                category,
                CategoryBreakdown {
                    raw,
                    decayed,
                    weight: category.weight(),
                    weighted: effective_score * category.weight(),
                    details: score.breakdown,
                },
            );
            effective.push((category, effective_score));
        }

        let composite = weighted_composite(effective);
        let boost = folio_boost::apply(composite, skill_count, &self.config.boost);
        let final_score = boost.boosted_score;
        let tier = Tier::from_score(final_score);

        tracing::debug!(
            handle = %profile.handle,
            composite,
            final_score,
            %tier,
            "composed score"
        );

        ScoreRecord {
            handle: profile.handle.clone(),
            score: final_score,
            tier,
            generated_at: now,
            breakdown,
            skills_boost: Some(boost),
            decay_details: self.config.apply_decay.then_some(decay_details),
            data_sources: sources,
        }
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self {
            config: ScoringConfig::default(),
            decay: DecayEngine::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_denominator_is_always_full_weight() {
        // Five categories at 100 and one absent: 500/7, not 500/6.
        let scores = [
            (Category::Code, 100.0),
            (Category::Content, 100.0),
            (Category::Social, 100.0),
            (Category::Community, 100.0),
            (Category::Economic, 100.0),
            (Category::Identity, 0.0),
        ];
        assert_eq!(weighted_composite(scores), 71);
    }

    #[test]
    fn worked_example_composite_is_53() {
        let scores = [
            (Category::Code, 60.0),
            (Category::Content, 45.0),
            (Category::Social, 30.0),
            (Category::Identity, 85.0),
            (Category::Community, 40.0),
            (Category::Economic, 25.0),
        ];
        // (60 + 45 + 30 + 170 + 40 + 25) / 7 = 370/7 ≈ 52.86 → 53.
        assert_eq!(weighted_composite(scores), 53);
    }
}
