use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, FolioResult};
use crate::taxonomy::Category;

/// Decay law for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Days after last activity during which no decay applies.
    pub grace_period_days: u32,
    /// Days past the grace period for the score to fall to 50% of raw.
    pub half_life_days: f64,
    /// Floor: total decay never exceeds this percentage of the raw score.
    pub max_decay_percent: f64,
}

impl DecayConfig {
    pub const fn new(grace_period_days: u32, half_life_days: f64, max_decay_percent: f64) -> Self {
        Self {
            grace_period_days,
            half_life_days,
            max_decay_percent,
        }
    }

    /// Invariants: half-life > 0, max decay within [0, 100].
    pub fn validate(&self, category: Category) -> FolioResult<()> {
        if self.half_life_days <= 0.0 || !self.half_life_days.is_finite() {
            return Err(ConfigError::NonPositiveHalfLife {
                category,
                half_life_days: self.half_life_days,
            });
        }
        if !(0.0..=100.0).contains(&self.max_decay_percent) {
            return Err(ConfigError::MaxDecayOutOfRange {
                category,
                value: self.max_decay_percent,
            });
        }
        Ok(())
    }
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self::new(7, 90.0, 50.0)
    }
}

/// One decay configuration per category.
///
/// Defaults reflect how quickly each signal goes stale: social presence
/// decays fastest, a self-declared identity barely decays at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfigSet {
    pub code: DecayConfig,
    pub content: DecayConfig,
    pub social: DecayConfig,
    pub identity: DecayConfig,
    pub community: DecayConfig,
    pub economic: DecayConfig,
}

impl DecayConfigSet {
    pub fn get(&self, category: Category) -> &DecayConfig {
        match category {
            Category::Code => &self.code,
            Category::Content => &self.content,
            Category::Social => &self.social,
            Category::Identity => &self.identity,
            Category::Community => &self.community,
            Category::Economic => &self.economic,
        }
    }

    pub fn validate(&self) -> FolioResult<()> {
        for category in Category::ALL {
            self.get(category).validate(category)?;
        }
        Ok(())
    }
}

impl Default for DecayConfigSet {
    fn default() -> Self {
        Self {
            code: DecayConfig::new(14, 120.0, 40.0),
            content: DecayConfig::new(7, 60.0, 50.0),
            social: DecayConfig::new(3, 30.0, 60.0),
            identity: DecayConfig::new(30, 365.0, 20.0),
            community: DecayConfig::new(7, 90.0, 50.0),
            economic: DecayConfig::new(14, 180.0, 30.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(DecayConfigSet::default().validate().is_ok());
    }

    #[test]
    fn non_positive_half_life_is_rejected() {
        let config = DecayConfig::new(7, 0.0, 50.0);
        assert!(matches!(
            config.validate(Category::Code),
            Err(ConfigError::NonPositiveHalfLife { .. })
        ));
    }

    #[test]
    fn out_of_range_max_decay_is_rejected() {
        let config = DecayConfig::new(7, 30.0, 120.0);
        assert!(matches!(
            config.validate(Category::Social),
            Err(ConfigError::MaxDecayOutOfRange { .. })
        ));
    }
}
