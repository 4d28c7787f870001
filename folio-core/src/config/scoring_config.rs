use serde::{Deserialize, Serialize};

use super::boost_config::BoostConfig;
use super::decay_config::DecayConfigSet;
use crate::errors::FolioResult;

/// Top-level scoring configuration, injected into the composer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub decay: DecayConfigSet,
    pub boost: BoostConfig,
    /// When false, raw category scores pass through undecayed.
    pub apply_decay: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            decay: DecayConfigSet::default(),
            boost: BoostConfig::default(),
            apply_decay: true,
        }
    }
}

impl ScoringConfig {
    /// Validate every embedded decay configuration. Fails fast — this
    /// runs at composer construction, before any scoring call.
    pub fn validate(&self) -> FolioResult<()> {
        self.decay.validate()
    }

    /// Parse and validate a TOML config document.
    pub fn from_toml_str(raw: &str) -> FolioResult<Self> {
        let config: ScoringConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn without_decay(mut self) -> Self {
        self.apply_decay = false;
        self
    }

    pub fn without_boost(mut self) -> Self {
        self.boost.enabled = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(ScoringConfig::default().validate().is_ok());
        assert!(ScoringConfig::default().apply_decay);
        assert!(ScoringConfig::default().boost.enabled);
    }

    #[test]
    fn toml_round_trip_with_overrides() {
        let raw = r#"
            apply_decay = true

            [boost]
            enabled = false

            [decay.social]
            grace_period_days = 3
            half_life_days = 30.0
            max_decay_percent = 60.0
        "#;
        let config = ScoringConfig::from_toml_str(raw).unwrap();
        assert!(!config.boost.enabled);
        assert_eq!(config.decay.social.grace_period_days, 3);
        assert_eq!(config.decay.social.half_life_days, 30.0);
        // Unspecified categories keep their defaults.
        assert_eq!(config.decay.code.half_life_days, 120.0);
    }

    #[test]
    fn invalid_toml_config_fails_fast() {
        let raw = r#"
            [decay.code]
            half_life_days = -1.0
        "#;
        assert!(ScoringConfig::from_toml_str(raw).is_err());
    }
}
