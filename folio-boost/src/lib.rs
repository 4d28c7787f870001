//! # folio-boost
//!
//! Skills-based multiplicative boost. Self-declared capabilities in
//! the identity document amplify an existing composite score through
//! a tiered multiplier table, capped so the boost cannot be gamed
//! into more than 12%. Applied after decay and after composition,
//! to the already-rounded composite.

use folio_core::config::BoostConfig;
use folio_core::models::BoostOutcome;

/// Boost bands: (min skills, max skills, multiplier). First match wins.
pub const BOOST_TIERS: &[(u32, u32, f64)] = &[
    (0, 0, 1.00),
    (1, 2, 1.03),
    (3, 4, 1.05),
    (5, 7, 1.08),
    (8, 10, 1.10),
    (11, u32::MAX, 1.12),
];

/// Multiplier for a skill count, from the first matching band.
pub fn multiplier_for(skill_count: u32) -> f64 {
    for &(min, max, multiplier) in BOOST_TIERS {
        if (min..=max).contains(&skill_count) {
            return multiplier;
        }
    }
    // The bands cover all of u32; unreachable in practice.
    1.0
}

/// Apply the boost to a rounded composite score.
///
/// `boosted = min(round(composite × multiplier), 100)`. When disabled,
/// the composite passes through unchanged with multiplier 1.0 recorded.
pub fn apply(composite: u32, skill_count: u32, config: &BoostConfig) -> BoostOutcome {
    let multiplier = if config.enabled {
        multiplier_for(skill_count)
    } else {
        1.0
    };

    let boosted = ((composite as f64 * multiplier).round() as u32).min(100);

    BoostOutcome {
        raw_score: composite,
        skill_count,
        multiplier,
        boosted_score: boosted,
        points_gained: boosted.saturating_sub(composite),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_table_band_edges() {
        assert_eq!(multiplier_for(0), 1.00);
        assert_eq!(multiplier_for(1), 1.03);
        assert_eq!(multiplier_for(2), 1.03);
        assert_eq!(multiplier_for(3), 1.05);
        assert_eq!(multiplier_for(5), 1.08);
        assert_eq!(multiplier_for(7), 1.08);
        assert_eq!(multiplier_for(8), 1.10);
        assert_eq!(multiplier_for(10), 1.10);
        assert_eq!(multiplier_for(11), 1.12);
        assert_eq!(multiplier_for(u32::MAX), 1.12);
    }

    #[test]
    fn worked_example_53_with_5_skills_is_57() {
        let outcome = apply(53, 5, &BoostConfig::default());
        assert_eq!(outcome.multiplier, 1.08);
        assert_eq!(outcome.boosted_score, 57);
        assert_eq!(outcome.points_gained, 4);
    }

    #[test]
    fn boosted_score_caps_at_100() {
        let outcome = apply(97, 20, &BoostConfig::default());
        assert_eq!(outcome.boosted_score, 100);
    }

    #[test]
    fn disabled_boost_passes_through() {
        let config = BoostConfig { enabled: false };
        let outcome = apply(53, 9, &config);
        assert_eq!(outcome.boosted_score, 53);
        assert_eq!(outcome.multiplier, 1.0);
        assert_eq!(outcome.points_gained, 0);
    }

    #[test]
    fn zero_composite_stays_zero() {
        let outcome = apply(0, 11, &BoostConfig::default());
        assert_eq!(outcome.boosted_score, 0);
    }
}
