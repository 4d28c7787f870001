use folio_boost::{apply, multiplier_for};
use folio_core::config::BoostConfig;
use proptest::prelude::*;

proptest! {
    // ── Boost monotonicity in skill count ────────────────────────────────

    #[test]
    fn boosted_score_non_decreasing_in_skill_count(
        composite in 0u32..=100,
        skills in 0u32..50,
    ) {
        let config = BoostConfig::default();
        let lower = apply(composite, skills, &config).boosted_score;
        let higher = apply(composite, skills + 1, &config).boosted_score;
        prop_assert!(higher >= lower);
    }

    // ── Bounds ───────────────────────────────────────────────────────────

    #[test]
    fn boosted_score_within_composite_and_100(
        composite in 0u32..=100,
        skills in 0u32..1000,
    ) {
        let outcome = apply(composite, skills, &BoostConfig::default());
        prop_assert!(outcome.boosted_score >= composite);
        prop_assert!(outcome.boosted_score <= 100);
    }

    #[test]
    fn multiplier_always_in_band(skills in 0u32..u32::MAX) {
        let m = multiplier_for(skills);
        prop_assert!((1.0..=1.12).contains(&m));
    }
}
