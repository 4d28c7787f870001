//! The decay law, as pure functions over an effective age.

use chrono::{DateTime, Utc};
use folio_core::config::DecayConfig;
use folio_core::constants::DEFAULT_AGE_DAYS;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Effective age in fractional days.
///
/// Prefers the category's detected activity timestamp, then the
/// profile's fetch time. With neither, assumes [`DEFAULT_AGE_DAYS`] —
/// an agent with no observable timestamps is not treated as fresh.
pub fn effective_days(
    last_activity: Option<DateTime<Utc>>,
    fetched_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> f64 {
    match last_activity.or(fetched_at) {
        Some(ts) => (now - ts).num_seconds().max(0) as f64 / SECONDS_PER_DAY,
        None => DEFAULT_AGE_DAYS,
    }
}

/// Decay multiplier for a given age.
///
/// ```text
/// days ≤ grace          → 1.0
/// days > grace          → 0.5 ^ ((days − grace) / half_life)
/// floored at            → 1 − max_decay/100
/// ```
pub fn multiplier(days_since_activity: f64, config: &DecayConfig) -> f64 {
    let grace = config.grace_period_days as f64;
    if days_since_activity <= grace {
        return 1.0;
    }

    let overage = days_since_activity - grace;
    let decayed = 0.5f64.powf(overage / config.half_life_days);
    decayed.max(1.0 - config.max_decay_percent / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn no_decay_within_grace_period() {
        let config = DecayConfig::new(14, 120.0, 40.0);
        assert_eq!(multiplier(0.0, &config), 1.0);
        assert_eq!(multiplier(14.0, &config), 1.0);
    }

    #[test]
    fn half_life_halves_past_grace() {
        let config = DecayConfig::new(3, 30.0, 90.0);
        let m = multiplier(33.0, &config);
        assert!((m - 0.5).abs() < 1e-9, "expected 0.5, got {m}");
    }

    #[test]
    fn floor_caps_total_decay() {
        let config = DecayConfig::new(3, 30.0, 60.0);
        // Very old: raw exponent would be far below the floor.
        let m = multiplier(10_000.0, &config);
        assert_eq!(m, 0.4);
    }

    #[test]
    fn effective_days_prefers_activity_then_fetch() {
        let now = Utc::now();
        let activity = now - Duration::days(5);
        let fetched = now - Duration::days(12);

        let days = effective_days(Some(activity), Some(fetched), now);
        assert!((days - 5.0).abs() < 1e-6);

        let days = effective_days(None, Some(fetched), now);
        assert!((days - 12.0).abs() < 1e-6);

        assert_eq!(effective_days(None, None, now), DEFAULT_AGE_DAYS);
    }

    #[test]
    fn future_timestamps_read_as_age_zero() {
        let now = Utc::now();
        let future = now + Duration::days(3);
        assert_eq!(effective_days(Some(future), None, now), 0.0);
    }
}
