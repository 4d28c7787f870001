//! Social category — X/Twitter presence.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use folio_core::{Category, CategoryScore, ProfileRecord, RawScore};

use crate::metric::MetricWeight;

/// 1 point per 100 followers, max 30.
pub const FOLLOWERS: MetricWeight = MetricWeight::new(0.01, 30.0);
/// Flat 10 points for a verified account.
pub const VERIFIED: MetricWeight = MetricWeight::new(10.0, 10.0);
/// 4 points per tweet/day, max 20 at 5/day.
pub const POSTING_FREQUENCY: MetricWeight = MetricWeight::new(4.0, 20.0);
/// 2.5 points per engagement percent, max 25 at 10%.
pub const ENGAGEMENT_RATE: MetricWeight = MetricWeight::new(2.5, 25.0);
/// 1 point per month of account age, max 15.
pub const ACCOUNT_AGE: MetricWeight = MetricWeight::new(1.0, 15.0);

/// Days per month when deriving account age from a creation date.
const DAYS_PER_MONTH: f64 = 30.0;

pub fn calculate(profile: &ProfileRecord, now: DateTime<Utc>) -> CategoryScore {
    let Some(signals) = profile.platform(Category::Social) else {
        return CategoryScore::empty(Category::Social);
    };

    // Account age from the creation date when present, else from an
    // explicit months field the fetch layer may have computed.
    let age_months = match signals.timestamp("account_created_at") {
        Some(created) => (now - created).num_seconds().max(0) as f64 / 86400.0 / DAYS_PER_MONTH,
        None => signals.count("account_age_months"),
    };

    let mut breakdown = BTreeMap::new();
    breakdown.insert(
        "followers".to_string(),
        FOLLOWERS.linear(signals.count("followers")),
    );
    breakdown.insert(
        "verified".to_string(),
        VERIFIED.binary(signals.flag("verified")),
    );
    breakdown.insert(
        "posting_frequency".to_string(),
        POSTING_FREQUENCY.linear(signals.count("tweets_per_day")),
    );
    breakdown.insert(
        "engagement_rate".to_string(),
        ENGAGEMENT_RATE.linear(signals.count("engagement_rate")),
    );
    breakdown.insert("account_age".to_string(), ACCOUNT_AGE.linear(age_months));

    let total: f64 = breakdown.values().sum();
    CategoryScore {
        category: Category::Social,
        raw: RawScore::new(total),
        breakdown,
        // The social input shape carries no activity timestamp; decay
        // falls back to the profile's fetch time.
        last_activity: None,
        skill_count: None,
    }
}
