//! Economic category — verified marketplace activity.

use std::collections::BTreeMap;

use folio_core::{Category, CategoryScore, ProfileRecord, RawScore};

use crate::metric::MetricWeight;

/// Flat 20 points for having a marketplace profile.
pub const HAS_PROFILE: MetricWeight = MetricWeight::new(20.0, 20.0);
/// 5 points per listed service, max 20.
pub const SERVICES: MetricWeight = MetricWeight::new(5.0, 20.0);
/// 4 points per completed job, max 40.
pub const JOBS_COMPLETED: MetricWeight = MetricWeight::new(4.0, 40.0);
/// 0.15 points per platform-native reputation point, max 15.
pub const REPUTATION: MetricWeight = MetricWeight::new(0.15, 15.0);
/// 1 point per $1000 earned, max 5 at $5000.
pub const EARNINGS: MetricWeight = MetricWeight::new(0.001, 5.0);

pub fn calculate(profile: &ProfileRecord) -> CategoryScore {
    let Some(signals) = profile.platform(Category::Economic) else {
        return CategoryScore::empty(Category::Economic);
    };

    let mut breakdown = BTreeMap::new();
    breakdown.insert(
        "has_profile".to_string(),
        HAS_PROFILE.binary(signals.flag("profile_exists")),
    );
    breakdown.insert(
        "services_listed".to_string(),
        SERVICES.linear(signals.count("services_count")),
    );
    breakdown.insert(
        "jobs_completed".to_string(),
        JOBS_COMPLETED.linear(signals.count("jobs_completed")),
    );
    breakdown.insert(
        "reputation".to_string(),
        REPUTATION.linear(signals.count("reputation_score")),
    );
    breakdown.insert(
        "earnings".to_string(),
        EARNINGS.linear(signals.count("total_earnings")),
    );

    let total: f64 = breakdown.values().sum();
    CategoryScore {
        category: Category::Economic,
        raw: RawScore::new(total),
        breakdown,
        last_activity: signals.timestamp("last_job_at"),
        skill_count: None,
    }
}
