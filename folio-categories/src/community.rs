//! Community category — contributed skills and ecosystem PRs.
//!
//! Point values follow the methodology document (15/skill, 10/PR);
//! the engagement cap fills the category to an even 100.

use std::collections::BTreeMap;

use folio_core::{Category, CategoryScore, ProfileRecord, RawScore};

use crate::metric::MetricWeight;

/// 15 points per contributed skill artifact, max 45.
pub const SKILLS_SUBMITTED: MetricWeight = MetricWeight::new(15.0, 45.0);
/// 10 points per merged ecosystem PR, max 30.
pub const PRS_MERGED: MetricWeight = MetricWeight::new(10.0, 30.0);
/// 2.5 points per engagement level, max 25.
pub const ENGAGEMENT: MetricWeight = MetricWeight::new(2.5, 25.0);

pub fn calculate(profile: &ProfileRecord) -> CategoryScore {
    let Some(signals) = profile.platform(Category::Community) else {
        return CategoryScore::empty(Category::Community);
    };

    let mut breakdown = BTreeMap::new();
    breakdown.insert(
        "skills_submitted".to_string(),
        SKILLS_SUBMITTED.linear(signals.count("skills_submitted")),
    );
    breakdown.insert(
        "prs_merged".to_string(),
        PRS_MERGED.linear(signals.count("prs_merged")),
    );
    breakdown.insert(
        "engagement".to_string(),
        ENGAGEMENT.linear(signals.count("engagement_level")),
    );

    let total: f64 = breakdown.values().sum();
    CategoryScore {
        category: Category::Community,
        raw: RawScore::new(total),
        breakdown,
        last_activity: signals.timestamp("last_active_at"),
        skill_count: None,
    }
}
