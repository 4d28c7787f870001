//! Code category — GitHub activity.

use std::collections::BTreeMap;

use folio_core::constants::AGENT_KEYWORDS;
use folio_core::{Category, CategoryScore, ProfileRecord, RawScore};

use crate::metric::MetricWeight;

/// 5 points per public repository, max 25.
pub const PUBLIC_REPOS: MetricWeight = MetricWeight::new(5.0, 25.0);
/// 2 points per recent commit, max 20.
pub const RECENT_COMMITS: MetricWeight = MetricWeight::new(2.0, 20.0);
/// 5 points per merged PR, max 25.
pub const MERGED_PRS: MetricWeight = MetricWeight::new(5.0, 25.0);
/// 1 point per 5 stars, max 15.
pub const STARS: MetricWeight = MetricWeight::new(0.2, 15.0);
/// Flat 10 points for an agent-identifying bio.
pub const BIO_SIGNALS: MetricWeight = MetricWeight::new(10.0, 10.0);

pub fn calculate(profile: &ProfileRecord) -> CategoryScore {
    let Some(signals) = profile.platform(Category::Code) else {
        return CategoryScore::empty(Category::Code);
    };

    let mut breakdown = BTreeMap::new();
    breakdown.insert(
        "public_repos".to_string(),
        PUBLIC_REPOS.linear(signals.count("public_repos")),
    );
    breakdown.insert(
        "recent_commits".to_string(),
        RECENT_COMMITS.linear(signals.count("recent_commits")),
    );
    breakdown.insert(
        "merged_prs".to_string(),
        MERGED_PRS.linear(signals.count("merged_prs")),
    );
    breakdown.insert("stars".to_string(), STARS.linear(signals.count("stars")));

    // Either the fetch layer flagged the bio, or we scan it ourselves.
    let bio_match = signals.flag("bio_has_agent_keywords")
        || signals.text("bio").is_some_and(|bio| {
            let bio = bio.to_lowercase();
            AGENT_KEYWORDS.iter().any(|kw| bio.contains(kw))
        });
    breakdown.insert("bio_signals".to_string(), BIO_SIGNALS.binary(bio_match));

    let total: f64 = breakdown.values().sum();
    CategoryScore {
        category: Category::Code,
        raw: RawScore::new(total),
        breakdown,
        last_activity: signals.timestamp("pushed_at"),
        skill_count: None,
    }
}
