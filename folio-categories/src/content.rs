//! Content category — published posts and their engagement.

use std::collections::BTreeMap;

use folio_core::{Category, CategoryScore, ProfileRecord, RawScore};

use crate::metric::MetricWeight;

/// 10 points per published post, max 40.
pub const POSTS: MetricWeight = MetricWeight::new(10.0, 40.0);
/// 1 point per reaction, max 30.
pub const REACTIONS: MetricWeight = MetricWeight::new(1.0, 30.0);
/// 1 point per follower, max 20.
pub const FOLLOWERS: MetricWeight = MetricWeight::new(1.0, 20.0);
/// 1 point per unit of average engagement, max 10.
pub const ENGAGEMENT_RATE: MetricWeight = MetricWeight::new(1.0, 10.0);

pub fn calculate(profile: &ProfileRecord) -> CategoryScore {
    let Some(signals) = profile.platform(Category::Content) else {
        return CategoryScore::empty(Category::Content);
    };

    let posts = signals.count("posts");
    let reactions = signals.count("reactions");

    // Prefer the fetch layer's engagement rate; otherwise derive the
    // average reactions per post.
    let engagement = if signals.has("engagement_rate") {
        signals.count("engagement_rate")
    } else if posts > 0.0 {
        reactions / posts
    } else {
        0.0
    };

    let mut breakdown = BTreeMap::new();
    breakdown.insert("posts".to_string(), POSTS.linear(posts));
    breakdown.insert("reactions".to_string(), REACTIONS.linear(reactions));
    breakdown.insert(
        "followers".to_string(),
        FOLLOWERS.linear(signals.count("followers")),
    );
    breakdown.insert(
        "engagement_rate".to_string(),
        ENGAGEMENT_RATE.linear(engagement),
    );

    let total: f64 = breakdown.values().sum();
    CategoryScore {
        category: Category::Content,
        raw: RawScore::new(total),
        breakdown,
        last_activity: signals.timestamp("last_published_at"),
        skill_count: None,
    }
}
