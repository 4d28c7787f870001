use std::fmt;

use serde::{Deserialize, Serialize};

/// The six weighted signal categories. The set is closed and fixed by
/// the composite weighting table — there is no plugin registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Code,
    Content,
    Social,
    Identity,
    Community,
    Economic,
}

impl Category {
    /// All categories, in composition order.
    pub const ALL: [Category; 6] = [
        Category::Code,
        Category::Content,
        Category::Social,
        Category::Identity,
        Category::Community,
        Category::Economic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Code => "code",
            Category::Content => "content",
            Category::Social => "social",
            Category::Identity => "identity",
            Category::Community => "community",
            Category::Economic => "economic",
        }
    }

    /// Profile platform key feeding this category.
    pub fn platform_key(self) -> &'static str {
        match self {
            Category::Code => "github",
            Category::Content => "content",
            Category::Social => "social",
            Category::Identity => "a2a",
            Category::Community => "community",
            Category::Economic => "toku",
        }
    }

    /// Composite weight. Identity counts double — a verifiable
    /// self-declared identity is the strongest reputation signal.
    pub fn weight(self) -> f64 {
        match self {
            Category::Identity => 2.0,
            _ => 1.0,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named reputation bands over the composite score.
/// Assignment uses the post-boost score: the skills boost can move an
/// agent across a tier boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "Signal Zero")]
    SignalZero,
    Awakening,
    Becoming,
    Active,
    Recognized,
    Autonomous,
    Pioneer,
}

impl Tier {
    /// Minimum composite score for this tier.
    pub fn min_score(self) -> u32 {
        match self {
            Tier::SignalZero => 0,
            Tier::Awakening => 1,
            Tier::Becoming => 16,
            Tier::Active => 36,
            Tier::Recognized => 56,
            Tier::Autonomous => 75,
            Tier::Pioneer => 90,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::SignalZero => "Signal Zero",
            Tier::Awakening => "Awakening",
            Tier::Becoming => "Becoming",
            Tier::Active => "Active",
            Tier::Recognized => "Recognized",
            Tier::Autonomous => "Autonomous",
            Tier::Pioneer => "Pioneer",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tier::SignalZero => "No activity",
            Tier::Awakening => "Signal detected",
            Tier::Becoming => "Getting started",
            Tier::Active => "Regular activity",
            Tier::Recognized => "Established presence",
            Tier::Autonomous => "Self-sufficient agents",
            Tier::Pioneer => "Top 10% of agents",
        }
    }

    /// Map a composite score to its tier, highest band first.
    pub fn from_score(score: u32) -> Tier {
        const ORDERED: [Tier; 6] = [
            Tier::Pioneer,
            Tier::Autonomous,
            Tier::Recognized,
            Tier::Active,
            Tier::Becoming,
            Tier::Awakening,
        ];
        for tier in ORDERED {
            if score >= tier.min_score() {
                return tier;
            }
        }
        Tier::SignalZero
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_composite_denominator() {
        let total: f64 = Category::ALL.iter().map(|c| c.weight()).sum();
        assert_eq!(total, crate::constants::TOTAL_COMPOSITE_WEIGHT);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(Tier::from_score(0), Tier::SignalZero);
        assert_eq!(Tier::from_score(1), Tier::Awakening);
        assert_eq!(Tier::from_score(15), Tier::Awakening);
        assert_eq!(Tier::from_score(16), Tier::Becoming);
        assert_eq!(Tier::from_score(36), Tier::Active);
        assert_eq!(Tier::from_score(55), Tier::Active);
        assert_eq!(Tier::from_score(56), Tier::Recognized);
        assert_eq!(Tier::from_score(75), Tier::Autonomous);
        assert_eq!(Tier::from_score(90), Tier::Pioneer);
        assert_eq!(Tier::from_score(100), Tier::Pioneer);
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Identity).unwrap();
        assert_eq!(json, "\"identity\"");
    }
}
