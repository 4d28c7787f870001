//! # folio-categories
//!
//! The six category calculators. Each reads one platform slice of a
//! profile and produces a bounded sub-score with a per-metric
//! breakdown. Calculators are pure, order-independent, and resilient:
//! a missing platform scores zero, malformed fields coerce to zero,
//! and nothing here ever returns an error.

pub mod code;
pub mod community;
pub mod content;
pub mod economic;
pub mod identity;
pub mod metric;
pub mod social;

use chrono::{DateTime, Utc};
use folio_core::{Category, CategoryScore, ProfileRecord};

/// Calculate one category's score.
///
/// `now` only matters for the social calculator's account-age metric;
/// passing it explicitly keeps every calculator a deterministic
/// function of its arguments.
pub fn calculate(category: Category, profile: &ProfileRecord, now: DateTime<Utc>) -> CategoryScore {
    match category {
        Category::Code => code::calculate(profile),
        Category::Content => content::calculate(profile),
        Category::Social => social::calculate(profile, now),
        Category::Identity => identity::calculate(profile),
        Category::Community => community::calculate(profile),
        Category::Economic => economic::calculate(profile),
    }
}

/// Calculate all six categories, in composition order.
pub fn calculate_all(profile: &ProfileRecord, now: DateTime<Utc>) -> Vec<CategoryScore> {
    Category::ALL
        .iter()
        .map(|&category| calculate(category, profile, now))
        .collect()
}
