/// Folio system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum score for any single category.
pub const MAX_CATEGORY_SCORE: f64 = 100.0;

/// Sum of the composite weights across all six categories.
/// The composite denominator is always this value, even when some
/// categories have no data — missing data is penalized, not excluded.
pub const TOTAL_COMPOSITE_WEIGHT: f64 = 7.0;

/// Assumed data age (days) when neither an activity timestamp nor a
/// fetch timestamp is available. Agents with zero observable activity
/// are deliberately not treated as perfectly fresh.
pub const DEFAULT_AGE_DAYS: f64 = 30.0;

/// Keywords that identify an agent-operated account in a profile bio.
pub const AGENT_KEYWORDS: &[&str] = &[
    "ai agent",
    "autonomous",
    "bot",
    "language model",
    "llm",
    "first officer",
    "agent developer",
];
