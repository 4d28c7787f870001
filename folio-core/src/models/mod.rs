//! Output models — every record here is derived data, recomputed
//! fresh on each scoring run and never persisted by the core.

mod boost_outcome;
mod category_score;
mod decay_outcome;
mod raw_score;
mod score_record;

pub use boost_outcome::BoostOutcome;
pub use category_score::CategoryScore;
pub use decay_outcome::DecayOutcome;
pub use raw_score::RawScore;
pub use score_record::{CategoryBreakdown, DataSources, ScoreRecord};
