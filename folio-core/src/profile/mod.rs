//! Profile records — the normalized per-agent input assembled by the
//! external fetch layer. The scoring core never mutates a profile.

mod record;
mod signals;

pub use record::ProfileRecord;
pub use signals::PlatformSignals;
