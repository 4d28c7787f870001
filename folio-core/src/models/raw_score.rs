use std::fmt;

use serde::{Deserialize, Serialize};

/// Category score clamped to [0.0, 100.0].
///
/// Metric caps within a category are designed to sum to at most 100,
/// but additive metrics can overshoot through rounding, so the clamp
/// is enforced here rather than trusted to the point tables.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct RawScore(f64);

impl RawScore {
    pub const MAX: f64 = 100.0;

    /// Create a new RawScore, clamping to [0.0, 100.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, Self::MAX))
    }

    pub const ZERO: RawScore = RawScore(0.0);

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl Default for RawScore {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for RawScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl From<f64> for RawScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<RawScore> for f64 {
    fn from(s: RawScore) -> Self {
        s.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_bounds() {
        assert_eq!(RawScore::new(-5.0).value(), 0.0);
        assert_eq!(RawScore::new(250.0).value(), 100.0);
        assert_eq!(RawScore::new(62.5).value(), 62.5);
    }
}
