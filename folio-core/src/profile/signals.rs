use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One platform's slice of a profile: a schemaless field map.
///
/// Any field may be absent, and a present field may have the wrong
/// shape — both conditions coerce to the zero value for the requested
/// type. Accessors never panic and never error; malformed external
/// data is an expected condition, not a failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformSignals(Map<String, Value>);

impl PlatformSignals {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// No fields at all — "no data fetched for this platform".
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Set a field. Used by the fetch layer and by test builders.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Numeric field. Absent, non-numeric, or unparseable values
    /// coerce to 0.0. Numeric strings are accepted.
    pub fn number(&self, key: &str) -> f64 {
        match self.0.get(key) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Non-negative count. Negative values coerce to 0.
    pub fn count(&self, key: &str) -> f64 {
        self.number(key).max(0.0)
    }

    /// Boolean field. Anything other than `true` is false.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(Value::Bool(true)))
    }

    /// Text field. Non-string values read as absent.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// ISO-8601 timestamp field. Accepts RFC 3339 or a bare date;
    /// anything else reads as absent.
    pub fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        let raw = self.text(key)?;
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }

    /// Length of a list field. Non-list values read as 0.
    pub fn list_len(&self, key: &str) -> usize {
        match self.0.get(key) {
            Some(Value::Array(items)) => items.len(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_fields_coerce_to_zero_values() {
        let signals = PlatformSignals::new();
        assert_eq!(signals.number("posts"), 0.0);
        assert!(!signals.flag("verified"));
        assert_eq!(signals.text("bio"), None);
        assert_eq!(signals.timestamp("pushed_at"), None);
        assert_eq!(signals.list_len("skills"), 0);
    }

    #[test]
    fn malformed_fields_coerce_to_zero_values() {
        let signals = PlatformSignals::new()
            .with("posts", "not a number")
            .with("verified", "yes")
            .with("pushed_at", "last tuesday")
            .with("skills", json!({"a": 1}));
        assert_eq!(signals.number("posts"), 0.0);
        assert!(!signals.flag("verified"));
        assert_eq!(signals.timestamp("pushed_at"), None);
        assert_eq!(signals.list_len("skills"), 0);
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let signals = PlatformSignals::new().with("stars", "42");
        assert_eq!(signals.number("stars"), 42.0);
    }

    #[test]
    fn negative_counts_clamp_to_zero() {
        let signals = PlatformSignals::new().with("posts", -5);
        assert_eq!(signals.count("posts"), 0.0);
        assert_eq!(signals.number("posts"), -5.0);
    }

    #[test]
    fn parses_rfc3339_and_bare_dates() {
        let signals = PlatformSignals::new()
            .with("a", "2026-01-15T10:30:00Z")
            .with("b", "2026-01-15");
        assert!(signals.timestamp("a").is_some());
        assert!(signals.timestamp("b").is_some());
    }
}
