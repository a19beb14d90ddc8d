use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output key for a computed average.
///
/// Supports the three key identities callers attach to observations:
/// - Text keys (e.g., "13:30", "open")
/// - Integer keys (e.g., sequence numbers, epoch seconds)
/// - Float keys (wrapped in `OrderedFloat` so every variant is `Eq + Hash`
///   and usable as a map key)
///
/// The `Drain` variant is synthetic: it is pushed into the key-delay window
/// while the stream is flushed at end of input and can never collide with a
/// caller-supplied key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesKey {
    /// Text key
    Text(String),
    /// Integer key
    Int(i64),
    /// Float key
    Float(OrderedFloat<f64>),
    /// Synthetic key used during drain, tagged with the remaining delay
    /// count at the time it was pushed
    Drain(usize),
}

impl SeriesKey {
    /// Returns true for keys supplied by the caller, false for synthetic
    /// drain keys.
    pub fn is_observed(&self) -> bool {
        !matches!(self, SeriesKey::Drain(_))
    }

    /// Float accessor; returns the wrapped value for float keys.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            SeriesKey::Float(value) => Some(value.into_inner()),
            _ => None,
        }
    }
}

impl From<&str> for SeriesKey {
    fn from(key: &str) -> Self {
        SeriesKey::Text(key.to_string())
    }
}

impl From<String> for SeriesKey {
    fn from(key: String) -> Self {
        SeriesKey::Text(key)
    }
}

impl From<i64> for SeriesKey {
    fn from(key: i64) -> Self {
        SeriesKey::Int(key)
    }
}

impl From<f64> for SeriesKey {
    fn from(key: f64) -> Self {
        SeriesKey::Float(OrderedFloat(key))
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKey::Text(key) => write!(f, "{}", key),
            SeriesKey::Int(key) => write!(f, "{}", key),
            SeriesKey::Float(key) => write!(f, "{}", key),
            SeriesKey::Drain(remaining) => write!(f, "drain-{}", remaining),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_conversions() {
        assert_eq!(SeriesKey::from("13:30"), SeriesKey::Text("13:30".into()));
        assert_eq!(SeriesKey::from(42_i64), SeriesKey::Int(42));
        assert_eq!(SeriesKey::from(1.5), SeriesKey::Float(OrderedFloat(1.5)));
    }

    #[test]
    fn test_float_keys_are_hashable() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(SeriesKey::from(1.5), "a");
        map.insert(SeriesKey::from(2.5), "b");

        assert_eq!(map.get(&SeriesKey::from(1.5)), Some(&"a"));
        assert_eq!(map.get(&SeriesKey::from(3.5)), None);
    }

    #[test]
    fn test_drain_keys_never_collide_with_observed() {
        let observed = SeriesKey::from("drain-2");
        let synthetic = SeriesKey::Drain(2);

        assert_ne!(observed, synthetic);
        assert!(observed.is_observed());
        assert!(!synthetic.is_observed());
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(SeriesKey::from("13:30").to_string(), "13:30");
        assert_eq!(SeriesKey::from(7_i64).to_string(), "7");
        assert_eq!(SeriesKey::Drain(3).to_string(), "drain-3");
    }

    #[test]
    fn test_as_float() {
        assert_eq!(SeriesKey::from(2.25).as_float(), Some(2.25));
        assert_eq!(SeriesKey::from(2_i64).as_float(), None);
    }
}
