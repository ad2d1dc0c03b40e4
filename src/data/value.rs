//! Cell values shared by achievement, cutoff and demographic tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single observed value: a category label, a (pre-discretized) number, or missing.
///
/// Equality for deprivation purposes is exact and type-strict: see [`Value::matches`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Numeric value, compared with `==`.
    Numeric(f64),
    /// Categorical value with a string label.
    Categorical(String),
    /// Missing value.
    Missing,
}

impl Value {
    /// Check if this is a missing value. A NaN number counts as missing.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Missing => true,
            Value::Numeric(v) => v.is_nan(),
            Value::Categorical(_) => false,
        }
    }

    /// Fold NaN into `Missing`; other values are returned unchanged.
    pub fn normalized(self) -> Self {
        if self.is_missing() {
            Value::Missing
        } else {
            self
        }
    }

    /// Exact match against a cutoff.
    ///
    /// A categorical value never matches a numeric one, and `Missing` matches
    /// nothing, not even a missing cutoff.
    pub fn matches(&self, cutoff: &Value) -> bool {
        match (self, cutoff) {
            (Value::Numeric(a), Value::Numeric(b)) => a == b,
            (Value::Categorical(a), Value::Categorical(b)) => a == b,
            _ => false,
        }
    }

    /// Whether two values fall in the same demographic category.
    ///
    /// Unlike [`Value::matches`], missing values (including NaN) group together.
    pub fn same_category(&self, other: &Value) -> bool {
        match (self.is_missing(), other.is_missing()) {
            (true, true) => true,
            (false, false) => self.matches(other),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Numeric(v) => write!(f, "{}", v),
            Value::Categorical(s) => write!(f, "{}", s),
            Value::Missing => write!(f, "NA"),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Numeric(v).normalized()
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Numeric(v as f64)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Numeric(v as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Categorical(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Categorical(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_numeric_match() {
        assert!(Value::from(1).matches(&Value::from(1.0)));
        assert!(!Value::from(1).matches(&Value::from(2)));
    }

    #[test]
    fn test_categorical_never_matches_numeric() {
        assert!(!Value::from("1").matches(&Value::from(1)));
        assert!(Value::from("no_school").matches(&Value::from("no_school")));
    }

    #[test]
    fn test_missing_never_matches() {
        assert!(!Value::Missing.matches(&Value::Missing));
        assert!(!Value::Missing.matches(&Value::from(0)));
        assert!(Value::Missing.same_category(&Value::Missing));
    }

    #[test]
    fn test_nan_is_missing() {
        assert_eq!(Value::from(f64::NAN), Value::Missing);
        let raw = Value::Numeric(f64::NAN);
        assert!(raw.is_missing());
        assert!(raw.same_category(&Value::Numeric(f64::NAN)));
        assert!(raw.same_category(&Value::Missing));
        assert!(!raw.same_category(&Value::from(1)));
        assert!(!raw.matches(&Value::Numeric(f64::NAN)));
        assert_eq!(raw.normalized(), Value::Missing);
    }

    #[test]
    fn test_nan_json_roundtrip() {
        let values = vec![Value::from(f64::NAN), Value::from(2)];
        let json = serde_json::to_string(&values).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, values);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(1).to_string(), "1");
        assert_eq!(Value::from(0.5).to_string(), "0.5");
        assert_eq!(Value::from("N").to_string(), "N");
        assert_eq!(Value::Missing.to_string(), "NA");
    }

    #[test]
    fn test_untagged_yaml() {
        let values: Vec<Value> = serde_yaml::from_str("[1, 2.5, urban, null]").unwrap();
        assert_eq!(
            values,
            vec![
                Value::Numeric(1.0),
                Value::Numeric(2.5),
                Value::Categorical("urban".into()),
                Value::Missing,
            ]
        );
    }
}
