//! Dynamic option values.
//!
//! Option bags are loosely typed: a caller may pass `0`, `"0"` or `false` for
//! the same option and expect the same markup. [`Value`] keeps the original
//! shape and exposes the coercions components rely on.

use std::fmt;

use serde::Deserialize;

use crate::options::OptionBag;

/// A single option value.
///
/// Deserializes untagged, so TOML and JSON page scripts map onto it directly.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicitly unset. Treated the same as a missing key.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    /// Nested option bag (e.g. `{label, ...attrs}` for select options).
    Map(OptionBag),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Truthiness used for flags such as `checked` and `disabled`.
    ///
    /// Falsy: `Null`, `false`, `0`, `0.0`, `""`, `"0"`, empty list or map.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::Str(s) => !s.is_empty() && s != "0",
            Self::List(items) => !items.is_empty(),
            Self::Map(bag) => !bag.is_empty(),
        }
    }

    /// Whether the stringified value is empty after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.to_attr_string().trim().is_empty()
    }

    /// Stringify for attribute values and text concatenation.
    ///
    /// `true` becomes `"1"`, `false` and `Null` become `""`, lists are joined
    /// with spaces and maps stringify to nothing.
    #[must_use]
    pub fn to_attr_string(&self) -> String {
        match self {
            Self::Null | Self::Bool(false) | Self::Map(_) => String::new(),
            Self::Bool(true) => "1".to_owned(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Str(s) => s.clone(),
            Self::List(items) => items
                .iter()
                .map(Self::to_attr_string)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Numeric view of the value, if it is a number or a numeric string.
    fn as_number(&self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Str(s) => parse_numeric(s),
            _ => None,
        }
    }

    /// Loose equality used to match `checked` radios and `selected` items.
    ///
    /// - booleans compare by truthiness against anything
    /// - `Null` equals the empty string and any falsy non-string
    /// - numbers and numeric strings compare numerically (`"0" == 0`)
    /// - everything else compares by stringified value
    #[must_use]
    pub fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(b), v) | (v, Self::Bool(b)) => *b == v.is_truthy(),
            (Self::Null, Self::Str(s)) | (Self::Str(s), Self::Null) => s.is_empty(),
            (Self::Null, v) | (v, Self::Null) => !v.is_truthy(),
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.loose_eq(y))
            }
            (Self::Map(a), Self::Map(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, v)| b.get(k).is_some_and(|other| v.loose_eq(other)))
            }
            (Self::List(_) | Self::Map(_), _) | (_, Self::List(_) | Self::Map(_)) => false,
            #[allow(clippy::float_cmp)]
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a == b,
                _ => self.to_attr_string() == other.to_attr_string(),
            },
        }
    }
}

/// Parse a numeric string (`"3"`, `" 4.5"`, `"1e3"`), rejecting `inf`/`NaN`.
fn parse_numeric(s: &str) -> Option<f64> {
    let trimmed = s.trim_start();
    if !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_attr_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<OptionBag> for Value {
    fn from(bag: OptionBag) -> Self {
        Self::Map(bag)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::from(false).is_truthy());
        assert!(!Value::from(0).is_truthy());
        assert!(!Value::from(0.0).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::from("0").is_truthy());
        assert!(!Value::List(vec![]).is_truthy());
        assert!(Value::from("00").is_truthy());
        assert!(Value::from(1).is_truthy());
        assert!(Value::from(" ").is_truthy());
    }

    #[test]
    fn test_to_attr_string() {
        assert_eq!(Value::from(true).to_attr_string(), "1");
        assert_eq!(Value::from(false).to_attr_string(), "");
        assert_eq!(Value::Null.to_attr_string(), "");
        assert_eq!(Value::from(42).to_attr_string(), "42");
        assert_eq!(Value::from(2.0).to_attr_string(), "2");
        assert_eq!(Value::from(2.5).to_attr_string(), "2.5");
        assert_eq!(
            Value::List(vec!["a".into(), "b".into()]).to_attr_string(),
            "a b"
        );
    }

    #[test]
    fn test_is_blank() {
        assert!(Value::from("   ").is_blank());
        assert!(Value::Null.is_blank());
        assert!(!Value::from(0).is_blank());
        assert!(!Value::from("x").is_blank());
    }

    #[test]
    fn test_loose_eq_numeric_string() {
        assert!(Value::from("0").loose_eq(&Value::from(0)));
        assert!(Value::from(1).loose_eq(&Value::from("1")));
        assert!(Value::from("1.0").loose_eq(&Value::from("1")));
        assert!(!Value::from("1").loose_eq(&Value::from(0)));
    }

    #[test]
    fn test_loose_eq_strings() {
        assert!(Value::from("yes").loose_eq(&Value::from("yes")));
        assert!(!Value::from("yes").loose_eq(&Value::from("no")));
        assert!(!Value::from("abc").loose_eq(&Value::from(0)));
    }

    #[test]
    fn test_loose_eq_bool_and_null() {
        assert!(Value::from(true).loose_eq(&Value::from("1")));
        assert!(Value::from(false).loose_eq(&Value::from("0")));
        assert!(Value::Null.loose_eq(&Value::from("")));
        assert!(Value::Null.loose_eq(&Value::from(0)));
        assert!(!Value::Null.loose_eq(&Value::from("0")));
    }

    #[test]
    fn test_parse_numeric_rejects_words() {
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric("NaN"), None);
        assert_eq!(parse_numeric(" 12"), Some(12.0));
    }

    #[test]
    fn test_deserialize_untagged() {
        let value: Value = serde_json::from_str(r#"{"a": 1, "b": [true, "x"], "c": null}"#).unwrap();
        let Value::Map(bag) = &value else {
            panic!("expected a map, got {value:?}");
        };
        assert_eq!(bag.get("a"), Some(&Value::Int(1)));
        assert_eq!(
            bag.get("b"),
            Some(&Value::List(vec![Value::Bool(true), Value::from("x")]))
        );
        assert_eq!(bag.get("c"), Some(&Value::Null));
    }
}
