//! HTML attribute maps and their serialization.

use std::fmt::Write;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::options::{OptionBag, RETURN_ONLY};
use crate::value::Value;

/// Which attribute values are dropped from the output entirely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributePolicy {
    /// Omit `Null`, `false`, `0`, `0.0`, `""` and empty collections.
    ///
    /// The string `"0"` is kept. Callers that need a literal zero attribute
    /// must pass it as a string.
    #[default]
    Loose,
    /// Omit only `Null` and `false`.
    Strict,
}

impl AttributePolicy {
    /// Whether `value` is left out of the serialized attribute string.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn omits(self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null | Value::Bool(false)) => true,
            (Self::Strict, _) => false,
            (Self::Loose, Value::Int(i)) => *i == 0,
            (Self::Loose, Value::Float(f)) => *f == 0.0,
            (Self::Loose, Value::Str(s)) => s.is_empty(),
            (Self::Loose, Value::List(items)) => items.is_empty(),
            (Self::Loose, Value::Map(bag)) => bag.is_empty(),
            (Self::Loose, Value::Bool(true)) => false,
        }
    }
}

/// Ordered attribute name to value mapping.
///
/// Re-inserting a name replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeMap(IndexMap<String, Value>);

impl AttributeMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Insert only when `name` is not already present.
    pub fn insert_missing(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.entry(name.into()).or_insert_with(|| value.into());
    }

    /// Append caller attributes without overriding ones already set.
    ///
    /// The `return_only` flag is never forwarded as an attribute.
    pub fn extend_missing(&mut self, bag: &OptionBag) {
        for (name, value) in bag.iter().filter(|(name, _)| *name != RETURN_ONLY) {
            self.insert_missing(name.clone(), value.clone());
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize to ` name="value"` pairs in insertion order.
    #[must_use]
    pub fn serialize(&self, policy: AttributePolicy) -> String {
        let mut out = String::new();
        for (name, value) in &self.0 {
            if name == RETURN_ONLY || policy.omits(value) {
                continue;
            }
            write!(
                out,
                r#" {name}="{}""#,
                escape_html(&value.to_attr_string())
            )
            .unwrap();
        }
        out
    }
}

impl From<&OptionBag> for AttributeMap {
    fn from(bag: &OptionBag) -> Self {
        let mut attrs = Self::new();
        attrs.extend_missing(bag);
        attrs
    }
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_serialize_omits_false() {
        let attrs = AttributeMap::new().with("checked", false).with("name", "x");
        assert_eq!(attrs.serialize(AttributePolicy::Loose), r#" name="x""#);
        assert_eq!(attrs.serialize(AttributePolicy::Strict), r#" name="x""#);
    }

    #[test]
    fn test_serialize_loose_zero_quirk() {
        let attrs = AttributeMap::new()
            .with("a", 0)
            .with("b", "")
            .with("c", "0")
            .with("d", Value::Null);
        assert_eq!(attrs.serialize(AttributePolicy::Loose), r#" c="0""#);
        assert_eq!(
            attrs.serialize(AttributePolicy::Strict),
            r#" a="0" b="" c="0""#
        );
    }

    #[test]
    fn test_serialize_escapes_values() {
        let attrs = AttributeMap::new().with("title", r#"Say "hi" & <go>"#);
        assert_eq!(
            attrs.serialize(AttributePolicy::Loose),
            r#" title="Say &quot;hi&quot; &amp; &lt;go&gt;""#
        );
    }

    #[test]
    fn test_serialize_keeps_insertion_order() {
        let mut attrs = AttributeMap::new().with("type", "text").with("value", "a");
        attrs.insert("type", "hidden");
        assert_eq!(
            attrs.serialize(AttributePolicy::Loose),
            r#" type="hidden" value="a""#
        );
    }

    #[test]
    fn test_extend_missing_skips_return_only() {
        let bag = OptionBag::new()
            .with("type", "text")
            .with("data-id", 7)
            .return_only();
        let mut attrs = AttributeMap::new().with("type", "hidden");
        attrs.extend_missing(&bag);
        assert_eq!(
            attrs.serialize(AttributePolicy::Loose),
            r#" type="hidden" data-id="7""#
        );
    }

    #[test]
    fn test_serialize_empty() {
        assert_eq!(AttributeMap::new().serialize(AttributePolicy::Loose), "");
    }
}
