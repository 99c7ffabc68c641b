//! Option bags and default resolution.
//!
//! Every component receives an [`OptionBag`] and merges it against its own
//! [`DefaultSpec`] with [`resolve`]. Two merge policies exist:
//!
//! - [`DefaultValue::Plain`]: fills the key only when the caller left it unset
//! - [`DefaultValue::Prefix`]: fills the key when unset, otherwise prepends the
//!   directive's string to the caller's value
//!
//! A third rule, implicit id derivation, is applied on the resolved bag by
//! [`ResolvedOptions::derive_id`].
//!
//! # Example
//!
//! ```
//! use strap_html::{DefaultSpec, OptionBag, resolve};
//!
//! let spec = DefaultSpec::new().prefix("class", "heading ").plain("explain", "");
//! let resolved = resolve(&OptionBag::new().with("class", "foo"), &spec);
//! assert_eq!(resolved.string("class"), "heading foo");
//! assert_eq!(resolved.string("explain"), "");
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use crate::value::Value;

/// Option key that suppresses buffer accumulation for a single call.
pub const RETURN_ONLY: &str = "return_only";

static NULL: Value = Value::Null;

/// Caller-supplied named options for one component invocation.
///
/// Keys keep insertion order, which matters for select options and for
/// attributes forwarded verbatim.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct OptionBag(IndexMap<String, Value>);

impl OptionBag {
    /// Create an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Mark this call as return-only.
    #[must_use]
    pub fn return_only(self) -> Self {
        self.with(RETURN_ONLY, true)
    }

    /// Insert or replace a value, keeping the original position of existing keys.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get a raw value, including explicit `Null`s.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the key is present with a non-null value.
    #[must_use]
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_null())
    }

    /// Remove a key, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Whether this call asked not to be buffered.
    #[must_use]
    pub fn is_return_only(&self) -> bool {
        self.get(RETURN_ONLY).is_some_and(Value::is_truthy)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for OptionBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for OptionBag {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// How a single default is merged into a caller's bag.
#[derive(Clone, Debug, PartialEq)]
pub enum DefaultValue {
    /// Used only when the caller left the key unset.
    Plain(Value),
    /// Used as-is when unset, otherwise prepended to the caller's value.
    Prefix(String),
}

impl DefaultValue {
    fn unset_value(&self) -> Value {
        match self {
            Self::Plain(v) => v.clone(),
            Self::Prefix(p) => Value::Str(p.clone()),
        }
    }
}

/// Ordered per-component table of defaults.
#[derive(Clone, Debug, Default)]
pub struct DefaultSpec {
    entries: Vec<(&'static str, DefaultValue)>,
}

impl DefaultSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plain default.
    #[must_use]
    pub fn plain(mut self, key: &'static str, value: impl Into<Value>) -> Self {
        self.entries.push((key, DefaultValue::Plain(value.into())));
        self
    }

    /// Add a prefix-merge directive.
    #[must_use]
    pub fn prefix(mut self, key: &'static str, prefix: impl Into<String>) -> Self {
        self.entries.push((key, DefaultValue::Prefix(prefix.into())));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, DefaultValue)> {
        self.entries.iter()
    }
}

/// Merge a caller bag against a component's defaults.
///
/// Keys without a default pass through untouched. Prefix directives
/// are applied exactly once per call: resolving an already-resolved bag with
/// the same defaults prefixes twice, so components resolve each bag once.
#[must_use]
pub fn resolve(input: &OptionBag, defaults: &DefaultSpec) -> ResolvedOptions {
    let mut resolved = input.clone();
    for (key, default) in defaults.iter() {
        let next = match (resolved.get(key).filter(|v| !v.is_null()), default) {
            (None, default) => Some(default.unset_value()),
            (Some(_), DefaultValue::Plain(_)) => None,
            (Some(current), DefaultValue::Prefix(prefix)) => {
                Some(Value::Str(format!("{prefix}{current}")))
            }
        };
        if let Some(value) = next {
            resolved.insert(*key, value);
        }
    }
    ResolvedOptions(resolved)
}

/// Derive an element id from a field name.
///
/// `[` becomes `_` and `]` is dropped, so `user[email]` maps to `user_email`
/// and `items[]` to `items_`. When a value is given it is appended after a
/// single `_` separator (`items[]` + `3` gives `items_3`).
///
/// The result is not escaped; attribute serialization escapes it once.
#[must_use]
pub fn id_for_name(name: &str, value: Option<&Value>) -> String {
    let mut id: String = name
        .chars()
        .filter_map(|c| match c {
            '[' => Some('_'),
            ']' => None,
            c => Some(c),
        })
        .collect();
    if let Some(value) = value.filter(|v| !v.is_null()) {
        if !id.ends_with('_') {
            id.push('_');
        }
        id.push_str(&value.to_attr_string());
    }
    id
}

/// An option bag after defaults have been applied.
///
/// Every key of the defaults it was resolved against is present.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedOptions(OptionBag);

impl ResolvedOptions {
    /// Get a value, `Null` when missing.
    #[must_use]
    pub fn get(&self, key: &str) -> &Value {
        self.0.get(key).unwrap_or(&NULL)
    }

    /// Stringified value, empty when missing.
    #[must_use]
    pub fn string(&self, key: &str) -> String {
        self.get(key).to_attr_string()
    }

    #[must_use]
    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_truthy()
    }

    #[must_use]
    pub fn is_blank(&self, key: &str) -> bool {
        self.get(key).is_blank()
    }

    #[must_use]
    pub fn is_return_only(&self) -> bool {
        self.0.is_return_only()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key, value);
    }

    /// Fill `id` from `name` when a name is given and no id is.
    ///
    /// With `with_value`, the resolved `value` is appended so inputs sharing a
    /// name (checkbox and radio groups) get distinct ids.
    pub fn derive_id(&mut self, with_value: bool) {
        if !self.is_truthy("name") || self.is_truthy("id") {
            return;
        }
        let value = with_value.then(|| self.get("value"));
        let id = id_for_name(&self.string("name"), value);
        self.set("id", id);
    }

    #[must_use]
    pub fn as_bag(&self) -> &OptionBag {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_fills_missing_keys() {
        let spec = DefaultSpec::new().plain("disabled", false).plain("value", 1);
        let resolved = resolve(&OptionBag::new(), &spec);
        assert_eq!(resolved.get("disabled"), &Value::Bool(false));
        assert_eq!(resolved.get("value"), &Value::Int(1));
    }

    #[test]
    fn test_resolve_caller_wins_for_plain() {
        let spec = DefaultSpec::new().plain("value", 1);
        let resolved = resolve(&OptionBag::new().with("value", "x"), &spec);
        assert_eq!(resolved.string("value"), "x");
    }

    #[test]
    fn test_resolve_null_counts_as_unset() {
        let spec = DefaultSpec::new().plain("label", "Yes");
        let resolved = resolve(&OptionBag::new().with("label", Value::Null), &spec);
        assert_eq!(resolved.string("label"), "Yes");
    }

    #[test]
    fn test_resolve_prefix_merge() {
        let spec = DefaultSpec::new().prefix("class", "heading ");
        let set = resolve(&OptionBag::new().with("class", "foo"), &spec);
        let unset = resolve(&OptionBag::new(), &spec);
        assert_eq!(set.string("class"), "heading foo");
        assert_eq!(unset.string("class"), "heading ");
    }

    #[test]
    fn test_resolve_prefix_is_applied_per_call() {
        let spec = DefaultSpec::new().prefix("class", "btn ");
        let once = resolve(&OptionBag::new().with("class", "primary"), &spec);
        let twice = resolve(once.as_bag(), &spec);
        assert_eq!(once.string("class"), "btn primary");
        assert_eq!(twice.string("class"), "btn btn primary");
    }

    #[test]
    fn test_resolve_passes_extra_keys_and_keeps_input() {
        let input = OptionBag::new().with("data-x", "1");
        let resolved = resolve(&input, &DefaultSpec::new().plain("a", "b"));
        assert_eq!(resolved.string("data-x"), "1");
        assert_eq!(input.len(), 1);
    }

    #[test]
    fn test_id_for_name() {
        assert_eq!(id_for_name("user[email]", None), "user_email");
        assert_eq!(id_for_name("items[]", Some(&Value::from(3))), "items_3");
        assert_eq!(id_for_name("agree", Some(&Value::from(1))), "agree_1");
        assert_eq!(id_for_name("a[b][c]", None), "a_b_c");
        assert_eq!(id_for_name("plain", None), "plain");
    }

    #[test]
    fn test_derive_id_respects_explicit_id() {
        let spec = DefaultSpec::new().plain("value", 1);
        let mut resolved = resolve(
            &OptionBag::new().with("name", "agree").with("id", "custom"),
            &spec,
        );
        resolved.derive_id(true);
        assert_eq!(resolved.string("id"), "custom");
    }

    #[test]
    fn test_derive_id_without_name() {
        let mut resolved = resolve(&OptionBag::new(), &DefaultSpec::new());
        resolved.derive_id(false);
        assert!(resolved.get("id").is_null());
    }

    #[test]
    fn test_return_only_flag() {
        assert!(OptionBag::new().return_only().is_return_only());
        assert!(!OptionBag::new().with(RETURN_ONLY, false).is_return_only());
    }
}
