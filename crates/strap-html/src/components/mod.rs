//! Component catalog.
//!
//! Each component resolves its options against a [`DefaultSpec`], derives
//! attributes and sub-content, builds tags, stores the fragment in the
//! session buffer unless the call is return-only, and returns the fragment.
//!
//! Invalid enumerated options (form types, tab directions, ...) never fail;
//! they fall back to a documented default.
//!
//! [`DefaultSpec`]: crate::DefaultSpec

mod forms;
mod tabs;
mod thumbnails;
mod typography;

pub use forms::ChoiceKind;

use crate::value::Value;

/// Check an enumerated option, falling back when it is not recognized.
fn enumerated(option: &str, value: &Value, allowed: &[&str], fallback: &str) -> String {
    let candidate = value.to_attr_string();
    if allowed.contains(&candidate.as_str()) {
        candidate
    } else {
        tracing::debug!(option, value = %candidate, fallback, "Unrecognized option value");
        fallback.to_owned()
    }
}

/// Join class names, skipping blank ones.
fn classes<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names
        .into_iter()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
