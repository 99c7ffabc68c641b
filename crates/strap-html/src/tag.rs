//! Opening, closing and full tag construction.

use crate::attrs::{AttributeMap, AttributePolicy};

/// Builds tags from a name, content and attributes.
///
/// Attribute values are escaped, content is not: content is expected to be
/// markup already composed from other builder calls.
///
/// # Example
///
/// ```
/// use strap_html::{AttributeMap, TagBuilder};
///
/// let tags = TagBuilder::default();
/// let html = tags.full("span", "  Help  ", &AttributeMap::new().with("class", "help-inline"));
/// assert_eq!(html, r#"<span class="help-inline">Help</span>"#);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TagBuilder {
    policy: AttributePolicy,
}

impl TagBuilder {
    #[must_use]
    pub const fn new(policy: AttributePolicy) -> Self {
        Self { policy }
    }

    /// `<name attrs...>`
    #[must_use]
    pub fn open(&self, name: &str, attrs: &AttributeMap) -> String {
        format!("<{name}{}>", attrs.serialize(self.policy))
    }

    /// `</name>`
    #[must_use]
    pub fn close(&self, name: &str) -> String {
        format!("</{name}>")
    }

    /// Opening tag, trimmed content, closing tag.
    #[must_use]
    pub fn full(&self, name: &str, content: &str, attrs: &AttributeMap) -> String {
        let mut html = self.open(name, attrs);
        html.push_str(content.trim());
        html.push_str(&self.close(name));
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_without_attributes() {
        assert_eq!(TagBuilder::default().open("br", &AttributeMap::new()), "<br>");
    }

    #[test]
    fn test_open_with_attributes() {
        let attrs = AttributeMap::new().with("type", "text").with("disabled", false);
        assert_eq!(
            TagBuilder::default().open("input", &attrs),
            r#"<input type="text">"#
        );
    }

    #[test]
    fn test_close() {
        assert_eq!(TagBuilder::default().close("form"), "</form>");
    }

    #[test]
    fn test_full_trims_content_only() {
        let attrs = AttributeMap::new().with("title", " padded ");
        assert_eq!(
            TagBuilder::default().full("p", "\n  text \n", &attrs),
            r#"<p title=" padded ">text</p>"#
        );
    }

    #[test]
    fn test_full_does_not_escape_content() {
        assert_eq!(
            TagBuilder::default().full("li", "<a>x</a>", &AttributeMap::new()),
            "<li><a>x</a></li>"
        );
    }

    #[test]
    fn test_strict_policy_keeps_empty_strings() {
        let tags = TagBuilder::new(AttributePolicy::Strict);
        let attrs = AttributeMap::new().with("value", "");
        assert_eq!(tags.open("input", &attrs), r#"<input value="">"#);
    }
}
