//! The helper session.

use std::io::Write;

use crate::attrs::AttributePolicy;
use crate::buffer::RenderBuffer;
use crate::context::RenderContext;
use crate::error::HelperError;
use crate::tag::TagBuilder;

/// Session settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HelperOptions {
    /// Store every emitted fragment for a final [`Helper::render`].
    pub accumulate: bool,
    /// Which attribute values are omitted from markup.
    pub attribute_policy: AttributePolicy,
}

impl Default for HelperOptions {
    fn default() -> Self {
        Self {
            accumulate: true,
            attribute_policy: AttributePolicy::Loose,
        }
    }
}

/// One rendering session.
///
/// Owns the fragment buffer and the form/tab state shared across component
/// calls. Use one helper per logical request; it holds no locks.
///
/// # Example
///
/// ```
/// use strap_html::{Helper, OptionBag};
///
/// let mut helper = Helper::new(true);
/// helper.checkbox(&OptionBag::new().with("name", "agree").with("label", "I agree"));
/// let html = helper.render();
/// assert!(html.contains(r#"id="agree_1""#));
/// assert!(helper.render().is_empty());
/// ```
#[derive(Debug)]
pub struct Helper {
    pub(crate) buffer: RenderBuffer,
    pub(crate) context: RenderContext,
    pub(crate) tags: TagBuilder,
}

impl Helper {
    /// Create a session; `accumulate` selects buffering of emitted fragments.
    #[must_use]
    pub fn new(accumulate: bool) -> Self {
        Self::with_options(HelperOptions {
            accumulate,
            ..HelperOptions::default()
        })
    }

    #[must_use]
    pub fn with_options(options: HelperOptions) -> Self {
        Self {
            buffer: RenderBuffer::new(options.accumulate),
            context: RenderContext::new(),
            tags: TagBuilder::new(options.attribute_policy),
        }
    }

    /// Drain the buffer and return its content.
    pub fn render(&mut self) -> String {
        let content = self.buffer.drain();
        tracing::debug!(bytes = content.len(), "Drained render buffer");
        content
    }

    /// Drain the buffer into `out`.
    pub fn render_to<W: Write>(&mut self, out: &mut W) -> Result<(), HelperError> {
        let content = self.render();
        out.write_all(content.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Append caller-provided markup to the buffer as-is.
    pub fn add(&mut self, html: impl AsRef<str>) {
        self.buffer.store(html.as_ref(), false);
    }

    /// Drain the buffer, failing if tab groups or forms are still open.
    pub fn finish(mut self) -> Result<String, HelperError> {
        match (self.context.tab_depth(), self.context.form_depth()) {
            (0, 0) => Ok(self.render()),
            (0, forms) => Err(HelperError::UnclosedForms(forms)),
            (tabs, _) => Err(HelperError::UnclosedTabGroups(tabs)),
        }
    }

    /// Buffered content without draining.
    #[must_use]
    pub fn buffered(&self) -> &str {
        self.buffer.as_str()
    }

    #[must_use]
    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Tag builder using this session's attribute policy.
    #[must_use]
    pub fn tags(&self) -> TagBuilder {
        self.tags
    }

    /// Store `html` (unless return-only) and hand it back.
    pub(crate) fn emit(&mut self, html: String, return_only: bool) -> String {
        self.buffer.store(&html, return_only);
        html
    }
}

impl Default for Helper {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_render() {
        let mut helper = Helper::default();
        helper.add("<hr>");
        helper.add(String::from("<br>"));
        assert_eq!(helper.render(), "<hr><br>");
        assert_eq!(helper.render(), "");
    }

    #[test]
    fn test_non_accumulating_session() {
        let mut helper = Helper::new(false);
        helper.add("<hr>");
        assert!(helper.buffered().is_empty());
    }

    #[test]
    fn test_render_to_writer() {
        let mut helper = Helper::default();
        helper.add("<p>x</p>");
        let mut out = Vec::new();
        helper.render_to(&mut out).unwrap();
        assert_eq!(out, b"<p>x</p>");
        assert!(helper.buffered().is_empty());
    }

    #[test]
    fn test_finish_clean_session() {
        let mut helper = Helper::default();
        helper.add("<p>x</p>");
        assert_eq!(helper.finish().unwrap(), "<p>x</p>");
    }

    #[test]
    fn test_finish_reports_open_tab_groups() {
        let mut helper = Helper::default();
        helper.context.push_tab_group("a");
        assert!(matches!(
            helper.finish(),
            Err(HelperError::UnclosedTabGroups(1))
        ));
    }

    #[test]
    fn test_finish_reports_open_forms() {
        let mut helper = Helper::default();
        helper.context.push_form("form");
        assert!(matches!(helper.finish(), Err(HelperError::UnclosedForms(1))));
    }
}
