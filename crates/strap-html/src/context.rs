//! Cross-call rendering state: open form tags and active tab ids.

/// Tag used when no form-like element is open.
pub const DEFAULT_FORM_TAG: &str = "form";

/// State threaded through independently invoked component calls.
///
/// Both halves are stacks. Tab groups push their active tab id on open and
/// pop it on close, and a pane is active when its key matches the innermost
/// open group. Form-like openings push their tag so nested openings of
/// different tags close in the right order.
#[derive(Debug, Default)]
pub struct RenderContext {
    form_tags: Vec<String>,
    active_tabs: Vec<String>,
}

impl RenderContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_form(&mut self, tag: impl Into<String>) {
        self.form_tags.push(tag.into());
    }

    /// Pop the innermost form tag, falling back to `form` when none is open.
    pub(crate) fn pop_form(&mut self) -> String {
        self.form_tags
            .pop()
            .filter(|tag| !tag.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FORM_TAG.to_owned())
    }

    /// Tag the next form close will emit.
    #[must_use]
    pub fn current_form_tag(&self) -> &str {
        self.form_tags
            .last()
            .map_or(DEFAULT_FORM_TAG, String::as_str)
    }

    #[must_use]
    pub fn form_depth(&self) -> usize {
        self.form_tags.len()
    }

    pub(crate) fn push_tab_group(&mut self, active: impl Into<String>) {
        self.active_tabs.push(active.into());
    }

    pub(crate) fn pop_tab_group(&mut self) -> Option<String> {
        self.active_tabs.pop()
    }

    /// Active tab id of the innermost open group.
    #[must_use]
    pub fn active_tab(&self) -> Option<&str> {
        self.active_tabs.last().map(String::as_str)
    }

    /// Current tab group nesting depth.
    #[must_use]
    pub fn tab_depth(&self) -> usize {
        self.active_tabs.len()
    }
}
