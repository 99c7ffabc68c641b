//! Page scripts: an ordered list of component calls.
//!
//! ```toml
//! [[call]]
//! component = "form_open"
//! opts = { type = "horizontal", action = "/save" }
//!
//! [[call]]
//! component = "checkbox"
//! opts = { name = "agree", label = "I agree" }
//!
//! [[call]]
//! component = "form_close"
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use strap_html::{Helper, OptionBag, Value};

use crate::error::CliError;

/// A parsed page script.
#[derive(Debug, Deserialize)]
pub(crate) struct Page {
    #[serde(default)]
    pub(crate) call: Vec<Call>,
}

/// One component call, tagged by `component`.
#[derive(Debug, Deserialize)]
#[serde(tag = "component", rename_all = "snake_case")]
pub(crate) enum Call {
    Checkbox {
        #[serde(default)]
        opts: OptionBag,
    },
    Radio {
        #[serde(default)]
        opts: OptionBag,
    },
    RadioList {
        name: String,
        #[serde(default)]
        selected: Value,
        radios: Vec<OptionBag>,
        #[serde(default)]
        opts: OptionBag,
    },
    RadioBool {
        name: String,
        #[serde(default)]
        selected: Value,
        #[serde(default)]
        opts: OptionBag,
    },
    Text {
        #[serde(default)]
        opts: OptionBag,
    },
    Select {
        #[serde(default)]
        opts: OptionBag,
    },
    Hidden {
        name: String,
        #[serde(default)]
        value: Value,
        #[serde(default)]
        opts: OptionBag,
    },
    Button {
        #[serde(default)]
        opts: OptionBag,
    },
    Submit {
        #[serde(default)]
        opts: OptionBag,
    },
    FormOpen {
        #[serde(default)]
        opts: OptionBag,
    },
    FormClose {
        #[serde(default)]
        tag: String,
    },
    ControlGroupOpen {
        #[serde(default)]
        label: String,
        #[serde(default)]
        class: String,
    },
    ControlGroupClose {
        #[serde(default)]
        extra: String,
    },
    Help {
        content: String,
        #[serde(default)]
        opts: OptionBag,
    },
    PageHeading {
        text: String,
        #[serde(default)]
        opts: OptionBag,
    },
    Heading {
        text: String,
        #[serde(default)]
        opts: OptionBag,
    },
    Subheading {
        text: String,
        #[serde(default)]
        opts: OptionBag,
    },
    P {
        text: String,
        #[serde(default)]
        opts: OptionBag,
    },
    H4 {
        text: String,
        #[serde(default)]
        opts: OptionBag,
    },
    Img {
        src: String,
        #[serde(default)]
        opts: OptionBag,
    },
    Gap {
        #[serde(default)]
        opts: OptionBag,
    },
    Icon {
        name: String,
        #[serde(default)]
        opts: OptionBag,
    },
    Thumbnail {
        #[serde(default)]
        opts: OptionBag,
    },
    Thumbnails {
        items: IndexMap<String, OptionBag>,
        #[serde(default)]
        opts: OptionBag,
    },
    TabsOpen {
        tabs: IndexMap<String, String>,
        #[serde(default)]
        opts: OptionBag,
    },
    TabsClose,
    TabOpen {
        key: String,
    },
    TabClose,
    Tag {
        name: String,
        #[serde(default)]
        content: String,
        #[serde(default)]
        opts: OptionBag,
    },
    Raw {
        html: String,
    },
}

impl Page {
    /// Load a page script, picking the format from the file extension.
    pub(crate) fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content),
            Some("toml") => Self::from_toml(&content),
            other => Err(CliError::Page(format!(
                "unsupported page script extension {:?} (expected .toml or .json)",
                other.unwrap_or("")
            ))),
        }
    }

    pub(crate) fn from_toml(content: &str) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|e| CliError::Page(e.to_string()))
    }

    pub(crate) fn from_json(content: &str) -> Result<Self, CliError> {
        serde_json::from_str(content).map_err(|e| CliError::Page(e.to_string()))
    }

    /// Run every call against `helper` in order.
    pub(crate) fn apply(&self, helper: &mut Helper) {
        for call in &self.call {
            call.apply(helper);
        }
    }
}

impl Call {
    /// Invoke the component on `helper`.
    ///
    /// `help` only returns its fragment, so it is added to the buffer here.
    pub(crate) fn apply(&self, helper: &mut Helper) {
        match self {
            Self::Checkbox { opts } => {
                helper.checkbox(opts);
            }
            Self::Radio { opts } => {
                helper.radio(opts);
            }
            Self::RadioList {
                name,
                selected,
                radios,
                opts,
            } => {
                helper.radio_list(name, selected.clone(), radios, opts);
            }
            Self::RadioBool {
                name,
                selected,
                opts,
            } => {
                helper.radio_bool(name, selected.clone(), opts);
            }
            Self::Text { opts } => {
                helper.text(opts);
            }
            Self::Select { opts } => {
                helper.select(opts);
            }
            Self::Hidden { name, value, opts } => {
                helper.hidden(name, value.clone(), opts);
            }
            Self::Button { opts } => {
                helper.button(opts);
            }
            Self::Submit { opts } => {
                helper.submit(opts);
            }
            Self::FormOpen { opts } => {
                helper.form_open(opts);
            }
            Self::FormClose { tag } => {
                helper.form_close(tag);
            }
            Self::ControlGroupOpen { label, class } => {
                helper.control_group_open(label, class);
            }
            Self::ControlGroupClose { extra } => {
                helper.control_group_close(extra);
            }
            Self::Help { content, opts } => {
                let html = helper.help(content, opts);
                if !opts.is_return_only() {
                    helper.add(html);
                }
            }
            Self::PageHeading { text, opts } => {
                helper.page_heading(text, opts);
            }
            Self::Heading { text, opts } => {
                helper.heading(text, opts);
            }
            Self::Subheading { text, opts } => {
                helper.subheading(text, opts);
            }
            Self::P { text, opts } => {
                helper.p(text, opts);
            }
            Self::H4 { text, opts } => {
                helper.h4(text, opts);
            }
            Self::Img { src, opts } => {
                helper.img(src, opts);
            }
            Self::Gap { opts } => {
                helper.gap(opts);
            }
            Self::Icon { name, opts } => {
                helper.icon(name, opts);
            }
            Self::Thumbnail { opts } => {
                helper.thumbnail(opts);
            }
            Self::Thumbnails { items, opts } => {
                helper.thumbnails(items, opts);
            }
            Self::TabsOpen { tabs, opts } => {
                helper.tabs_open(tabs, opts);
            }
            Self::TabsClose => {
                helper.tabs_close();
            }
            Self::TabOpen { key } => {
                helper.tab_open(key);
            }
            Self::TabClose => {
                helper.tab_close();
            }
            Self::Tag {
                name,
                content,
                opts,
            } => {
                helper.tag(name, content, opts);
            }
            Self::Raw { html } => helper.add(html),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_toml_page() {
        let page = Page::from_toml(
            r#"
[[call]]
component = "heading"
text = "Account"

[[call]]
component = "checkbox"
opts = { name = "agree", label = "I agree", checked = true }

[[call]]
component = "raw"
html = "<hr>"
"#,
        )
        .unwrap();
        assert_eq!(page.call.len(), 3);

        let mut helper = Helper::default();
        page.apply(&mut helper);
        let html = helper.finish().unwrap();
        assert!(html.starts_with(r#"<h2 class="heading ">Account</h2><label class="checkbox">"#));
        assert!(html.contains(r#"checked="checked""#));
        assert!(html.ends_with("</label><hr>"));
    }

    #[test]
    fn test_json_page_with_tabs() {
        let page = Page::from_json(
            r#"{"call": [
                {"component": "tabs_open", "tabs": {"one": "One", "two": "Two"}},
                {"component": "tab_open", "key": "one"},
                {"component": "p", "text": "First"},
                {"component": "tab_close"},
                {"component": "tabs_close"}
            ]}"#,
        )
        .unwrap();

        let mut helper = Helper::default();
        page.apply(&mut helper);
        let html = helper.finish().unwrap();
        assert!(html.contains(r#"<div class="tab-pane active" id="tab_one"><p>First</p></div>"#));
        assert!(html.ends_with("</div></div></div>"));
    }

    #[test]
    fn test_help_is_buffered_by_page() {
        let page = Page::from_toml(
            r#"
[[call]]
component = "help"
content = "Required"
"#,
        )
        .unwrap();
        let mut helper = Helper::default();
        page.apply(&mut helper);
        assert_eq!(
            helper.render(),
            r#"<span class="help-inline">Required</span>"#
        );
    }

    #[test]
    fn test_unknown_component_is_error() {
        let err = Page::from_toml("[[call]]\ncomponent = \"carousel\"\n").unwrap_err();
        assert!(matches!(err, CliError::Page(_)));
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.yaml");
        std::fs::write(&path, "call: []").unwrap();
        assert!(matches!(Page::load(&path), Err(CliError::Page(_))));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        std::fs::write(&path, r#"{"call": [{"component": "gap"}]}"#).unwrap();
        let page = Page::load(&path).unwrap();
        assert_eq!(page.call.len(), 1);
    }
}
