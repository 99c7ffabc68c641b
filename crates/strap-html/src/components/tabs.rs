//! Bootstrap tab groups.
//!
//! A group is opened with its navigation list, panes are opened and closed
//! inside it, and the group is closed last. Groups nest; each pane compares
//! its key with the innermost group's active id.

use indexmap::IndexMap;

use crate::attrs::AttributeMap;
use crate::helper::Helper;
use crate::options::{DefaultSpec, OptionBag, resolve};
use crate::value::Value;

use super::{classes, enumerated};

const DIRECTIONS: &[&str] = &["", "above", "left", "right", "below"];
const TAB_TYPES: &[&str] = &["tabs", "pills"];

fn pane_id(key: &str) -> String {
    format!("tab_{key}")
}

impl Helper {
    /// Open a tab group and render its navigation.
    ///
    /// `tabs` maps pane keys to titles in display order. Options: `direction`
    /// (`above`, `left`, `right`, `below`), `type` (`tabs` or `pills`),
    /// `active` (defaults to the first key).
    pub fn tabs_open(&mut self, tabs: &IndexMap<String, String>, opts: &OptionBag) -> String {
        let first = tabs.keys().next().map_or(Value::Null, Value::from);
        let o = resolve(
            opts,
            &DefaultSpec::new()
                .plain("direction", "above")
                .plain("type", "tabs")
                .plain("active", first),
        );
        let direction = enumerated("direction", o.get("direction"), DIRECTIONS, "above");
        let kind = enumerated("type", o.get("type"), TAB_TYPES, "tabs");
        let toggle = if kind == "pills" { "pill" } else { "tab" };
        let active = o.string("active");

        let direction_class = match direction.as_str() {
            "" | "above" => String::new(),
            dir => format!("tabs-{dir}"),
        };
        let mut html = self.tags.open(
            "div",
            &AttributeMap::new().with("class", classes(["tabbable", direction_class.as_str()])),
        );
        html.push_str(&self.tags.open(
            "ul",
            &AttributeMap::new().with("class", format!("nav nav-{kind}")),
        ));
        for (key, title) in tabs {
            let link = self.tags.full(
                "a",
                title,
                &AttributeMap::new()
                    .with("href", format!("#{}", pane_id(key)))
                    .with("data-toggle", toggle),
            );
            let item_attrs = if *key == active {
                AttributeMap::new().with("class", "active")
            } else {
                AttributeMap::new()
            };
            html.push_str(&self.tags.full("li", &link, &item_attrs));
        }
        html.push_str(&self.tags.close("ul"));
        html.push_str(
            &self
                .tags
                .open("div", &AttributeMap::new().with("class", "tab-content")),
        );

        tracing::debug!(active = %active, depth = self.context.tab_depth() + 1, "Opened tab group");
        self.context.push_tab_group(active);
        self.emit(html, o.is_return_only())
    }

    /// Close the innermost tab group.
    ///
    /// Without an open group this logs a warning and emits nothing.
    pub fn tabs_close(&mut self) -> String {
        if self.context.pop_tab_group().is_none() {
            tracing::warn!("Tab group closed without a matching open");
            return String::new();
        }
        let html = format!("{}{}", self.tags.close("div"), self.tags.close("div"));
        self.emit(html, false)
    }

    /// Open the pane for `key`, marked active when it is the innermost
    /// group's active tab.
    pub fn tab_open(&mut self, key: &str) -> String {
        let active = match self.context.active_tab() {
            Some(active) => active == key,
            None => {
                tracing::warn!(key, "Tab pane opened outside a tab group");
                false
            }
        };
        let class = classes(["tab-pane", if active { "active" } else { "" }]);
        let html = self.tags.open(
            "div",
            &AttributeMap::new()
                .with("class", class)
                .with("id", pane_id(key)),
        );
        self.emit(html, false)
    }

    pub fn tab_close(&mut self) -> String {
        let html = self.tags.close("div");
        self.emit(html, false)
    }
}
