//! Form controls, form wrappers and control groups.

use crate::attrs::AttributeMap;
use crate::context::DEFAULT_FORM_TAG;
use crate::helper::Helper;
use crate::options::{DefaultSpec, OptionBag, RETURN_ONLY, id_for_name, resolve};
use crate::value::Value;

use super::{classes, enumerated};

/// Layout classes accepted by [`Helper::form_open`].
const FORM_TYPES: &[&str] = &["vertical", "horizontal", "inline", "search"];

/// Input type shared by checkboxes and radios.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceKind {
    Checkbox,
    Radio,
}

impl ChoiceKind {
    /// Input `type` attribute, also used as the label class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
        }
    }
}

impl Helper {
    /// Checkbox input, optionally wrapped in a label.
    ///
    /// Options: `name`, `id`, `value` (default `1`), `checked`, `disabled`,
    /// `label`, `inline`, `explain`.
    pub fn checkbox(&mut self, opts: &OptionBag) -> String {
        self.choice(ChoiceKind::Checkbox, opts)
    }

    /// Alias of [`Helper::checkbox`].
    pub fn bool_field(&mut self, opts: &OptionBag) -> String {
        self.checkbox(opts)
    }

    /// Alias of [`Helper::checkbox`].
    pub fn boolean(&mut self, opts: &OptionBag) -> String {
        self.checkbox(opts)
    }

    /// Radio input; same options as [`Helper::checkbox`].
    pub fn radio(&mut self, opts: &OptionBag) -> String {
        self.choice(ChoiceKind::Radio, opts)
    }

    /// Shared implementation of checkbox and radio inputs.
    pub fn choice(&mut self, kind: ChoiceKind, opts: &OptionBag) -> String {
        let mut o = resolve(
            opts,
            &DefaultSpec::new()
                .plain("disabled", false)
                .plain("checked", false)
                .plain("label", "")
                .plain("value", 1)
                .plain("inline", false)
                .plain("explain", ""),
        );
        o.derive_id(true);
        let disabled = o.is_truthy("disabled");

        let mut attrs = AttributeMap::new().with("type", kind.as_str());
        if o.is_truthy("name") {
            attrs.insert("name", o.get("name").clone());
            attrs.insert("id", o.get("id").clone());
        }
        // Integer 0 is kept as "0" under the loose policy.
        let value = o.get("value");
        if !value.is_null() {
            attrs.insert("value", value.to_attr_string());
        }
        if o.is_truthy("checked") {
            attrs.insert("checked", "checked");
        }
        if disabled {
            attrs.insert("disabled", "disabled");
        }

        let input = self.tags.open("input", &attrs);
        let mut html = if o.is_blank("label") {
            input
        } else {
            let class = classes([
                kind.as_str(),
                if disabled { "muted" } else { "" },
                if o.is_truthy("inline") { "inline" } else { "" },
            ]);
            let label = self
                .tags
                .open("label", &AttributeMap::new().with("class", class));
            format!("{label}{input}\n{}</label>", o.string("label"))
        };
        html.push_str(&self.explain(&o.string("explain"), &OptionBag::new()));

        self.emit(html, o.is_return_only())
    }

    /// A group of radios sharing `name`, buffered as one fragment.
    ///
    /// Each entry of `radios` is a radio option bag (usually `value` and
    /// `label`). A radio is checked when its value loosely equals `selected`,
    /// so `"0"` matches `0`. A value of `0` is always emitted as `value="0"`. Options: `disabled`, `inline`, `explain`, applied
    /// to every radio unless the radio sets its own.
    pub fn radio_list(
        &mut self,
        name: &str,
        selected: impl Into<Value>,
        radios: &[OptionBag],
        opts: &OptionBag,
    ) -> String {
        let selected = selected.into();
        let o = resolve(
            opts,
            &DefaultSpec::new()
                .plain("disabled", false)
                .plain("inline", false)
                .plain("explain", ""),
        );

        let mut html = String::new();
        for radio in radios {
            let value = radio.get("value").cloned().unwrap_or(Value::Null);
            let child = resolve(
                radio,
                &DefaultSpec::new()
                    .plain(RETURN_ONLY, true)
                    .plain("checked", selected.loose_eq(&value))
                    .plain("inline", o.get("inline").clone())
                    .plain("disabled", o.get("disabled").clone())
                    .plain("name", name),
            );
            html.push_str(&self.radio(child.as_bag()));
        }
        html.push_str(&self.explain(&o.string("explain"), &OptionBag::new()));

        self.emit(html, o.is_return_only())
    }

    /// Yes/No radio pair with values `1` and `0`.
    pub fn radio_bool(
        &mut self,
        name: &str,
        selected: impl Into<Value>,
        opts: &OptionBag,
    ) -> String {
        let radios = [
            OptionBag::new().with("value", "1").with("label", "Yes"),
            OptionBag::new().with("value", "0").with("label", "No"),
        ];
        self.radio_list(name, selected, &radios, opts)
    }

    /// Text input with optional label and prepend/append add-ons.
    ///
    /// Options: `name`, `id`, `value`, `placeholder`, `class`, `disabled`,
    /// `label`, `prepend`, `append`.
    pub fn text(&mut self, opts: &OptionBag) -> String {
        let mut o = resolve(
            opts,
            &DefaultSpec::new()
                .plain("disabled", false)
                .plain("label", "")
                .plain("value", "")
                .plain("placeholder", "")
                .plain("prepend", "")
                .plain("append", ""),
        );
        o.derive_id(false);
        let disabled = o.is_truthy("disabled");

        let mut attrs = AttributeMap::new().with("type", "text");
        if o.is_truthy("name") {
            attrs.insert("name", o.get("name").clone());
            attrs.insert("id", o.get("id").clone());
        }
        attrs.insert("value", o.get("value").clone());
        attrs.insert("placeholder", o.get("placeholder").clone());
        if o.is_truthy("class") {
            attrs.insert("class", o.get("class").clone());
        }
        if disabled {
            attrs.insert("disabled", "disabled");
        }

        let mut html = String::new();
        if !o.is_blank("label") {
            html.push_str(&self.field_label(&o.string("label"), o.get("id"), disabled));
        }

        let has_prepend = !o.is_blank("prepend");
        let has_append = !o.is_blank("append");
        let add_on = AttributeMap::new().with("class", "add-on");
        if has_prepend || has_append {
            let class = classes([
                if has_prepend { "input-prepend" } else { "" },
                if has_append { "input-append" } else { "" },
            ]);
            html.push_str(&self.tags.open("div", &AttributeMap::new().with("class", class)));
        }
        if has_prepend {
            html.push_str(&self.tags.full("span", &o.string("prepend"), &add_on));
        }
        html.push_str(&self.tags.open("input", &attrs));
        if has_append {
            html.push_str(&self.tags.full("span", &o.string("append"), &add_on));
        }
        if has_prepend || has_append {
            html.push_str("</div>");
        }

        self.emit(html, o.is_return_only())
    }

    /// Alias of [`Helper::text`].
    pub fn textbox(&mut self, opts: &OptionBag) -> String {
        self.text(opts)
    }

    /// Alias of [`Helper::select`].
    pub fn dropdown(&mut self, opts: &OptionBag) -> String {
        self.select(opts)
    }

    /// Alias of [`Helper::select`].
    pub fn pulldown(&mut self, opts: &OptionBag) -> String {
        self.select(opts)
    }

    /// Select box.
    ///
    /// `options` is an ordered map of option value to either a label or a
    /// bag `{label, ...attrs}`; a list is keyed by position. The option whose
    /// stringified value equals the stringified `value` option is selected.
    /// `none_option` prepends a `None` entry valued `none_value` (default `"0"`)
    /// unless an option already uses that key. Only the first match is selected.
    pub fn select(&mut self, opts: &OptionBag) -> String {
        let mut o = resolve(
            opts,
            &DefaultSpec::new()
                .plain("disabled", false)
                .plain("label", "")
                .plain("value", "")
                .plain("options", OptionBag::new())
                .plain("none_option", false)
                .plain("none_value", "0"),
        );
        o.derive_id(false);
        let disabled = o.is_truthy("disabled");

        let mut attrs = AttributeMap::new();
        if o.is_truthy("name") {
            attrs.insert("name", o.get("name").clone());
            attrs.insert("id", o.get("id").clone());
        }
        if o.is_truthy("class") {
            attrs.insert("class", o.get("class").clone());
        }
        if disabled {
            attrs.insert("disabled", "disabled");
        }

        let mut html = String::new();
        if !o.is_blank("label") {
            html.push_str(&self.field_label(&o.string("label"), o.get("id"), disabled));
        }

        let mut entries = option_entries(o.get("options"));
        if o.is_truthy("none_option") {
            let none_value = o.string("none_value");
            if entries.iter().any(|(key, _)| *key == none_value) {
                tracing::debug!(none_value = %none_value, "Skipping None entry, value is already an option key");
            } else {
                entries.insert(0, (none_value, Value::from("None")));
            }
        }

        let current = Value::Str(o.string("value"));
        let mut selected = false;
        let mut options = String::new();
        for (key, label) in entries {
            let mut option_attrs = AttributeMap::new().with("value", key.as_str());
            if !selected && Value::Str(key).loose_eq(&current) {
                option_attrs.insert("selected", "selected");
                selected = true;
            }
            let text = match label {
                Value::Map(mut extra) => {
                    let text = extra.remove("label").unwrap_or(Value::Null);
                    option_attrs.extend_missing(&extra);
                    text.to_attr_string()
                }
                other => other.to_attr_string(),
            };
            options.push_str(&self.tags.full("option", &text, &option_attrs));
        }
        html.push_str(&self.tags.full("select", &options, &attrs));

        self.emit(html, o.is_return_only())
    }

    /// Hidden input. Extra options become attributes after `type`, `id`,
    /// `name` and `value`, without overriding them.
    pub fn hidden(&mut self, name: &str, value: impl Into<Value>, opts: &OptionBag) -> String {
        let mut attrs = AttributeMap::new()
            .with("type", "hidden")
            .with("id", id_for_name(name, None))
            .with("name", name)
            .with("value", value);
        attrs.extend_missing(opts);
        let html = self.tags.open("input", &attrs);
        self.emit(html, opts.is_return_only())
    }

    /// Button input with the `btn` class.
    ///
    /// Options: `type` (default `button`), `class` (appended after `btn`),
    /// `name`, `id`, `value`, `disabled`.
    pub fn button(&mut self, opts: &OptionBag) -> String {
        let mut o = resolve(
            opts,
            &DefaultSpec::new()
                .plain("disabled", false)
                .plain("value", ""),
        );
        o.derive_id(false);

        let kind = if o.is_truthy("type") {
            o.string("type")
        } else {
            "button".to_owned()
        };
        let mut attrs = AttributeMap::new().with("type", kind);
        if o.is_truthy("name") {
            attrs.insert("name", o.get("name").clone());
            attrs.insert("id", o.get("id").clone());
        }
        attrs.insert("value", o.get("value").clone());
        attrs.insert("class", classes(["btn", o.string("class").as_str()]));
        if o.is_truthy("disabled") {
            attrs.insert("disabled", "disabled");
        }

        let html = self.tags.open("input", &attrs);
        self.emit(html, o.is_return_only())
    }

    /// Submit button: `type=submit`, `name=submit`, `value=Submit` unless overridden.
    pub fn submit(&mut self, opts: &OptionBag) -> String {
        let o = resolve(
            opts,
            &DefaultSpec::new()
                .plain("type", "submit")
                .plain("name", "submit")
                .plain("value", "Submit"),
        );
        self.button(o.as_bag())
    }

    /// Open a form (or form-like element) and remember its tag.
    ///
    /// Options: `tag` (default `form`), `action`, `method` (default `post`),
    /// `type` (`vertical`, `horizontal`, `inline`, `search`; anything else
    /// drops the layout class). `action` and `method` are only emitted on
    /// `form` tags.
    pub fn form_open(&mut self, opts: &OptionBag) -> String {
        let o = resolve(
            opts,
            &DefaultSpec::new()
                .plain("tag", DEFAULT_FORM_TAG)
                .plain("action", "")
                .plain("method", "post")
                .plain("type", "vertical"),
        );
        let form_type = enumerated("type", o.get("type"), FORM_TYPES, "");
        let tag = if o.is_blank("tag") {
            DEFAULT_FORM_TAG.to_owned()
        } else {
            o.string("tag").trim().to_owned()
        };
        self.context.push_form(tag.as_str());

        let mut attrs = AttributeMap::new();
        if !form_type.is_empty() {
            attrs.insert("class", format!("form-{form_type}"));
        }
        if tag == DEFAULT_FORM_TAG {
            attrs.insert("action", o.get("action").clone());
            attrs.insert("method", o.get("method").clone());
        }

        let html = self.tags.open(&tag, &attrs);
        self.emit(html, o.is_return_only())
    }

    /// Close the innermost form, or `tag` when it is non-blank.
    ///
    /// Either way one level of the form stack is popped.
    pub fn form_close(&mut self, tag: &str) -> String {
        if self.context.form_depth() == 0 && tag.trim().is_empty() {
            tracing::warn!("form_close called with no open form, closing <form>");
        }
        let open_tag = self.context.pop_form();
        let tag = if tag.trim().is_empty() {
            open_tag
        } else {
            tag.trim().to_owned()
        };
        let html = self.tags.close(&tag);
        self.emit(html, false)
    }

    /// Open a control group: wrapper, optional control label, controls div.
    pub fn control_group_open(&mut self, label: &str, class: &str) -> String {
        let mut html = self.tags.open(
            "div",
            &AttributeMap::new().with("class", classes(["control-group", class])),
        );
        if !label.trim().is_empty() {
            html.push_str(&self.tags.full(
                "label",
                label,
                &AttributeMap::new().with("class", "control-label"),
            ));
        }
        html.push_str(&self.tags.open("div", &AttributeMap::new().with("class", "controls")));
        self.emit(html, false)
    }

    /// Close a control group, emitting `extra` (e.g. help text) first.
    pub fn control_group_close(&mut self, extra: &str) -> String {
        let html = format!("{}</div></div>", extra.trim());
        self.emit(html, false)
    }

    /// A complete control group around already-built `controls`.
    pub fn control_group(
        &mut self,
        label: &str,
        controls: &str,
        class: &str,
        extra: &str,
    ) -> String {
        let mut html = self.control_group_open(label, class);
        html.push_str(controls);
        self.buffer.store(controls, false);
        html.push_str(&self.control_group_close(extra));
        html
    }

    /// Help text span (`help-inline` by default, `help-block` with `inline=false`).
    ///
    /// Like [`Helper::explain`], help text is meant to be passed into another
    /// component and is never buffered on its own.
    pub fn help(&self, content: &str, opts: &OptionBag) -> String {
        let o = resolve(opts, &DefaultSpec::new().plain("inline", true));
        let class = if o.is_truthy("inline") {
            "help-inline"
        } else {
            "help-block"
        };
        self.tags
            .full("span", content, &AttributeMap::new().with("class", class))
    }

    /// `<label for=id>` line used by text inputs and selects.
    fn field_label(&self, label: &str, id: &Value, disabled: bool) -> String {
        let mut attrs = AttributeMap::new().with("for", id.clone());
        if disabled {
            attrs.insert("class", "muted");
        }
        let mut html = self.tags.full("label", label, &attrs);
        html.push('\n');
        html
    }
}

/// Flatten a select `options` value into `(value, label)` pairs.
fn option_entries(options: &Value) -> Vec<(String, Value)> {
    match options {
        Value::Map(bag) => bag.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        Value::List(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v.clone()))
            .collect(),
        Value::Null => Vec::new(),
        other => {
            tracing::debug!(options = %other, "Ignoring non-collection select options");
            Vec::new()
        }
    }
}
