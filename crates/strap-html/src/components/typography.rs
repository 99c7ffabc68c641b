//! Headings, explain popovers and simple tags.

use crate::attrs::AttributeMap;
use crate::helper::Helper;
use crate::options::{DefaultSpec, OptionBag, resolve};

impl Helper {
    /// Question-mark icon anchor carrying `content` for a JS popover.
    ///
    /// Returns an empty string for blank content. Never buffered on its own:
    /// components embed it in their fragment.
    pub fn explain(&self, content: &str, opts: &OptionBag) -> String {
        if content.trim().is_empty() {
            return String::new();
        }
        let o = resolve(opts, &DefaultSpec::new().prefix("class", "explain "));
        let attrs = AttributeMap::new()
            .with("class", o.get("class").clone())
            .with("title", "What's this?")
            .with("data-content", content);
        self.tags
            .full("a", r#"<i class="icon-question-sign">&nbsp;</i>"#, &attrs)
    }

    /// `<h1>` page heading.
    pub fn page_heading(&mut self, text: &str, opts: &OptionBag) -> String {
        self.heading_tag("h1", text, opts)
    }

    /// `<h2>` section heading.
    pub fn heading(&mut self, text: &str, opts: &OptionBag) -> String {
        self.heading_tag("h2", text, opts)
    }

    /// `<h3>` heading with an extra `subheading` class.
    pub fn subheading(&mut self, text: &str, opts: &OptionBag) -> String {
        let mut opts = opts.clone();
        let class = match opts.get("class").filter(|c| !c.is_null()) {
            Some(class) => format!("subheading {class}"),
            None => "subheading".to_owned(),
        };
        opts.insert("class", class);
        self.heading_tag("h3", text, &opts)
    }

    /// Shared heading implementation.
    ///
    /// Options: `class` (prefixed with `heading `), `explain` (rendered inline
    /// after the text).
    fn heading_tag(&mut self, tag: &str, text: &str, opts: &OptionBag) -> String {
        let o = resolve(
            opts,
            &DefaultSpec::new()
                .prefix("class", "heading ")
                .plain("explain", ""),
        );
        let mut content = text.to_owned();
        let explain = o.string("explain");
        if !explain.trim().is_empty() {
            content.push(' ');
            content.push_str(
                &self.explain(&explain, &OptionBag::new().with("class", "heading-explain")),
            );
        }
        let html = self.tags.full(
            tag,
            &content,
            &AttributeMap::new().with("class", o.get("class").clone()),
        );
        self.emit(html, o.is_return_only())
    }

    /// Paragraph; options become attributes.
    pub fn p(&mut self, text: &str, opts: &OptionBag) -> String {
        self.tag("p", text, opts)
    }

    /// `<h4>`; options become attributes.
    pub fn h4(&mut self, text: &str, opts: &OptionBag) -> String {
        self.tag("h4", text, opts)
    }

    /// Image; options become attributes, `src` is added unless given.
    pub fn img(&mut self, src: &str, opts: &OptionBag) -> String {
        let mut attrs = AttributeMap::from(opts);
        attrs.insert_missing("src", src);
        let html = self.tags.open("img", &attrs);
        self.emit(html, opts.is_return_only())
    }

    /// Line break.
    pub fn gap(&mut self, opts: &OptionBag) -> String {
        self.emit("<br>".to_owned(), opts.is_return_only())
    }

    /// Font icon `<i class="icon-NAME"></i>`.
    pub fn icon(&mut self, name: &str, opts: &OptionBag) -> String {
        let html = self.tags.full(
            "i",
            "",
            &AttributeMap::new().with("class", format!("icon-{name}")),
        );
        self.emit(html, opts.is_return_only())
    }

    /// Generic element for any tag name without a dedicated component.
    ///
    /// Every option except `return_only` becomes an attribute.
    pub fn tag(&mut self, name: &str, content: &str, opts: &OptionBag) -> String {
        let html = self.tags.full(name, content, &AttributeMap::from(opts));
        self.emit(html, opts.is_return_only())
    }
}
