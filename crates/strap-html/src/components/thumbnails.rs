//! Thumbnail cards and selectable thumbnail galleries.

use indexmap::IndexMap;

use crate::attrs::AttributeMap;
use crate::helper::Helper;
use crate::options::{DefaultSpec, OptionBag, RETURN_ONLY, id_for_name, resolve};
use crate::value::Value;

use super::classes;

impl Helper {
    /// Card with an image (or a holder.js placeholder), a name and a
    /// description.
    ///
    /// Options: `image`, `name` (default `Unknown`), `description`, `size`
    /// (placeholder dimensions, default `100x100`), `alt` (default
    /// `"<name> thumbnail"`).
    pub fn thumbnail(&mut self, opts: &OptionBag) -> String {
        let mut o = resolve(
            opts,
            &DefaultSpec::new()
                .plain("image", "")
                .plain("name", "Unknown")
                .plain("description", "")
                .plain("size", "100x100"),
        );
        if o.is_blank("alt") {
            let alt = format!("{} thumbnail", o.string("name"));
            o.set("alt", alt);
        }

        let mut img = AttributeMap::new();
        if o.is_blank("image") {
            img.insert(
                "data-src",
                format!("holder.js/{}/text:{}", o.string("size"), o.string("alt")),
            );
        } else {
            img.insert("src", o.get("image").clone());
        }
        img.insert("alt", o.get("alt").clone());

        let mut html = self
            .tags
            .open("div", &AttributeMap::new().with("class", "thumbnail"));
        html.push_str(&self.tags.open("img", &img));
        html.push_str(&self.tags.full("h4", &o.string("name"), &AttributeMap::new()));
        html.push_str(&self.tags.full("p", &o.string("description"), &AttributeMap::new()));
        html.push_str(&self.tags.close("div"));
        self.emit(html, o.is_return_only())
    }

    /// Shorthand for [`Helper::thumbnail`] with `image` given positionally.
    pub fn thumbnail_for(&mut self, image: &str, opts: &OptionBag) -> String {
        let mut opts = opts.clone();
        opts.insert("image", image);
        self.thumbnail(&opts)
    }

    /// Selectable gallery of thumbnails backed by a hidden input.
    ///
    /// `items` maps item ids to thumbnail options; an item with a truthy
    /// `disabled` is rendered muted. Options: `name` (hidden input name,
    /// default `thumbs`), `active` (selected id, defaults to and falls back
    /// to the first item), `size` (applied to every item).
    pub fn thumbnails(&mut self, items: &IndexMap<String, OptionBag>, opts: &OptionBag) -> String {
        let first = items.keys().next().map_or(Value::Null, Value::from);
        let mut o = resolve(
            opts,
            &DefaultSpec::new()
                .plain("name", "thumbs")
                .plain("active", first.clone())
                .plain("size", "100x100"),
        );
        let active = o.get("active").clone();
        if !items.keys().any(|id| Value::from(id).loose_eq(&active)) {
            tracing::debug!(active = %active, "Unknown active thumbnail, using first");
            o.set("active", first);
        }
        let active = o.get("active").clone();
        let name = o.string("name");
        let input_id = id_for_name(&name, None);

        let mut html = self.tags.open(
            "ul",
            &AttributeMap::new().with("class", "thumbnails clearfix"),
        );
        html.push_str(&self.hidden(&name, active.clone(), &OptionBag::new().return_only()));
        for (id, item) in items {
            let selected = Value::from(id).loose_eq(&active);
            let muted = item.get("disabled").is_some_and(Value::is_truthy);
            let class = classes([
                "span3 selectable",
                if selected { "selected" } else { "" },
                if muted { "muted" } else { "" },
            ]);
            html.push_str(&self.tags.open(
                "li",
                &AttributeMap::new()
                    .with("class", class)
                    .with("data-value", id)
                    .with("data-input", input_id.as_str()),
            ));

            let mut card = item.clone();
            if !card.is_set("size") {
                card.insert("size", o.get("size").clone());
            }
            if card.get("alt").is_none_or(Value::is_null) {
                card.insert("alt", item.get("name").cloned().unwrap_or(Value::Null));
            }
            card.insert(RETURN_ONLY, true);
            html.push_str(&self.thumbnail(&card));
            html.push_str(&self.tags.close("li"));
        }
        html.push_str(&self.tags.close("ul"));
        self.emit(html, o.is_return_only())
    }
}
