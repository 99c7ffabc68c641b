//! Bootstrap 2 markup helper.
//!
//! This crate turns loosely typed option bags into HTML fragments for a fixed
//! set of Bootstrap components (form controls, tab groups, thumbnails,
//! headings). A [`Helper`] session resolves each call's options against the
//! component's [`DefaultSpec`], serializes attributes through an
//! [`AttributeMap`], and optionally accumulates every fragment for one final
//! [`Helper::render`].
//!
//! # Architecture
//!
//! - [`resolve`] merges caller options with defaults (plain, prefix and
//!   implicit id derivation)
//! - [`AttributeMap`] and [`TagBuilder`] produce escaped, ordered markup
//! - [`RenderBuffer`] collects fragments unless a call is return-only
//! - [`RenderContext`] tracks open forms and the active tab of each nested
//!   tab group across calls
//!
//! # Example
//!
//! ```
//! use indexmap::IndexMap;
//! use strap_html::{Helper, OptionBag};
//!
//! let mut helper = Helper::new(true);
//! let tabs: IndexMap<String, String> =
//!     [("info".to_owned(), "Info".to_owned())].into_iter().collect();
//! helper.tabs_open(&tabs, &OptionBag::new());
//! helper.tab_open("info");
//! helper.p("Hello", &OptionBag::new());
//! helper.tab_close();
//! helper.tabs_close();
//! let html = helper.finish().unwrap();
//! assert!(html.contains(r#"<div class="tab-pane active" id="tab_info">"#));
//! ```

mod attrs;
mod buffer;
mod components;
mod context;
mod error;
mod helper;
mod options;
mod tag;
mod value;

pub use attrs::{AttributeMap, AttributePolicy, escape_html};
pub use buffer::RenderBuffer;
pub use components::ChoiceKind;
pub use context::{DEFAULT_FORM_TAG, RenderContext};
pub use error::HelperError;
pub use helper::{Helper, HelperOptions};
pub use options::{
    DefaultSpec, DefaultValue, OptionBag, RETURN_ONLY, ResolvedOptions, id_for_name, resolve,
};
pub use tag::TagBuilder;
pub use value::Value;
