//! End-to-end behavior of a helper session.

use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use strap_html::{
    AttributeMap, AttributePolicy, DefaultSpec, Helper, HelperError, HelperOptions, OptionBag,
    TagBuilder, Value, id_for_name, resolve,
};

fn tab_map(keys: &[&str]) -> IndexMap<String, String> {
    keys.iter()
        .map(|k| ((*k).to_owned(), k.to_uppercase()))
        .collect()
}

#[test]
fn test_loose_policy_omits_empty_equivalents() {
    let attrs = AttributeMap::new()
        .with("a", Value::Null)
        .with("b", false)
        .with("c", 0)
        .with("d", "")
        .with("e", "x")
        .with("f", "0");
    assert_eq!(attrs.serialize(AttributePolicy::Loose), r#" e="x" f="0""#);
}

#[test]
fn test_strict_policy_keeps_zero_and_empty() {
    let attrs = AttributeMap::new()
        .with("a", Value::Null)
        .with("b", false)
        .with("c", 0)
        .with("d", "");
    assert_eq!(attrs.serialize(AttributePolicy::Strict), r#" c="0" d="""#);
}

#[test]
fn test_prefix_merge() {
    let spec = DefaultSpec::new().prefix("class", "btn ");
    let caller = resolve(&OptionBag::new().with("class", "primary"), &spec);
    assert_eq!(caller.string("class"), "btn primary");
    let unset = resolve(&OptionBag::new(), &spec);
    assert_eq!(unset.string("class"), "btn ");
}

#[test]
fn test_id_derivation() {
    assert_eq!(id_for_name("user[email]", None), "user_email");
    assert_eq!(id_for_name("items[]", Some(&Value::from(3))), "items_3");
}

#[test]
fn test_checkbox_group_ids_are_distinct() {
    let mut helper = Helper::default();
    let a = helper.checkbox(&OptionBag::new().with("name", "tags[]").with("value", "a"));
    let b = helper.checkbox(&OptionBag::new().with("name", "tags[]").with("value", "b"));
    assert!(a.contains(r#"id="tags_a""#));
    assert!(b.contains(r#"id="tags_b""#));
}

#[test]
fn test_return_only_isolation() {
    let mut helper = Helper::new(true);
    helper.p("one", &OptionBag::new());
    let fragment = helper.p("two", &OptionBag::new().return_only());
    helper.p("three", &OptionBag::new());
    assert_eq!(fragment, "<p>two</p>");
    assert_eq!(helper.render(), "<p>one</p><p>three</p>");
}

#[test]
fn test_non_accumulating_session() {
    let mut helper = Helper::new(false);
    let html = helper.gap(&OptionBag::new());
    assert_eq!(html, "<br>");
    assert_eq!(helper.render(), "");
}

#[test]
fn test_tab_stack_integrity() {
    let mut helper = Helper::default();
    helper.tabs_open(&tab_map(&["a1", "shared"]), &OptionBag::new());
    helper.tabs_open(
        &tab_map(&["b1", "shared"]),
        &OptionBag::new().with("active", "shared"),
    );
    assert_eq!(
        helper.tab_open("shared"),
        r#"<div class="tab-pane active" id="tab_shared">"#
    );
    assert_eq!(
        helper.tab_open("a1"),
        r#"<div class="tab-pane" id="tab_a1">"#
    );
    helper.tab_close();
    helper.tab_close();
    helper.tabs_close();
    assert_eq!(helper.context().active_tab(), Some("a1"));
    helper.tabs_close();
    assert_eq!(helper.context().tab_depth(), 0);
    assert!(helper.finish().is_ok());
}

#[test]
fn test_select_selection() {
    let mut helper = Helper::default();
    let options: OptionBag = [("1", "One"), ("2", "Two")].into_iter().collect();
    let html = helper.select(
        &OptionBag::new()
            .with("name", "n")
            .with("options", options)
            .with("value", 2),
    );
    assert!(html.contains(r#"<option value="2" selected="selected">Two</option>"#));
    assert!(html.contains(r#"<option value="1">One</option>"#));
}

#[test]
fn test_labeled_checkbox_end_to_end() {
    let mut helper = Helper::new(true);
    let html = helper.checkbox(
        &OptionBag::new()
            .with("name", "agree")
            .with("label", "I agree")
            .with("checked", true),
    );
    assert!(html.contains(
        r#"<input type="checkbox" name="agree" id="agree_1" value="1" checked="checked">"#
    ));
    assert!(html.ends_with("\nI agree</label>"));
    assert_eq!(helper.render(), html);
    assert_eq!(helper.render(), "");
}

#[test]
fn test_nested_forms_close_in_order() {
    let mut helper = Helper::default();
    helper.form_open(&OptionBag::new().with("action", "/save"));
    helper.form_open(&OptionBag::new().with("tag", "fieldset"));
    assert_eq!(helper.form_close(""), "</fieldset>");
    assert_eq!(helper.form_close(""), "</form>");
    assert!(helper.finish().is_ok());
}

#[test]
fn test_finish_reports_open_structure() {
    let mut helper = Helper::default();
    helper.tabs_open(&tab_map(&["a"]), &OptionBag::new());
    assert!(matches!(
        helper.finish(),
        Err(HelperError::UnclosedTabGroups(1))
    ));

    let mut helper = Helper::default();
    helper.form_open(&OptionBag::new());
    assert!(matches!(helper.finish(), Err(HelperError::UnclosedForms(1))));
}

#[test]
fn test_render_to_writer() {
    let mut helper = Helper::default();
    helper.add("<hr>");
    let mut out = Vec::new();
    helper.render_to(&mut out).unwrap();
    assert_eq!(out, b"<hr>");
    assert!(helper.buffered().is_empty());
}

#[test]
fn test_strict_session_policy() {
    let mut helper = Helper::with_options(HelperOptions {
        accumulate: true,
        attribute_policy: AttributePolicy::Strict,
    });
    let html = helper.tag("span", "x", &OptionBag::new().with("data-count", 0));
    assert_eq!(html, r#"<span data-count="0">x</span>"#);
    assert_eq!(helper.tags(), TagBuilder::new(AttributePolicy::Strict));
}
