mod common;

use selector_gen::scan::form_fields::{
    FieldIdentity, identify, is_form_field, is_reserved_token, remove_reserved_tokens,
};
use selector_gen::{Category, SelectorMap, scan_html};

use crate::common::utils::{entries, read_fixture};

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =========================================================================
// Id / name / test-id passes
// =========================================================================

#[test]
fn id_pass_normalizes_key() {
    let tables = scan_html(r#"<input id="user-name">"#);
    assert_eq!(tables.ids.get("userName"), Some("#user-name"));
}

#[test]
fn id_pass_last_write_wins() {
    let tables = scan_html(r#"<div id="dup"></div><span id="dup!"></span>"#);
    assert_eq!(tables.ids.len(), 1);
    assert_eq!(
        tables.ids.get("dup"),
        Some("#dup!"),
        "Second element in document order wins"
    );
}

#[test]
fn id_pass_skips_empty_keys() {
    let tables = scan_html(r#"<div id="---"></div><div id=""></div><p id="ok"></p>"#);
    assert_eq!(entries(&tables.ids), pairs(&[("ok", "#ok")]));
}

#[test]
fn name_pass_last_write_wins() {
    let tables = scan_html(r#"<input name="user-name"><input name="user_name">"#);
    assert_eq!(tables.names.get("userName"), Some(r#"[name="user_name"]"#));
}

#[test]
fn test_id_pass() {
    let tables = scan_html(r#"<div data-testid="main-nav"><span data-testid="badge"></span></div>"#);
    assert_eq!(
        entries(&tables.test_ids),
        pairs(&[
            ("badge", r#"[data-testid="badge"]"#),
            ("mainNav", r#"[data-testid="main-nav"]"#),
        ])
    );
}

#[test]
fn test_id_pass_last_write_wins() {
    let tables = scan_html(r#"<nav data-testid="main-nav"></nav><nav data-testid="main_nav"></nav>"#);
    assert_eq!(
        entries(&tables.test_ids),
        pairs(&[("mainNav", r#"[data-testid="main_nav"]"#)]),
        "Second element in document order wins"
    );
}

#[test]
fn same_element_feeds_several_tables() {
    let tables = scan_html(r#"<input id="email" name="email" data-testid="email">"#);
    assert_eq!(tables.ids.get("email"), Some("#email"));
    assert_eq!(tables.names.get("email"), Some(r#"[name="email"]"#));
    assert_eq!(tables.test_ids.get("email"), Some(r#"[data-testid="email"]"#));
    assert_eq!(tables.form_fields.get("email"), Some(r#"[data-testid="email"]"#));
}

// =========================================================================
// Label pass
// =========================================================================

#[test]
fn label_pass_concatenates_text_and_for() {
    let tables = scan_html(r#"<label for="email">Email Address</label><input id="email">"#);
    assert_eq!(
        tables.labels.get("emailAddressemail"),
        Some(r#"label[for="email"] + *"#)
    );
}

#[test]
fn label_pass_trims_and_reads_nested_text() {
    let tables = scan_html(r#"<label for="pw">  Your <b>Password</b>  </label>"#);
    assert_eq!(
        entries(&tables.labels),
        pairs(&[("yourPasswordpw", r#"label[for="pw"] + *"#)])
    );
}

#[test]
fn label_pass_last_write_wins() {
    // "A" + "b" and "" + "ab" both normalize to "ab"
    let tables = scan_html(r#"<label for="b">A</label><label for="ab"></label>"#);
    assert_eq!(
        entries(&tables.labels),
        pairs(&[("ab", r#"label[for="ab"] + *"#)])
    );
}

#[test]
fn label_pass_skips_labels_without_for() {
    let tables = scan_html(r#"<label>Remember me</label><label for="">Blank</label>"#);
    assert!(tables.labels.is_empty());
}

// =========================================================================
// Form-field pass
// =========================================================================

#[test]
fn form_field_test_id_beats_name() {
    let tables = scan_html(r#"<input data-testid="submit-btn" name="ignored">"#);
    assert_eq!(
        entries(&tables.form_fields),
        pairs(&[("submitBtn", r#"[data-testid="submit-btn"]"#)])
    );
}

#[test]
fn form_field_name_and_id_are_first_write_wins() {
    let tables = scan_html(r#"<input name="email"><input id="email"><select name="e-mail"></select>"#);
    assert_eq!(
        tables.form_fields.get("email"),
        Some(r#"[name="email"]"#),
        "Later name/id entries do not overwrite"
    );
}

#[test]
fn form_field_test_id_overwrites_earlier_name() {
    let tables = scan_html(r#"<input name="email"><textarea data-testid="email"></textarea>"#);
    assert_eq!(tables.form_fields.get("email"), Some(r#"[data-testid="email"]"#));
}

#[test]
fn form_field_id_tier_uses_attribute_selector() {
    let tables = scan_html(r#"<button id="save-btn">Save</button>"#);
    assert_eq!(tables.form_fields.get("saveBtn"), Some(r#"[id="save-btn"]"#));
}

#[test]
fn form_field_empty_attributes_count_as_absent() {
    let tables = scan_html(r#"<input data-testid="" name="city">"#);
    assert_eq!(tables.form_fields.get("city"), Some(r#"[name="city"]"#));
}

#[test]
fn form_field_ignores_non_form_elements() {
    let tables = scan_html(r#"<div name="panel" data-testid="panel"></div><a id="home"></a>"#);
    assert!(tables.form_fields.is_empty());
}

#[test]
fn form_field_anonymous_entries_are_cleaned_up() {
    let tables = scan_html(
        r#"<form class="login"><input type="checkbox"><input type="hidden"><button>Go</button></form>"#,
    );
    assert!(tables.form_fields.is_empty());
}

#[test]
fn form_field_anonymous_entry_overwrites_then_is_removed() {
    // The anonymous input's key "html body input" collides with the name entry
    let tables = scan_html(r#"<html><body><input name="htmlBodyInput"><input></body></html>"#);
    assert_eq!(
        tables.names.get("htmlBodyInput"),
        Some(r#"[name="htmlBodyInput"]"#)
    );
    assert!(
        tables.form_fields.is_empty(),
        "Fallback overwrote the name entry and cleanup dropped it: {:?}",
        tables.form_fields
    );
}

#[test]
fn form_field_values_never_reserved() {
    let tables = scan_html(&read_fixture("login.html"));
    for (key, selector) in tables.form_fields.iter() {
        assert!(!is_reserved_token(selector), "{key} kept reserved value {selector}");
    }
}

#[test]
fn identify_priority() {
    let document = scraper::Html::parse_document(
        r#"<input data-testid="t" name="n" id="i"><input name="n" id="i"><input id="i"><input>"#,
    );
    let selector = scraper::Selector::parse("input").unwrap();
    let identities: Vec<FieldIdentity> = document.select(&selector).map(|el| identify(&el)).collect();
    assert_eq!(
        identities,
        vec![
            FieldIdentity::TestId("t"),
            FieldIdentity::Name("n"),
            FieldIdentity::Id("i"),
            FieldIdentity::Anonymous,
        ]
    );
}

#[test]
fn is_form_field_tags() {
    let document = scraper::Html::parse_document(
        r#"<input type="file"><datalist></datalist><legend></legend><div></div><span></span>"#,
    );
    let selector = scraper::Selector::parse("input, datalist, legend, div, span").unwrap();
    let flags: Vec<bool> = document.select(&selector).map(|el| is_form_field(&el)).collect();
    assert_eq!(flags, vec![true, true, true, false, false]);
}

#[test]
fn remove_reserved_tokens_only_drops_bare_tokens() {
    let mut map: SelectorMap = [
        ("htmlBodyInput", "input"),
        ("htmlBodyOption", "option"),
        ("email", r#"[name="email"]"#),
        ("odd", "hidden"),
    ]
    .into_iter()
    .collect();
    remove_reserved_tokens(&mut map);
    assert_eq!(entries(&map), pairs(&[("email", r#"[name="email"]"#)]));
}

// =========================================================================
// Whole document
// =========================================================================

#[test]
fn scan_login_fixture() {
    let tables = scan_html(&read_fixture("login.html"));

    assert_eq!(
        entries(&tables.ids),
        pairs(&[
            ("email", "#email"),
            ("loginForm", "#login-form"),
            ("optCa", "#opt-ca"),
            ("password", "#password"),
            ("siteHeader", "#site-header"),
        ])
    );
    assert_eq!(
        entries(&tables.names),
        pairs(&[
            ("country", r#"[name="country"]"#),
            ("ignored", r#"[name="ignored"]"#),
            ("login", r#"[name="login"]"#),
            ("password", r#"[name="password"]"#),
            ("userEmail", r#"[name="user_email"]"#),
        ])
    );
    assert_eq!(
        entries(&tables.test_ids),
        pairs(&[
            ("mainNav", r#"[data-testid="main-nav"]"#),
            ("passwordInput", r#"[data-testid="password-input"]"#),
            ("submitBtn", r#"[data-testid="submit-btn"]"#),
        ])
    );
    assert_eq!(
        entries(&tables.labels),
        pairs(&[
            ("emailAddressemail", r#"label[for="email"] + *"#),
            ("passwordpassword", r#"label[for="password"] + *"#),
        ])
    );
    assert_eq!(
        entries(&tables.form_fields),
        pairs(&[
            ("country", r#"[name="country"]"#),
            ("optCa", r#"[id="opt-ca"]"#),
            ("passwordInput", r#"[data-testid="password-input"]"#),
            ("submitBtn", r#"[data-testid="submit-btn"]"#),
            ("userEmail", r#"[name="user_email"]"#),
        ])
    );
    assert_eq!(tables.total_entries(), 20);
}

#[test]
fn tables_iterate_in_category_order() {
    let tables = scan_html("<p></p>");
    let names: Vec<&str> = tables.iter().map(|(c, _)| c.module_name()).collect();
    assert_eq!(
        names,
        vec![
            "idSelectors",
            "nameSelectors",
            "testIdSelectors",
            "labelSelectors",
            "formFieldSelectors",
        ]
    );
    assert!(tables.get(Category::FormField).is_empty());
}
