use log::debug;
use scraper::{ElementRef, Html};

use crate::key::camel_case_key;
use crate::selector::attribute_selector;
use crate::selector::synth::fallback_key_source;

use super::scanner::elements;
use super::scan_model::SelectorMap;

/// Tags scanned by the form-field pass.
pub const FORM_FIELD_TAGS: [&str; 9] = [
    "input", "select", "textarea", "button", "fieldset", "legend", "optgroup", "option",
    "datalist",
];

/// `input[type]` values the cleanup step also treats as reserved.
///
/// Inputs of these types are already scanned through the `input` tag, so the
/// list only matters when matching stored selectors.
pub const FORM_INPUT_TYPES: [&str; 5] = ["file", "submit", "reset", "image", "hidden"];

/// Is `selector` one of the bare tag/type tokens the cleanup step discards?
pub fn is_reserved_token(selector: &str) -> bool {
    FORM_FIELD_TAGS.contains(&selector) || FORM_INPUT_TYPES.contains(&selector)
}

pub fn is_form_field(el: &ElementRef) -> bool {
    FORM_FIELD_TAGS.contains(&el.value().name())
}

/// How a form field is identified, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIdentity<'a> {
    TestId(&'a str),
    Name(&'a str),
    Id(&'a str),
    /// No identifying attribute; keyed by its ancestor path.
    Anonymous,
}

/// Blank attribute values count as absent.
pub fn identify<'a>(el: &ElementRef<'a>) -> FieldIdentity<'a> {
    if let Some(test_id) = non_empty_attr(el, "data-testid") {
        FieldIdentity::TestId(test_id)
    } else if let Some(name) = non_empty_attr(el, "name") {
        FieldIdentity::Name(name)
    } else if let Some(id) = non_empty_attr(el, "id") {
        FieldIdentity::Id(id)
    } else {
        FieldIdentity::Anonymous
    }
}

fn non_empty_attr<'a>(el: &ElementRef<'a>, attr: &str) -> Option<&'a str> {
    el.value().attr(attr).filter(|v| !v.is_empty())
}

/// Form-field pass.
///
/// `data-testid` entries always overwrite; `name` and `id` entries only fill
/// keys that are still free. Anonymous fields are stored under an
/// ancestor-path key with their bare tag as value, then removed again by the
/// reserved-token cleanup.
pub fn scan_form_fields(document: &Html) -> SelectorMap {
    let mut map = SelectorMap::new();

    for el in elements(document).filter(is_form_field) {
        match identify(&el) {
            FieldIdentity::TestId(test_id) => {
                if let Some(key) = field_key(test_id) {
                    map.insert(key, attribute_selector("data-testid", test_id));
                }
            }
            FieldIdentity::Name(name) => {
                if let Some(key) = field_key(name) {
                    map.insert_if_absent(key, attribute_selector("name", name));
                }
            }
            FieldIdentity::Id(id) => {
                if let Some(key) = field_key(id) {
                    map.insert_if_absent(key, attribute_selector("id", id));
                }
            }
            FieldIdentity::Anonymous => {
                let tag = el.value().name().to_ascii_lowercase();
                if let Some(key) = field_key(&fallback_key_source(&el)) {
                    map.insert(key, tag);
                }
            }
        }
    }

    remove_reserved_tokens(&mut map);
    map
}

/// Drop every entry whose selector collapsed to a bare tag/type token.
pub fn remove_reserved_tokens(map: &mut SelectorMap) {
    map.retain(|key, selector| {
        let reserved = is_reserved_token(selector);
        if reserved {
            debug!("formFieldSelectors: dropping {} -> {}", key, selector);
        }
        !reserved
    });
}

fn field_key(raw: &str) -> Option<String> {
    let key = camel_case_key(raw);
    if key.is_empty() {
        debug!("formFieldSelectors: skipping \"{}\" (empty key)", raw);
        None
    } else {
        Some(key)
    }
}
