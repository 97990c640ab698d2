use log::{debug, info};
use scraper::{ElementRef, Html};

use crate::key::camel_case_key;
use crate::selector::{attribute_selector, id_selector, label_sibling_selector};

use super::form_fields::scan_form_fields;
use super::scan_model::{Category, SelectorMap, SelectorTables};

/// Parse `html` leniently and run every extraction pass over it.
pub fn scan_html(html: &str) -> SelectorTables {
    let document = Html::parse_document(html);
    scan_document(&document)
}

/// Run the five extraction passes over an already parsed document.
///
/// Passes are independent; an element may contribute to several tables.
pub fn scan_document(document: &Html) -> SelectorTables {
    let tables = SelectorTables {
        ids: scan_ids(document),
        names: scan_names(document),
        test_ids: scan_test_ids(document),
        labels: scan_labels(document),
        form_fields: scan_form_fields(document),
    };

    for (category, map) in tables.iter() {
        info!("{}: {} entries", category.module_name(), map.len());
    }

    tables
}

/// Every element of the document in document order.
pub fn elements(document: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
}

// ============================================================================
// Attribute passes (last write wins)
// ============================================================================

pub fn scan_ids(document: &Html) -> SelectorMap {
    scan_attribute(document, Category::Id, "id", id_selector)
}

pub fn scan_names(document: &Html) -> SelectorMap {
    scan_attribute(document, Category::Name, "name", |name| {
        attribute_selector("name", name)
    })
}

pub fn scan_test_ids(document: &Html) -> SelectorMap {
    scan_attribute(document, Category::TestId, "data-testid", |test_id| {
        attribute_selector("data-testid", test_id)
    })
}

fn scan_attribute<F>(document: &Html, category: Category, attr: &str, to_selector: F) -> SelectorMap
where
    F: Fn(&str) -> String,
{
    let mut map = SelectorMap::new();

    for el in elements(document) {
        let Some(value) = el.value().attr(attr) else {
            continue;
        };

        let key = camel_case_key(value);
        if key.is_empty() {
            debug!(
                "{}: skipping {}=\"{}\" (no alphanumeric characters)",
                category.module_name(),
                attr,
                value
            );
            continue;
        }

        map.insert(key, to_selector(value));
    }

    map
}

// ============================================================================
// Label pass
// ============================================================================

/// `<label for="x">Text</label>` → `textx` → `label[for="x"] + *`.
pub fn scan_labels(document: &Html) -> SelectorMap {
    let mut map = SelectorMap::new();

    for label in elements(document).filter(|el| el.value().name() == "label") {
        let Some(for_value) = label.value().attr("for").filter(|f| !f.is_empty()) else {
            continue;
        };

        let text: String = label.text().collect();
        let key = camel_case_key(&format!("{}{}", text.trim(), for_value));
        if key.is_empty() {
            debug!("labelSelectors: skipping label for=\"{}\" (empty key)", for_value);
            continue;
        }

        map.insert(key, label_sibling_selector(for_value));
    }

    map
}
