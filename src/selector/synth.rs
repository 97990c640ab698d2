use scraper::ElementRef;

// ============================================================================
// Attribute selectors
// ============================================================================

/// Build `[attr="value"]`.
///
/// The value is inserted verbatim. A value containing `"` yields a broken
/// selector; callers get exactly what the markup contained.
pub fn attribute_selector(attr: &str, value: &str) -> String {
    format!("[{}=\"{}\"]", attr, value)
}

/// Build `#id`.
pub fn id_selector(id: &str) -> String {
    format!("#{}", id)
}

/// Selector for whatever element immediately follows `<label for="...">`.
pub fn label_sibling_selector(for_value: &str) -> String {
    format!("label[for=\"{}\"] + *", for_value)
}

// ============================================================================
// Ancestor paths (form-field fallback)
// ============================================================================

/// Describe one ancestor as `tag#id.class1.class2`.
///
/// The `#id` and class parts are omitted when the attributes are missing or
/// blank.
pub fn ancestor_segment(el: &ElementRef) -> String {
    let value = el.value();
    let mut segment = value.name().to_ascii_lowercase();

    if let Some(id) = value.attr("id").filter(|id| !id.is_empty()) {
        segment.push('#');
        segment.push_str(id);
    }

    if let Some(class) = value.attr("class") {
        for class_name in class.split_whitespace() {
            segment.push('.');
            segment.push_str(class_name);
        }
    }

    segment
}

/// Space-joined segments of every ancestor element, root-most first, ending
/// with the immediate parent.
pub fn ancestor_path(el: &ElementRef) -> String {
    let mut segments: Vec<String> = el
        .ancestors()
        .filter_map(ElementRef::wrap)
        .map(|ancestor| ancestor_segment(&ancestor))
        .collect();
    segments.reverse();
    segments.join(" ")
}

/// Text the fallback key is derived from: the ancestor path followed by the
/// element's own tag.
pub fn fallback_key_source(el: &ElementRef) -> String {
    let tag = el.value().name().to_ascii_lowercase();
    let path = ancestor_path(el);
    if path.is_empty() {
        tag
    } else {
        format!("{} {}", path, tag)
    }
}
