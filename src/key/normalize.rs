/// Convert arbitrary attribute or label text into a camelCase identifier key.
///
/// Every character that is not an ASCII letter or digit is dropped and acts as
/// a word separator. Inside the remaining runs, words also break on
/// lower→upper transitions, on letter↔digit transitions, and before the last
/// capital of an acronym that runs into a lower-case word (`XMLHttp` →
/// `XML`, `Http`). Ordinals stay one word (`1st-place` → `1stPlace`).
///
/// Returns an empty string when `raw` holds no alphanumeric characters.
pub fn camel_case_key(raw: &str) -> String {
    let words = split_words(raw);

    let mut key = String::with_capacity(raw.len());
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            key.push_str(&word.to_ascii_lowercase());
        } else {
            key.push_str(&capitalize(word));
        }
    }
    key
}

/// Split `raw` into the words that [`camel_case_key`] joins.
pub fn split_words(raw: &str) -> Vec<String> {
    let chars: Vec<char> = raw.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            flush(&mut current, &mut words);
            continue;
        }

        if let Some(prev) = current.chars().last() {
            let next = chars.get(i + 1).copied();
            if is_word_boundary(prev, c, next) && !is_ordinal_suffix(&chars, i) {
                flush(&mut current, &mut words);
            }
        }
        current.push(c);
    }

    flush(&mut current, &mut words);
    words
}

fn is_word_boundary(prev: char, c: char, next: Option<char>) -> bool {
    if prev.is_ascii_digit() != c.is_ascii_digit() {
        return true;
    }

    if prev.is_ascii_lowercase() && c.is_ascii_uppercase() {
        return true;
    }

    // "XMLHttp": break before the 'H'
    prev.is_ascii_uppercase()
        && c.is_ascii_uppercase()
        && next.is_some_and(|n| n.is_ascii_lowercase())
}

/// Does `chars[at..]` start the `st`/`nd`/`rd`/`th` suffix of an ordinal?
///
/// The suffix has to match the last digit (`1st`, `2nd`, `3rd`, `4th`..`0th`)
/// and must not run into more lower-case letters or digits.
fn is_ordinal_suffix(chars: &[char], at: usize) -> bool {
    let Some(digit) = at.checked_sub(1).and_then(|i| chars.get(i).copied()) else {
        return false;
    };
    let suffix = match digit {
        '1' => "st",
        '2' => "nd",
        '3' => "rd",
        '0'..='9' => "th",
        _ => return false,
    };

    let matches_suffix = chars
        .get(at..at + 2)
        .is_some_and(|s| s.iter().copied().eq(suffix.chars()));
    let ends_word = chars
        .get(at + 2)
        .is_none_or(|n| !(n.is_ascii_lowercase() || n.is_ascii_digit()));

    matches_suffix && ends_word
}

fn capitalize(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}
