//! Canonical form for tag and category strings.
//!
//! `"UI/UX"`, `"ui ux"` and `" Ui-Ux "` all normalize to `"ui-ux"`. The output
//! alphabet is `[a-z0-9-]`, hyphens only ever sit between two non-empty
//! words, and normalizing a normalized string returns it unchanged.

/// Characters that split words instead of being dropped.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '_' | '/' | '\\' | '.' | ',' | '|' | '+' | '&')
}

/// Normalize a raw tag or category name.
///
/// ASCII letters are lowercased, separators split words, every other
/// character (punctuation, non-ASCII) is removed, and the remaining words
/// are joined with a single hyphen.
pub fn normalize(raw: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for c in raw.chars() {
        if is_separator(c) {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        let lower = c.to_ascii_lowercase();
        if lower.is_ascii_lowercase() || lower.is_ascii_digit() {
            current.push(lower);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words.join("-")
}
