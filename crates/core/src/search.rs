//! Name search helpers for catalog listings.

/// Longest search term accepted; longer input is truncated.
pub const MAX_SEARCH_LEN: usize = 100;

/// Build a case-insensitive substring pattern for `ILIKE`.
///
/// Returns `None` for blank input, meaning "no filter". The LIKE
/// metacharacters `%`, `_` and the escape character `\` are escaped so the
/// term is matched literally.
pub fn substring_pattern(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars().take(MAX_SEARCH_LEN) {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}
