//! Helpers for partial, case-insensitive name search.

/// Escape character used in the `ILIKE ... ESCAPE` clause of search queries.
pub const LIKE_ESCAPE: char = '\\';

/// Build an `ILIKE` pattern matching any name that contains `term`.
///
/// `%`, `_` and the escape character itself are escaped so they match
/// literally. Surrounding whitespace is ignored; an empty term yields `%%`,
/// which matches every name.
pub fn contains_pattern(term: &str) -> String {
    let term = term.trim();
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
