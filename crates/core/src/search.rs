//! Substring search helpers.
//!
//! Every search in the services is a single `ILIKE` filter. The user's term
//! is escaped so `%` and `_` match themselves instead of acting as
//! wildcards.

/// Escape character used in generated patterns (PostgreSQL's default).
const ESCAPE: char = '\\';

/// Build an `ILIKE` pattern matching any value that contains `term`.
///
/// An empty term matches every row.
///
/// # Examples
///
/// ```
/// use trio_core::search::contains_pattern;
/// assert_eq!(contains_pattern("jazz"), "%jazz%");
/// assert_eq!(contains_pattern("100%"), "%100\\%%");
/// assert_eq!(contains_pattern(""), "%%");
/// ```
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | ESCAPE) {
            pattern.push(ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// In-memory equivalent of `field ILIKE contains_pattern(term)`.
///
/// Used by tests and anywhere rows are already loaded.
pub fn matches_term(field: &str, term: &str) -> bool {
    field.to_lowercase().contains(&term.to_lowercase())
}
