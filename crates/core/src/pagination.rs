//! Fixed-size page slicing over already-materialized query results.
//!
//! The trivia listings load every matching row and hand back one page of
//! [`PAGE_SIZE`] items. Pages are 1-based; anything outside the result set
//! (including pages below 1) is an empty slice, and callers decide whether
//! that is a 404 or an empty 200.

use std::ops::Range;

/// Number of items returned per page.
pub const PAGE_SIZE: usize = 10;

/// Page used when the client does not send `?page=`.
pub const DEFAULT_PAGE: i64 = 1;

/// Index range covered by `page`, or `None` for pages below 1 or pages whose
/// start index does not fit in `usize`.
pub fn page_range(page: i64) -> Option<Range<usize>> {
    if page < 1 {
        return None;
    }
    let index = usize::try_from(page - 1).ok()?;
    let start = index.checked_mul(PAGE_SIZE)?;
    let end = start.checked_add(PAGE_SIZE)?;
    Some(start..end)
}

/// Return the items on `page`, clipped to the end of `items`.
///
/// # Examples
///
/// ```
/// use trio_core::pagination::page_slice;
/// let items: Vec<u32> = (1..=25).collect();
/// assert_eq!(page_slice(&items, 3), &[21, 22, 23, 24, 25]);
/// assert!(page_slice(&items, 4).is_empty());
/// ```
pub fn page_slice<T>(items: &[T], page: i64) -> &[T] {
    match page_range(page) {
        Some(range) if range.start < items.len() => {
            &items[range.start..range.end.min(items.len())]
        }
        _ => &[],
    }
}
