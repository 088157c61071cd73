//! Result pagination.
//!
//! Turns an ordered result list into fixed-size pages with end-of-list
//! signaling. The cursor only moves forward; there is no previous page.
//! For a list of length N and page size P exactly `ceil(N/P)` pages are
//! produced, and only the final page reports `has_more == false`.

/// A window over a cached result list.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Index of the first item in this page within the full list.
    pub start: usize,
    /// The items of this page.
    pub items: &'a [T],
    /// Cursor to pass for the next page.
    pub next_cursor: usize,
    /// Whether further items remain after this page.
    pub has_more: bool,
}

/// Page size for train listings.
pub const TRAIN_PAGE_SIZE: usize = 5;

/// Page size for flight listings.
pub const FLIGHT_PAGE_SIZE: usize = 3;

/// Produces the page starting at `cursor`.
///
/// A cursor at or past the end of the list yields an empty page with
/// `has_more == false`.
pub fn page<T>(list: &[T], cursor: usize, page_size: usize) -> Page<'_, T> {
    let start = cursor.min(list.len());
    let end = (start + page_size).min(list.len());
    Page {
        start,
        items: &list[start..end],
        next_cursor: end,
        has_more: end < list.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_ceil_n_over_p_pages() {
        let list: Vec<u32> = (0..11).collect();
        let mut cursor = 0;
        let mut pages = 0;
        loop {
            let p = page(&list, cursor, 5);
            pages += 1;
            cursor = p.next_cursor;
            if !p.has_more {
                break;
            }
        }
        assert_eq!(pages, 3); // ceil(11 / 5)
    }

    #[test]
    fn only_final_page_signals_end() {
        let list: Vec<u32> = (0..6).collect();
        let first = page(&list, 0, 3);
        assert!(first.has_more);
        assert_eq!(first.items, &[0, 1, 2]);
        let second = page(&list, first.next_cursor, 3);
        assert!(!second.has_more);
        assert_eq!(second.items, &[3, 4, 5]);
    }

    #[test]
    fn cursor_past_end_yields_empty_page() {
        let list: Vec<u32> = (0..4).collect();
        let p = page(&list, 9, 3);
        assert!(p.items.is_empty());
        assert!(!p.has_more);
        assert_eq!(p.next_cursor, 4);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_page() {
        let list: Vec<u32> = (0..6).collect();
        let second = page(&list, 3, 3);
        assert!(!second.has_more);
        assert_eq!(second.items.len(), 3);
    }
}
