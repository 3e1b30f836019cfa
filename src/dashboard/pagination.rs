//! Client-side pagination over an in-memory sequence

/// Page sizes offered by the page-size selector
pub const PAGE_SIZES: [usize; 3] = [5, 10, 20];

/// Page size used until the user picks another
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Rows visible on this page
    pub rows: &'a [T],
    /// Zero-based page index
    pub page_index: usize,
    pub page_size: usize,
    /// Rows before pagination
    pub total: usize,
    pub page_count: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<'a, T> Page<'a, T> {
    /// 1-indexed inclusive range of visible rows; `(0, 0)` when nothing is shown
    pub fn range(&self) -> (usize, usize) {
        if self.rows.is_empty() {
            return (0, 0);
        }
        let start = self.page_index * self.page_size + 1;
        (start, start + self.rows.len() - 1)
    }

    /// Footer text, e.g. `Showing 1 to 3 of 3 results`
    pub fn summary(&self) -> String {
        let (start, end) = self.range();
        format!("Showing {} to {} of {} results", start, end, self.total)
    }
}

/// Number of pages needed for `total` rows
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Slice `rows` into the page at `page_index`.
///
/// A zero page size is treated as one. An index past the end yields an empty
/// page with `has_prev` set.
pub fn paginate<T>(rows: &[T], page_index: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total = rows.len();
    let page_count = page_count(total, page_size);

    let start = page_index.saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);

    Page {
        rows: &rows[start..end],
        page_index,
        page_size,
        total,
        page_count,
        has_prev: page_index > 0,
        has_next: page_index < page_count.saturating_sub(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_disables_both_directions() {
        let rows = [1, 2, 3];
        let page = paginate(&rows, 0, 5);
        assert_eq!(page.rows, &[1, 2, 3]);
        assert!(!page.has_prev);
        assert!(!page.has_next);
        assert_eq!(page.range(), (1, 3));
        assert_eq!(page.summary(), "Showing 1 to 3 of 3 results");
    }

    #[test]
    fn smaller_page_size_enables_next() {
        let rows = [1, 2, 3];
        let page = paginate(&rows, 0, 2);
        assert_eq!(page.rows, &[1, 2]);
        assert!(!page.has_prev);
        assert!(page.has_next);
        assert_eq!(page.page_count, 2);

        let last = paginate(&rows, 1, 2);
        assert_eq!(last.rows, &[3]);
        assert!(last.has_prev);
        assert!(!last.has_next);
        assert_eq!(last.range(), (3, 3));
    }

    #[test]
    fn empty_rows() {
        let rows: [u8; 0] = [];
        let page = paginate(&rows, 0, 10);
        assert!(page.rows.is_empty());
        assert_eq!(page.page_count, 0);
        assert!(!page.has_prev);
        assert!(!page.has_next);
        assert_eq!(page.summary(), "Showing 0 to 0 of 0 results");
    }

    #[test]
    fn index_past_end_is_empty() {
        let rows = [1, 2, 3];
        let page = paginate(&rows, 4, 2);
        assert!(page.rows.is_empty());
        assert!(page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn huge_index_does_not_overflow() {
        let rows = [1, 2, 3];
        let page = paginate(&rows, usize::MAX, 5);
        assert!(page.rows.is_empty());
        assert!(page.has_prev);
        assert!(!page.has_next);
        assert_eq!(page.range(), (0, 0));
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let rows = [1, 2];
        let page = paginate(&rows, 0, 0);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.rows, &[1]);
        assert!(page.has_next);
    }
}
