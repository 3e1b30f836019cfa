//! Dashboard table of uploaded media

mod pagination;
mod types;

use log::debug;

use crate::error::{Error, Result};

pub use pagination::*;
pub use types::*;

/// Paginated view over a fixed record set
#[derive(Debug, Clone)]
pub struct MediaTable {
    rows: Vec<MediaItem>,
    page_index: usize,
    page_size: usize,
}

impl Default for MediaTable {
    fn default() -> Self {
        Self::new(sample_media())
    }
}

impl MediaTable {
    /// A table over `rows` on the first page with the default page size
    pub fn new(rows: Vec<MediaItem>) -> Self {
        Self {
            rows,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn rows(&self) -> &[MediaItem] {
        &self.rows
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The page currently shown
    pub fn page(&self) -> Page<'_, MediaItem> {
        paginate(&self.rows, self.page_index, self.page_size)
    }

    pub fn can_previous_page(&self) -> bool {
        self.page().has_prev
    }

    pub fn can_next_page(&self) -> bool {
        self.page().has_next
    }

    /// Move back one page. Returns `false` on the first page.
    pub fn previous_page(&mut self) -> bool {
        if !self.can_previous_page() {
            return false;
        }
        self.page_index -= 1;
        true
    }

    /// Move forward one page. Returns `false` on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.can_next_page() {
            return false;
        }
        self.page_index += 1;
        true
    }

    /// Pick a page size from [`PAGE_SIZES`].
    ///
    /// The page index is recomputed so the row previously at the top stays
    /// on the visible page.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if !PAGE_SIZES.contains(&page_size) {
            return Err(Error::InvalidPageSize(page_size));
        }

        let top_row = self.page_index * self.page_size;
        self.page_size = page_size;
        self.page_index = top_row / page_size;
        debug!(
            "Page size set to {}, now on page {}",
            self.page_size, self.page_index
        );
        Ok(())
    }
}
