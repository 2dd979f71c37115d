use thiserror::Error;

use crate::names;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("page must be a positive integer, got {0:?}")]
    InvalidPage(String),
    #[error("page {page} is beyond the last page ({last_page})")]
    OutOfRange { page: u32, last_page: usize },
}

/// Parse the raw `page` query parameter. A missing parameter means the first page.
pub fn parse_page(raw: Option<&str>) -> Result<u32, PageError> {
    let Some(raw) = raw else {
        return Ok(1);
    };

    match raw.trim().parse::<u32>() {
        Ok(page) if page > 0 => Ok(page),
        _ => Err(PageError::InvalidPage(raw.to_string())),
    }
}

/// Splits ordered result sets into pages of a fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(names::DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages holding at least one item.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Checks that `page` can be served from a collection of `total` items.
    pub fn check(&self, total: usize, page: u32) -> Result<(), PageError> {
        if page == 0 {
            return Err(PageError::InvalidPage(page.to_string()));
        }

        let last_page = self.page_count(total);
        if page > 1 && page as usize > last_page {
            return Err(PageError::OutOfRange { page, last_page });
        }

        Ok(())
    }

    /// Returns the slice for the 1-based `page`.
    ///
    /// The first page is always served, even when `items` is empty. Any later
    /// page that holds no items is rejected with [`PageError::OutOfRange`]
    /// instead of producing an empty slice.
    pub fn paginate<'a, T>(&self, items: &'a [T], page: u32) -> Result<&'a [T], PageError> {
        self.check(items.len(), page)?;

        let start = (page as usize - 1) * self.page_size;
        let end = (start + self.page_size).min(items.len());

        Ok(&items[start.min(end)..end])
    }
}
