//! Length-aware paginator
//!
//! Knows the total element count of its collection and derives page count,
//! per-page element counts and neighbour pages from it.

use super::cursors::{IterCursor, VecCursor};
use super::types::{Cursor, Page, Pagination, DEFAULT_PER_PAGE};
use crate::error::{Error, Result};
use crate::input::expect_array;
use once_cell::unsync::OnceCell;
use serde_json::Value;
use tracing::{debug, trace};

/// Paginator over a collection whose length can be computed up front
///
/// The total element count is computed on first use and cached. Every call
/// to [`Pagination::paginate`] moves the current page, so one paginator
/// serves one consumer at a time.
#[derive(Debug)]
pub struct LengthAwarePaginator<C: Cursor> {
    cursor: C,
    per_page: usize,
    current_page: i64,
    total_count: OnceCell<usize>,
}

impl<C: Cursor> LengthAwarePaginator<C> {
    /// Create a new paginator
    ///
    /// Fails with `Error::InvalidArgument` when `per_page` is zero.
    pub fn new(cursor: C, per_page: usize) -> Result<Self> {
        if per_page == 0 {
            return Err(Error::invalid_argument("per_page must be at least 1"));
        }

        Ok(Self {
            cursor,
            per_page,
            current_page: 1,
            total_count: OnceCell::new(),
        })
    }

    /// Create a paginator with the default page size
    pub fn with_default_per_page(cursor: C) -> Self {
        Self {
            cursor,
            per_page: DEFAULT_PER_PAGE,
            current_page: 1,
            total_count: OnceCell::new(),
        }
    }

    /// The page most recently requested
    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    /// Number of elements per page
    pub fn per_page(&self) -> usize {
        self.per_page
    }
}

impl<T> LengthAwarePaginator<VecCursor<T>> {
    /// Create a paginator over an owned `Vec`
    pub fn from_vec(items: Vec<T>, per_page: usize) -> Result<Self> {
        Self::new(VecCursor::new(items), per_page)
    }
}

impl<I> LengthAwarePaginator<IterCursor<I>>
where
    I: Iterator + Clone,
{
    /// Create a paginator over a cloneable iterator source
    pub fn from_iter_source(
        source: impl IntoIterator<IntoIter = I>,
        per_page: usize,
    ) -> Result<Self> {
        Self::new(IterCursor::new(source), per_page)
    }
}

impl LengthAwarePaginator<VecCursor<Value>> {
    /// Create a paginator over a JSON value
    ///
    /// Only arrays are accepted; `null`, scalars and objects fail with
    /// `Error::InvalidInput`.
    pub fn from_json(value: Value, per_page: usize) -> Result<Self> {
        Self::from_vec(expect_array(value)?, per_page)
    }
}

impl<C> LengthAwarePaginator<C>
where
    C: Cursor,
    C::Item: Clone,
{
    /// Paginate and capture the resulting page together with its metadata
    pub fn page(&mut self, page: i64) -> Result<Page<C::Item>> {
        let items = self.paginate(page)?;
        Ok(Page {
            page,
            per_page: self.per_page,
            items,
            total_count: self.total_elements_count(),
            page_count: self.page_count(),
            has_next_page: self.has_next_page(),
            has_previous_page: self.has_previous_page(),
        })
    }
}

impl<C> Pagination for LengthAwarePaginator<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = C::Item;

    fn paginate(&mut self, page: i64) -> Result<Vec<C::Item>> {
        // Recorded before validation: metadata follows the requested page
        // even when the request fails.
        self.current_page = page;

        if page < 1 {
            debug!(page, "Rejecting non-positive page");
            return Err(Error::PageNotFound { page });
        }

        let offset = usize::try_from(page - 1)
            .ok()
            .and_then(|index| index.checked_mul(self.per_page))
            .ok_or(Error::PageNotFound { page })?;

        trace!(page, offset, "Seeking to page offset");
        self.cursor.seek(offset).map_err(|e| match e {
            Error::OutOfBounds { .. } => Error::PageNotFound { page },
            other => other,
        })?;

        let mut elements = Vec::new();
        while elements.len() < self.per_page {
            let Some(item) = self.cursor.current() else {
                break;
            };
            elements.push(item.clone());
            self.cursor.advance();
        }

        debug!(page, offset, count = elements.len(), "Fetched page");
        Ok(elements)
    }

    fn has_next_page(&self) -> bool {
        let page_count = self.page_count();
        page_count > 0 && page_count as i64 > self.current_page
    }

    fn has_previous_page(&self) -> bool {
        self.page_count() > 1 && self.current_page > 1
    }

    fn current_page_elements_count(&self) -> usize {
        let page_count = self.page_count();
        if page_count == 0 {
            return 0;
        }

        // Only the last page can hold fewer than per_page elements
        if self.current_page == page_count as i64 {
            self.total_elements_count() - (page_count - 1) * self.per_page
        } else {
            self.per_page
        }
    }

    fn total_elements_count(&self) -> usize {
        *self.total_count.get_or_init(|| {
            let total = self.cursor.len();
            debug!(total, "Computed total element count");
            total
        })
    }

    fn pages_list(&self) -> Vec<i64> {
        (1..=self.page_count() as i64).collect()
    }

    fn page_count(&self) -> usize {
        let total = self.total_elements_count();
        if total > 0 {
            total.div_ceil(self.per_page)
        } else {
            0
        }
    }
}
