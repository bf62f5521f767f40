//! Pagination types and traits
//!
//! Defines the cursor capability the paginator walks, the public pagination
//! contract, and the page snapshot handed to callers.

use crate::error::{Error, Result};
use serde::Serialize;

/// Number of elements per page when none is given
pub const DEFAULT_PER_PAGE: usize = 10;

/// Restartable traversal over a finite, ordered collection
///
/// The paginator only talks to collections through this trait, so a
/// materialised `Vec` and a forward-only iterator source are interchangeable.
pub trait Cursor {
    /// Element type yielded by the cursor
    type Item;

    /// Move back to the first element
    fn rewind(&mut self);

    /// Move to the next element
    fn advance(&mut self);

    /// Element under the cursor, `None` once the cursor has run off the end
    fn current(&self) -> Option<&Self::Item>;

    /// Whether the cursor points at an element
    fn is_valid(&self) -> bool;

    /// Number of elements in the collection.
    ///
    /// Must not move the cursor.
    fn len(&self) -> usize;

    /// Whether the collection has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position the cursor at a zero-based offset
    ///
    /// Offset `0` always succeeds, even for an empty collection. Any other
    /// offset must land on an element, otherwise `Error::OutOfBounds` is
    /// returned. The default implementation rewinds and advances one element
    /// at a time.
    fn seek(&mut self, offset: usize) -> Result<()> {
        self.rewind();
        if offset == 0 {
            return Ok(());
        }

        for _ in 0..offset {
            if !self.is_valid() {
                break;
            }
            self.advance();
        }

        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::OutOfBounds { offset })
        }
    }
}

/// Public pagination contract
pub trait Pagination {
    /// Element type of a page
    type Item;

    /// Get the elements of a page (1-based).
    ///
    /// Fails with `Error::PageNotFound` when the page does not exist.
    fn paginate(&mut self, page: i64) -> Result<Vec<Self::Item>>;

    /// Determine if there is another page after the current one
    fn has_next_page(&self) -> bool;

    /// Determine if there is a page before the current one
    fn has_previous_page(&self) -> bool;

    /// Number of elements on the current page
    fn current_page_elements_count(&self) -> usize;

    /// Number of elements across all pages
    fn total_elements_count(&self) -> usize;

    /// Page numbers `1..=page_count`, empty when there are no elements
    fn pages_list(&self) -> Vec<i64>;

    /// Number of pages
    fn page_count(&self) -> usize;
}

/// Snapshot of a single page and the pagination state that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Requested page number
    pub page: i64,
    /// Configured page size
    pub per_page: usize,
    /// Elements on this page
    pub items: Vec<T>,
    /// Elements across all pages
    pub total_count: usize,
    /// Number of pages
    pub page_count: usize,
    /// Is there a page after this one?
    pub has_next_page: bool,
    /// Is there a page before this one?
    pub has_previous_page: bool,
}

impl<T> Page<T> {
    /// Number of elements on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if this page has no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if this is the final page
    pub fn is_last(&self) -> bool {
        !self.has_next_page
    }
}
