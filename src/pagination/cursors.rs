//! Cursor implementations
//!
//! Each cursor adapts one kind of collection to the `Cursor` capability.

use super::types::Cursor;
use crate::error::{Error, Result};
use std::fmt;

// ============================================================================
// Vec Cursor
// ============================================================================

/// Random-access cursor over an owned `Vec`
///
/// Seeking jumps straight to the offset instead of stepping through the
/// collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecCursor<T> {
    items: Vec<T>,
    position: usize,
}

impl<T> VecCursor<T> {
    /// Create a new cursor positioned at the first element
    pub fn new(items: Vec<T>) -> Self {
        Self { items, position: 0 }
    }

    /// Borrow the underlying elements
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Give back the underlying elements
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for VecCursor<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> Cursor for VecCursor<T> {
    type Item = T;

    fn rewind(&mut self) {
        self.position = 0;
    }

    fn advance(&mut self) {
        if self.position < self.items.len() {
            self.position += 1;
        }
    }

    fn current(&self) -> Option<&T> {
        self.items.get(self.position)
    }

    fn is_valid(&self) -> bool {
        self.position < self.items.len()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn seek(&mut self, offset: usize) -> Result<()> {
        if offset == 0 || offset < self.items.len() {
            self.position = offset;
            Ok(())
        } else {
            Err(Error::OutOfBounds { offset })
        }
    }
}

// ============================================================================
// Iterator Cursor
// ============================================================================

/// Forward-only cursor over a cloneable iterator
///
/// A pristine copy of the source is kept so that rewinding and counting start
/// a fresh traversal and never disturb the page-fetch position.
pub struct IterCursor<I: Iterator> {
    source: I,
    iter: I,
    current: Option<I::Item>,
}

impl<I> IterCursor<I>
where
    I: Iterator + Clone,
{
    /// Create a new cursor positioned at the first element
    pub fn new(source: impl IntoIterator<IntoIter = I>) -> Self {
        let source = source.into_iter();
        let mut iter = source.clone();
        let current = iter.next();
        Self {
            source,
            iter,
            current,
        }
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;

    fn rewind(&mut self) {
        self.iter = self.source.clone();
        self.current = self.iter.next();
    }

    fn advance(&mut self) {
        if self.current.is_some() {
            self.current = self.iter.next();
        }
    }

    fn current(&self) -> Option<&I::Item> {
        self.current.as_ref()
    }

    fn is_valid(&self) -> bool {
        self.current.is_some()
    }

    fn len(&self) -> usize {
        self.source.clone().count()
    }
}

impl<I: Iterator> fmt::Debug for IterCursor<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterCursor")
            .field("valid", &self.current.is_some())
            .finish_non_exhaustive()
    }
}
