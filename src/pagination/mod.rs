//! Pagination module
//!
//! Supports: owned vectors, cloneable iterators, JSON arrays
//!
//! # Overview
//!
//! Collections are wrapped in a [`Cursor`] (rewind, advance, current) and
//! handed to a [`LengthAwarePaginator`], which computes the elements of a
//! requested page along with the total count, page count and neighbour
//! pages.

mod cursors;
mod paginator;
mod types;

pub use cursors::{IterCursor, VecCursor};
pub use paginator::LengthAwarePaginator;
pub use types::{Cursor, Page, Pagination, DEFAULT_PER_PAGE};
