//! # pagekit
//!
//! Length-aware, in-memory pagination over finite collections.
//!
//! ## Features
//!
//! - **Cursor Abstraction**: Vectors, cloneable iterators and JSON arrays behind one trait
//! - **Lazy Counting**: Total element count computed once, on first use
//! - **Page Metadata**: Page count, next/previous flags, per-page element counts
//! - **CLI**: Paginate a JSON file or plain lines from the shell
//!
//! ## Quick Start
//!
//! ```rust
//! use pagekit::{LengthAwarePaginator, Pagination, Result};
//!
//! fn main() -> Result<()> {
//!     let mut paginator = LengthAwarePaginator::from_vec((1..=23).collect(), 5)?;
//!
//!     assert_eq!(paginator.page_count(), 5);
//!     assert_eq!(paginator.paginate(5)?, vec![21, 22, 23]);
//!     assert!(!paginator.has_next_page());
//!     assert!(paginator.paginate(6).is_err());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │                 Pagination trait                   │
//! │  paginate(page)   has_next_page   page_count ...   │
//! └────────────────────────────────────────────────────┘
//!                          │
//!              ┌───────────┴───────────┐
//!              │  LengthAwarePaginator │
//!              └───────────┬───────────┘
//!                          │ Cursor trait
//!              ┌───────────┴───────────┐
//!              │ VecCursor │ IterCursor│
//!              └───────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document error variant fields

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Cursors, the paginator and page snapshots
pub mod pagination;

/// Paginator configuration
pub mod config;

/// Reading collections from JSON or plain text
pub mod input;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::PagerConfig;
pub use error::{Error, Result};
pub use pagination::{
    Cursor, IterCursor, LengthAwarePaginator, Page, Pagination, VecCursor, DEFAULT_PER_PAGE,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
