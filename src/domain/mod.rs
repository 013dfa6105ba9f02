//! Domain layer for the picker.
//!
//! This module contains the core data model and the filter engine, independent
//! of the terminal. Nothing here performs drawing or reads keys.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: `Item` records and the `ItemStore` built from input
//! - [`filter`]: Regex filtering producing a `VisibleList` view
//!
//! # Examples
//!
//! ```
//! use tabpick::domain::{filter, ItemStore, Result};
//!
//! fn visible_count(input: &str, pattern: &str) -> Result<usize> {
//!     let store = ItemStore::from_reader(input.as_bytes())?;
//!     Ok(filter(&store, pattern)?.len())
//! }
//!
//! assert_eq!(visible_count("a\tAlpha\nb\tBeta\n", "^b").unwrap(), 1);
//! ```

pub mod error;
pub mod filter;
pub mod item;

pub use error::{PickerError, RecordDefect, Result};
pub use filter::{filter, VisibleList};
pub use item::{Item, ItemStore};
