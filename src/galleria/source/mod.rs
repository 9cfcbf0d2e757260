//! # Item Sources
//!
//! The engine reads a snapshot of the rendered gallery through the
//! [`ItemSource`] trait, so the same logic runs against a page manifest on
//! disk, a browser binding, or a fixed list in tests.
//!
//! ## The Container Rule
//!
//! A page either has a gallery container or it does not. A missing container is
//! not an error: it means filtering is disabled for that page, and sources
//! report it as `Ok(None)`. An empty container (`Ok(Some(vec![]))`) is a
//! normal gallery with zero items.
//!
//! ## Implementations
//!
//! - [`fs::JsonSource`]: reads a page manifest
//!   ```text
//!   {
//!     "gallery": [
//!       { "data-title": "Red Dawn", "data-medium": "Oil", "data-year": "2020" },
//!       ...
//!     ]
//!   }
//!   ```
//!   Each entry is the attribute bag of one card.
//!
//! - [`memory::InMemorySource`]: a fixed collection, for testing.

use crate::error::Result;
use crate::model::Item;

pub mod fs;
pub mod memory;

pub trait ItemSource {
    /// Loads the item collection, or `None` when the page has no gallery.
    fn load_gallery(&self) -> Result<Option<Vec<Item>>>;
}
