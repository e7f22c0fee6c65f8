//! Content library: the catalog of videos and their metadata.
//!
//! The catalog is seeded once at startup and shared read-only for the
//! rest of the process.

pub mod catalog;
pub mod content;

pub use catalog::Catalog;
pub use content::{ContentId, ContentItem, ContentType};
