//! streamlist - in-memory video catalog with per-user watch lists
//!
//! A seeded catalog of videos, one subscriber, and a single pass that
//! saves the first available video to the subscriber's watch list and
//! prints it.
//!
//! # Modules
//!
//! - `library`: Catalog and content items
//! - `domain`: User profiles and subscription plans
//! - `core`: The watch list pass (Session) and rendering (Report)
//! - `seed`: Built-in and file-based seed data
//! - `config`: Layered configuration
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Run the pass on the built-in data
//! streamlist
//!
//! # Use a seed file and save a specific video
//! streamlist run --seed seed.yaml --pick 2
//!
//! # List available documentaries
//! streamlist catalog --available --content-type documentary
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod library;
pub mod seed;

// Re-export main types at crate root for convenience
pub use crate::core::{Pick, Session, SessionError, WatchListReport};
pub use crate::domain::{SubscriptionPlan, UserProfile};
pub use crate::library::{Catalog, ContentId, ContentItem, ContentType};
pub use crate::seed::{Seed, SeedError};
