//! Domain types for streamlist.
//!
//! This module contains the subscriber-side data structures:
//! - UserProfile: identity, plan and watch list
//! - SubscriptionPlan: closed set of plans

pub mod user;

// Re-export commonly used types
pub use user::{SubscriptionPlan, UserProfile};
