//! User profiles and their watch lists.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::library::ContentItem;

/// Subscription plan of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionPlan {
    /// Ad-supported tier
    #[default]
    Free,

    /// Paid tier
    Standard,

    /// Top tier
    Premium,
}

impl std::fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionPlan::Free => write!(f, "free"),
            SubscriptionPlan::Standard => write!(f, "standard"),
            SubscriptionPlan::Premium => write!(f, "premium"),
        }
    }
}

impl std::str::FromStr for SubscriptionPlan {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "free" => Ok(SubscriptionPlan::Free),
            "standard" => Ok(SubscriptionPlan::Standard),
            "premium" => Ok(SubscriptionPlan::Premium),
            _ => anyhow::bail!("Unknown subscription plan: {}", s),
        }
    }
}

/// A subscriber and the content they saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// Subscription plan (informational, gates nothing)
    pub plan: SubscriptionPlan,

    /// Saved content, oldest first. Never read from input: a profile
    /// always starts empty and only `add_to_watch_list` fills it.
    #[serde(skip_deserializing)]
    watch_list: Vec<ContentItem>,
}

impl UserProfile {
    /// Create a profile with an empty watch list
    pub fn new(id: u32, name: impl Into<String>, plan: SubscriptionPlan) -> Self {
        Self {
            id,
            name: name.into(),
            plan,
            watch_list: Vec::new(),
        }
    }

    /// Append an item to the end of the watch list.
    ///
    /// Duplicates and unavailable items are accepted as-is.
    pub fn add_to_watch_list(&mut self, item: ContentItem) {
        self.watch_list.push(item);
    }

    /// Saved content in insertion order
    pub fn watch_list(&self) -> &[ContentItem] {
        &self.watch_list
    }
}
