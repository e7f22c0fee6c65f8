//! Catalog of all content offered by the platform.
//!
//! The catalog is read-only once seeded. Every query hands back either
//! borrowed items or a fresh catalog; nothing here mutates `items`.

use serde::{Deserialize, Serialize};

use super::content::{ContentId, ContentItem, ContentType};

/// Ordered collection of content items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<ContentItem>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Items that are currently available, in catalog order.
    ///
    /// Returns a fresh catalog so the result can be filtered again or handed
    /// around without borrowing from `self`.
    pub fn available(&self) -> Catalog {
        self.items
            .iter()
            .filter(|item| item.is_available)
            .cloned()
            .collect()
    }

    /// Get the first item with the given ID
    pub fn get(&self, id: ContentId) -> Option<&ContentItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Filter items by content type
    pub fn filter_by_type(&self, content_type: ContentType) -> Vec<&ContentItem> {
        self.items
            .iter()
            .filter(|item| item.category == content_type)
            .collect()
    }

    /// First item in catalog order
    pub fn first(&self) -> Option<&ContentItem> {
        self.items.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentItem> {
        self.items.iter()
    }

    /// Get the number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<ContentItem>> for Catalog {
    fn from(items: Vec<ContentItem>) -> Self {
        Self { items }
    }
}

impl FromIterator<ContentItem> for Catalog {
    fn from_iter<I: IntoIterator<Item = ContentItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
