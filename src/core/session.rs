//! The single catalog pass: filter, save one item, report.
//!
//! A session borrows the catalog read-only and the profile mutably for its
//! whole lifetime, so the watch list has exactly one writer.

use std::io::Write;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use super::report::WatchListReport;
use crate::domain::UserProfile;
use crate::library::{Catalog, ContentId, ContentItem};

/// Which catalog item the session saves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pick {
    /// First available item in catalog order (skipped if none)
    #[default]
    FirstAvailable,

    /// A specific catalog item, available or not
    Id(ContentId),
}

/// Session errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Content not found in catalog: {0}")]
    UnknownContent(ContentId),
}

/// One run over a catalog on behalf of one user
pub struct Session<'a> {
    catalog: &'a Catalog,
    user: &'a mut UserProfile,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a Catalog, user: &'a mut UserProfile) -> Self {
        Self { catalog, user }
    }

    /// Save one item to the user's watch list.
    ///
    /// Returns the item that was added, or `None` when nothing was
    /// available to pick.
    #[instrument(skip(self), fields(user = %self.user.name))]
    pub fn save(&mut self, pick: Pick) -> Result<Option<ContentItem>, SessionError> {
        let item = match pick {
            Pick::FirstAvailable => {
                let available = self.catalog.available();
                debug!(
                    available = available.len(),
                    total = self.catalog.len(),
                    "Filtered catalog"
                );

                match available.first() {
                    Some(item) => item.clone(),
                    None => {
                        info!("No available content, watch list unchanged");
                        return Ok(None);
                    }
                }
            }
            Pick::Id(id) => {
                let item = self
                    .catalog
                    .get(id)
                    .ok_or(SessionError::UnknownContent(id))?;
                if !item.is_available {
                    warn!(%id, title = %item.title, "Saving content that is not available");
                }
                item.clone()
            }
        };

        info!(id = %item.id, title = %item.title, "Adding to watch list");
        self.user.add_to_watch_list(item.clone());

        Ok(Some(item))
    }

    /// Render the user's watch list
    pub fn report(&self) -> WatchListReport<'_> {
        WatchListReport::new(self.user)
    }

    /// Save then render: the full pass
    pub fn run<W: Write>(&mut self, pick: Pick, show_icon: bool, out: &mut W) -> Result<()> {
        self.save(pick)?;
        self.report()
            .with_icon(show_icon)
            .write_to(out)
            .context("Failed to write watch list")
    }
}
