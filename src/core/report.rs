//! Watch list rendering.
//!
//! Output shape:
//!
//! ```text
//! 📺 Watchlist de Santi (standard):
//! - Inception | feature-film | 148 min
//! ```
//!
//! An empty watch list renders the header followed by [`EMPTY_WATCH_LIST`].

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::domain::{SubscriptionPlan, UserProfile};
use crate::library::ContentItem;

/// Prefix printed before the header when icons are enabled
pub const WATCH_LIST_ICON: &str = "📺";

/// Line printed in place of items when the watch list is empty
pub const EMPTY_WATCH_LIST: &str = "No hay contenido en la lista de reproducción.";

/// Read-only view that renders a user's watch list
#[derive(Debug, Clone, Copy)]
pub struct WatchListReport<'a> {
    user: &'a UserProfile,
    show_icon: bool,
}

/// Machine-readable form of the report
#[derive(Debug, Serialize)]
pub struct ReportSummary<'a> {
    pub user: &'a str,
    pub plan: SubscriptionPlan,
    pub items: &'a [ContentItem],
}

impl<'a> WatchListReport<'a> {
    pub fn new(user: &'a UserProfile) -> Self {
        Self {
            user,
            show_icon: true,
        }
    }

    /// Toggle the leading icon on the header line
    pub fn with_icon(mut self, show_icon: bool) -> Self {
        self.show_icon = show_icon;
        self
    }

    /// Header line identifying the user and plan
    pub fn header(&self) -> String {
        let title = format!("Watchlist de {} ({}):", self.user.name, self.user.plan);
        if self.show_icon {
            format!("{} {}", WATCH_LIST_ICON, title)
        } else {
            title
        }
    }

    /// Body lines: one per item, or the empty-state line
    pub fn body(&self) -> Vec<String> {
        let items = self.user.watch_list();
        if items.is_empty() {
            return vec![EMPTY_WATCH_LIST.to_string()];
        }

        items.iter().map(item_line).collect()
    }

    /// Write the full report to a sink
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    pub fn summary(&self) -> ReportSummary<'a> {
        ReportSummary {
            user: &self.user.name,
            plan: self.user.plan,
            items: self.user.watch_list(),
        }
    }
}

impl fmt::Display for WatchListReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        for line in self.body() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn item_line(item: &ContentItem) -> String {
    format!(
        "- {} | {} | {} min",
        item.title, item.category, item.duration_minutes
    )
}
