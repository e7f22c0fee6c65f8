//! Core catalog operations.
//!
//! This module contains:
//! - Session: the single filter/save pass over a catalog
//! - Report: watch list rendering

pub mod report;
pub mod session;

// Re-export commonly used types
pub use report::{ReportSummary, WatchListReport, EMPTY_WATCH_LIST, WATCH_LIST_ICON};
pub use session::{Pick, Session, SessionError};
