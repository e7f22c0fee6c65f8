//! Seed data: the catalog and profile a process starts from.
//!
//! Either the built-in demo data or a seed document read from disk.
//!
//! ```yaml
//! catalog:
//!   - id: 1
//!     title: Inception
//!     duration_minutes: 148
//!     category: feature-film
//!     is_available: true
//! user:
//!   id: 1
//!   name: Santi
//!   plan: standard
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::{SubscriptionPlan, UserProfile};
use crate::library::{Catalog, ContentItem, ContentType};

/// Initial catalog and user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub catalog: Catalog,
    pub user: UserProfile,
}

/// Seed loading errors
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML seed file {path}")]
    ParseYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse JSON seed file {path}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported seed file format (expected .yaml, .yml or .json): {path}")]
    UnsupportedFormat { path: PathBuf },
}

/// On-disk seed encoding, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Yaml,
    Json,
}

impl SeedFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(SeedFormat::Yaml),
            "json" => Some(SeedFormat::Json),
            _ => None,
        }
    }
}

impl Seed {
    /// Built-in demo data: three videos and one standard subscriber
    pub fn builtin() -> Self {
        let catalog = Catalog::from(vec![
            ContentItem::new(1, "Inception", 148, ContentType::FeatureFilm),
            ContentItem::new(2, "Planet Earth", 50, ContentType::Documentary),
            ContentItem::new(3, "Breaking Code", 45, ContentType::EpisodicSeries).unavailable(),
        ]);

        Self {
            catalog,
            user: UserProfile::new(1, "Santi", SubscriptionPlan::Standard),
        }
    }

    /// Parse a seed document
    pub fn parse(content: &str, format: SeedFormat, path: &Path) -> Result<Self, SeedError> {
        match format {
            SeedFormat::Yaml => serde_yaml::from_str(content).map_err(|source| SeedError::ParseYaml {
                path: path.to_path_buf(),
                source,
            }),
            SeedFormat::Json => serde_json::from_str(content).map_err(|source| SeedError::ParseJson {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Load a seed document from disk
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let format = SeedFormat::from_path(path).ok_or_else(|| SeedError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        let content = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let seed = Self::parse(&content, format, path)?;
        debug!(
            path = %path.display(),
            items = seed.catalog.len(),
            user = %seed.user.name,
            "Loaded seed file"
        );

        Ok(seed)
    }

    /// Load from `path` if given, otherwise fall back to the built-in data
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, SeedError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }
}
