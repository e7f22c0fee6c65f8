//! Content items offered by the platform.
//!
//! A content item is immutable metadata about one video. Items are created
//! from seed data and never change afterwards.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Content identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(u32);

impl ContentId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw numeric value
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ContentId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let raw: u32 = s
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid content id: {}", s))?;
        Ok(Self(raw))
    }
}

/// Type of content
///
/// Deserialization goes through [`FromStr`](std::str::FromStr), so seed
/// files accept the same names and aliases as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum ContentType {
    /// Single feature-length film
    FeatureFilm,

    /// Series split into episodes
    EpisodicSeries,

    /// Documentary
    Documentary,
}

impl ContentType {
    /// All categories, in display order
    pub const ALL: [ContentType; 3] = [
        ContentType::FeatureFilm,
        ContentType::EpisodicSeries,
        ContentType::Documentary,
    ];
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::FeatureFilm => write!(f, "feature-film"),
            ContentType::EpisodicSeries => write!(f, "episodic-series"),
            ContentType::Documentary => write!(f, "documentary"),
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "feature-film" | "movie" | "film" => Ok(ContentType::FeatureFilm),
            "episodic-series" | "series" | "show" => Ok(ContentType::EpisodicSeries),
            "documentary" | "doc" => Ok(ContentType::Documentary),
            _ => anyhow::bail!("Unknown content type: {}", s),
        }
    }
}

impl TryFrom<String> for ContentType {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// A single video in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Content identifier (unique within a catalog by convention)
    pub id: ContentId,

    /// Human-readable title
    pub title: String,

    /// Running time in minutes
    pub duration_minutes: u32,

    /// Type of content
    pub category: ContentType,

    /// Whether the item is currently offered
    pub is_available: bool,
}

impl ContentItem {
    /// Create a new, available content item
    pub fn new(
        id: u32,
        title: impl Into<String>,
        duration_minutes: u32,
        category: ContentType,
    ) -> Self {
        Self {
            id: ContentId(id),
            title: title.into(),
            duration_minutes,
            category,
            is_available: true,
        }
    }

    /// Mark the item as not currently offered
    pub fn unavailable(mut self) -> Self {
        self.is_available = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_from_str() {
        assert_eq!(
            "feature-film".parse::<ContentType>().unwrap(),
            ContentType::FeatureFilm
        );
        assert_eq!("movie".parse::<ContentType>().unwrap(), ContentType::FeatureFilm);
        assert_eq!("Series".parse::<ContentType>().unwrap(), ContentType::EpisodicSeries);
        assert_eq!("doc".parse::<ContentType>().unwrap(), ContentType::Documentary);
        assert!("podcast".parse::<ContentType>().is_err());
    }

    #[test]
    fn test_content_type_display_parses_back() {
        for ct in ContentType::ALL {
            assert_eq!(ct.to_string().parse::<ContentType>().unwrap(), ct);
        }
    }

    #[test]
    fn test_content_type_serde_aliases() {
        let ct: ContentType = serde_json::from_str("\"movie\"").unwrap();
        assert_eq!(ct, ContentType::FeatureFilm);

        let ct: ContentType = serde_json::from_str("\"Show\"").unwrap();
        assert_eq!(ct, ContentType::EpisodicSeries);

        assert!(serde_json::from_str::<ContentType>("\"podcast\"").is_err());

        let json = serde_json::to_string(&ContentType::EpisodicSeries).unwrap();
        assert_eq!(json, "\"episodic-series\"");
    }

    #[test]
    fn test_content_item_creation() {
        let item = ContentItem::new(1, "Inception", 148, ContentType::FeatureFilm);

        assert_eq!(item.id, ContentId::new(1));
        assert_eq!(item.title, "Inception");
        assert_eq!(item.duration_minutes, 148);
        assert!(item.is_available);
        assert!(!item.unavailable().is_available);
    }

    #[test]
    fn test_content_id_from_str() {
        assert_eq!("42".parse::<ContentId>().unwrap(), ContentId::new(42));
        assert!("abc".parse::<ContentId>().is_err());
        assert!("-1".parse::<ContentId>().is_err());
    }
}
