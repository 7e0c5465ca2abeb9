//! Data models for MDPLinks
//!
//! Defines the `Link` record. Field names on disk use the capitalized form
//! (`Url`, `Title`, `Tags`, `CreatedAt`) so existing database files stay
//! readable.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A saved link
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    /// The URL, used as the logical identifier
    #[serde(rename = "Url")]
    pub url: String,
    /// Display title; empty means no title
    #[serde(rename = "Title", default)]
    pub title: String,
    /// Lowercase tags, in the order they were given
    #[serde(rename = "Tags", default)]
    pub tags: Vec<String>,
    /// When this link was created
    #[serde(rename = "CreatedAt", with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Create a new link stamped with the current time
    ///
    /// The timestamp is truncated to milliseconds, the precision kept on disk.
    pub fn new(url: impl Into<String>, tags: Vec<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            tags,
            created_at: Utc::now().trunc_subsecs(3),
        }
    }

    /// Whether the link has a title
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// Whether any of the link's tags equals `tag`
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// `CreatedAt` (de)serialization
///
/// Written as RFC 3339 with millisecond precision and a `+00:00` offset.
/// Any RFC 3339 offset is accepted when reading and normalized to UTC.
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(dt: &DateTime<Utc>) -> String {
        dt.to_rfc3339_opts(SecondsFormat::Millis, false)
    }

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(dt))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
