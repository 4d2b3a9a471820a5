use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type CourseId = String;

/// A structured course produced by the backend from a source video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    #[serde(default)]
    pub video_id: Option<String>,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub sections: Vec<CourseSection>,
    #[serde(default)]
    pub visualizations: Vec<CourseVisualization>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSection {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseVisualization {
    pub id: String,
    pub title: String,
    pub description: String,
    /// `None` while the image is still pending.
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub related_section_id: Option<String>,
}

/// Accepts RFC 3339 as well as the naive ISO-8601 form (no offset) the
/// backend writes; naive values are taken as UTC. Serializes as RFC 3339.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp {raw:?}")))
    }

    pub(super) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}
