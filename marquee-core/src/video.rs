//! Video entity and identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a video in the catalog.
///
/// Lookup is an exact, case-sensitive match on the underlying string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VideoId {
    fn from(id: &str) -> Self {
        VideoId(id.to_string())
    }
}

impl From<String> for VideoId {
    fn from(id: String) -> Self {
        VideoId(id)
    }
}

/// One library entry as it arrives from the data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Unique video id
    pub id: VideoId,
    /// Display title
    pub title: String,
    /// Tags, each carrying its `#` prefix
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A video in the catalog.
///
/// Id, title, and tags are fixed at load time. The flag is the only mutable
/// state: `Some(reason)` marks the video unavailable for playback and
/// playlist inclusion.
#[derive(Debug, Clone)]
pub struct Video {
    id: VideoId,
    title: String,
    tags: Vec<String>,
    flag: Option<String>,
}

impl Video {
    pub(crate) fn from_record(record: VideoRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            tags: record.tags,
            flag: None,
        }
    }

    /// Returns the video id.
    pub fn id(&self) -> &VideoId {
        &self.id
    }

    /// Returns the display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the tags in library order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether this video is currently flagged.
    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    /// The flag reason, present exactly while the video is flagged.
    pub fn flag_reason(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    /// Case-insensitive exact match against this video's tags.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }

    pub(crate) fn set_flag(&mut self, reason: String) {
        self.flag = Some(reason);
    }

    pub(crate) fn clear_flag(&mut self) {
        self.flag = None;
    }
}
