use serde::{Deserialize, Serialize};

use crate::model::media::MediaKind;

/// Payload returned by `POST /generate` on a 2xx status.
///
/// Every field is optional on the wire; `null` and a missing key mean the same
/// thing. Extra keys such as `status` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default)]
    pub generated_text: Option<String>,

    #[serde(default)]
    pub generated_media_url: Option<GeneratedMedia>,

    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

impl GenerationResult {
    /// Error messages reported by the pipeline, empty when none were sent.
    pub fn reported_errors(&self) -> &[String] {
        self.errors.as_deref().unwrap_or_default()
    }

    pub fn has_errors(&self) -> bool {
        !self.reported_errors().is_empty()
    }
}

/// `generated_media_url`: either one item or an ordered carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedMedia {
    Single(MediaItem),
    Carousel(Vec<MediaItem>),
}

/// A media reference, either a bare URL or a URL with an explicit kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaItem {
    Url(String),
    Tagged { url: String, kind: MediaKind },
}

impl MediaItem {
    pub fn url(&self) -> &str {
        match self {
            MediaItem::Url(url) => url,
            MediaItem::Tagged { url, .. } => url,
        }
    }

    /// The kind declared by the backend, if any.
    pub fn declared_kind(&self) -> Option<MediaKind> {
        match self {
            MediaItem::Url(_) => None,
            MediaItem::Tagged { kind, .. } => Some(*kind),
        }
    }
}

impl From<&str> for MediaItem {
    fn from(url: &str) -> Self {
        MediaItem::Url(url.to_string())
    }
}
