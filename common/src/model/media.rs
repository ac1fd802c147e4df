//! Media planning for the result panel.
//!
//! Turns the `generated_media_url` part of a reply into the list of elements the
//! panel has to draw. Untagged single URLs are classified by substring, which is
//! a heuristic and not a content-type check; tagged items are trusted as-is.

use serde::{Deserialize, Serialize};

use crate::model::generation::{GeneratedMedia, MediaItem};

/// Text shown in the media area when nothing was generated.
pub const NO_MEDIA_PLACEHOLDER: &str = "No media generated.";

const VIDEO_MARKERS: [&str; 2] = [".mp4", ".webm"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classifies an untagged URL: video when it looks like a video file or
    /// when the user asked for a video, image otherwise.
    pub fn classify(url: &str, choice: Option<&MediaChoice>) -> MediaKind {
        let looks_like_video = VIDEO_MARKERS.iter().any(|marker| url.contains(marker));
        if looks_like_video || matches!(choice, Some(MediaChoice::Video)) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

/// Value of the `user_media_choice` form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaChoice {
    Image,
    Video,
    PhotoCarousel,
    TextOnly,
    Other(String),
}

impl MediaChoice {
    /// Parses the raw form value; blank values mean "no preference". Known
    /// choices must match exactly, so `" video "` is not [`MediaChoice::Video`].
    pub fn from_form_value(value: &str) -> Option<MediaChoice> {
        if value.trim().is_empty() {
            return None;
        }
        let choice = match value {
            "image" => MediaChoice::Image,
            "video" => MediaChoice::Video,
            "photo_carousel" => MediaChoice::PhotoCarousel,
            "text_only" => MediaChoice::TextOnly,
            other => MediaChoice::Other(other.to_string()),
        };
        Some(choice)
    }

    pub fn as_str(&self) -> &str {
        match self {
            MediaChoice::Image => "image",
            MediaChoice::Video => "video",
            MediaChoice::PhotoCarousel => "photo_carousel",
            MediaChoice::TextOnly => "text_only",
            MediaChoice::Other(value) => value,
        }
    }
}

/// Playback attributes of a rendered `<video>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    pub controls: bool,
    pub autoplay: bool,
    pub looping: bool,
}

impl Playback {
    pub const LOOPING_AUTOPLAY: Playback = Playback {
        controls: true,
        autoplay: true,
        looping: true,
    };
}

/// One element of the media area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaElement {
    Placeholder(&'static str),
    Image { src: String },
    Video { src: String, playback: Playback },
}

impl MediaElement {
    fn of_kind(kind: MediaKind, src: &str) -> MediaElement {
        match kind {
            MediaKind::Image => MediaElement::Image {
                src: src.to_string(),
            },
            MediaKind::Video => MediaElement::Video {
                src: src.to_string(),
                playback: Playback::LOOPING_AUTOPLAY,
            },
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, MediaElement::Placeholder(_))
    }
}

/// Builds the media elements for a successful reply.
///
/// - nothing (or an empty string / empty carousel) gives one placeholder;
/// - a carousel gives one image per entry, in order, unless an entry is tagged;
///   entries are not inspected, so an empty URL still yields its element;
/// - a single item gives exactly one element, using its tag when present and
///   [`MediaKind::classify`] otherwise.
pub fn plan_media(media: Option<&GeneratedMedia>, choice: Option<&MediaChoice>) -> Vec<MediaElement> {
    let elements = match media {
        None => Vec::new(),
        Some(GeneratedMedia::Carousel(items)) => items
            .iter()
            .map(|item| {
                let kind = item.declared_kind().unwrap_or(MediaKind::Image);
                MediaElement::of_kind(kind, item.url())
            })
            .collect(),
        Some(GeneratedMedia::Single(item)) if item.url().is_empty() => Vec::new(),
        Some(GeneratedMedia::Single(item)) => {
            vec![MediaElement::of_kind(single_kind(item, choice), item.url())]
        }
    };

    if elements.is_empty() {
        vec![MediaElement::Placeholder(NO_MEDIA_PLACEHOLDER)]
    } else {
        elements
    }
}

fn single_kind(item: &MediaItem, choice: Option<&MediaChoice>) -> MediaKind {
    item.declared_kind()
        .unwrap_or_else(|| MediaKind::classify(item.url(), choice))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(url: &str) -> GeneratedMedia {
        GeneratedMedia::Single(MediaItem::from(url))
    }

    #[test]
    fn absent_media_renders_placeholder() {
        assert_eq!(
            plan_media(None, None),
            vec![MediaElement::Placeholder(NO_MEDIA_PLACEHOLDER)]
        );
    }

    #[test]
    fn carousel_keeps_order_and_renders_images() {
        let media = GeneratedMedia::Carousel(vec!["u1".into(), "u2".into(), "clip.mp4".into()]);
        let elements = plan_media(Some(&media), Some(&MediaChoice::Video));

        let sources: Vec<_> = elements
            .iter()
            .map(|e| match e {
                MediaElement::Image { src } => src.as_str(),
                other => panic!("unexpected element {other:?}"),
            })
            .collect();
        assert_eq!(sources, ["u1", "u2", "clip.mp4"]);
    }

    #[test]
    fn carousel_keeps_blank_entries() {
        let media = GeneratedMedia::Carousel(vec!["u1".into(), "".into(), "u3".into()]);
        let elements = plan_media(Some(&media), None);

        assert_eq!(
            elements,
            vec![
                MediaElement::Image { src: "u1".to_string() },
                MediaElement::Image { src: String::new() },
                MediaElement::Image { src: "u3".to_string() },
            ]
        );
    }

    #[test]
    fn single_video_extension_renders_looping_video() {
        let elements = plan_media(Some(&single("https://cdn/clip.webm?sig=1")), None);
        assert_eq!(
            elements,
            vec![MediaElement::Video {
                src: "https://cdn/clip.webm?sig=1".to_string(),
                playback: Playback::LOOPING_AUTOPLAY,
            }]
        );
    }

    #[test]
    fn media_choice_video_forces_video_element() {
        let elements = plan_media(Some(&single("https://fal.media/out")), Some(&MediaChoice::Video));
        assert!(matches!(elements.as_slice(), [MediaElement::Video { .. }]));
    }

    #[test]
    fn single_image_when_choice_is_not_video() {
        let elements = plan_media(Some(&single("pic.png")), Some(&MediaChoice::Image));
        assert_eq!(
            elements,
            vec![MediaElement::Image {
                src: "pic.png".to_string()
            }]
        );
    }

    #[test]
    fn padded_video_choice_does_not_force_video() {
        let choice = MediaChoice::from_form_value(" video ");
        let elements = plan_media(Some(&single("pic.png")), choice.as_ref());
        assert_eq!(
            elements,
            vec![MediaElement::Image {
                src: "pic.png".to_string()
            }]
        );
    }

    #[test]
    fn declared_kind_wins_over_heuristic() {
        let media = GeneratedMedia::Single(MediaItem::Tagged {
            url: "https://cdn/render.mp4".to_string(),
            kind: MediaKind::Image,
        });
        let elements = plan_media(Some(&media), Some(&MediaChoice::Video));
        assert!(matches!(elements.as_slice(), [MediaElement::Image { .. }]));
    }

    #[test]
    fn empty_values_degrade_to_placeholder() {
        assert!(plan_media(Some(&single("")), None)[0].is_placeholder());
        assert!(plan_media(Some(&GeneratedMedia::Carousel(vec![])), None)[0].is_placeholder());
    }

    #[test]
    fn media_choice_parsing() {
        assert_eq!(MediaChoice::from_form_value("video"), Some(MediaChoice::Video));
        assert_eq!(
            MediaChoice::from_form_value(" video "),
            Some(MediaChoice::Other(" video ".to_string()))
        );
        assert_eq!(MediaChoice::from_form_value(""), None);
        assert_eq!(MediaChoice::from_form_value("  "), None);
        assert_eq!(
            MediaChoice::from_form_value("gif").map(|c| c.as_str().to_string()),
            Some("gif".to_string())
        );
    }
}
