use thiserror::Error;

use crate::model::log::LogEntry;
use crate::model::media::MediaElement;

/// Text shown in the result panel when the reply has no text.
pub const NO_TEXT_PLACEHOLDER: &str = "No text was generated.";

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0}")]
pub struct RenderError(pub String);

/// Everything the submission lifecycle is allowed to touch in the UI.
///
/// The browser component implements it on its own state; tests substitute a
/// recording implementation.
pub trait RenderContext {
    /// Disables the submit trigger and marks it busy, or the reverse.
    fn set_trigger_busy(&mut self, busy: bool);

    fn set_empty_state_visible(&mut self, visible: bool);

    fn set_result_visible(&mut self, visible: bool);

    /// Drops previously rendered text and media.
    fn clear_result(&mut self);

    fn render_text(&mut self, text: &str);

    fn render_media(&mut self, elements: Vec<MediaElement>) -> Result<(), RenderError>;

    fn append_log(&mut self, entry: LogEntry);

    /// Blocking, user-facing failure notification.
    fn alert(&mut self, message: &str);
}
