use crate::model::log::{LogEntry, LogLevel};
use crate::model::media::MediaElement;
use crate::submission::render::{RenderContext, RenderError};

/// In-memory `RenderContext` recording every call.
#[derive(Debug, Default)]
pub(crate) struct RecordingContext {
    pub trigger_busy: bool,
    pub empty_state_visible: bool,
    pub result_visible: bool,
    pub text: Option<String>,
    pub media: Vec<MediaElement>,
    pub logs: Vec<LogEntry>,
    pub alerts: Vec<String>,
    pub fail_media: bool,
}

impl RecordingContext {
    pub fn with_previous_result() -> Self {
        Self {
            result_visible: true,
            text: Some("old".to_string()),
            media: vec![MediaElement::Image {
                src: "old.png".to_string(),
            }],
            ..Default::default()
        }
    }

    pub fn levels(&self) -> Vec<LogLevel> {
        self.logs.iter().map(|e| e.level).collect()
    }
}

impl RenderContext for RecordingContext {
    fn set_trigger_busy(&mut self, busy: bool) {
        self.trigger_busy = busy;
    }

    fn set_empty_state_visible(&mut self, visible: bool) {
        self.empty_state_visible = visible;
    }

    fn set_result_visible(&mut self, visible: bool) {
        self.result_visible = visible;
    }

    fn clear_result(&mut self) {
        self.text = None;
        self.media.clear();
    }

    fn render_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }

    fn render_media(&mut self, elements: Vec<MediaElement>) -> Result<(), RenderError> {
        if self.fail_media {
            return Err(RenderError("media area unavailable".to_string()));
        }
        self.media = elements;
        Ok(())
    }

    fn append_log(&mut self, entry: LogEntry) {
        self.logs.push(entry);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
