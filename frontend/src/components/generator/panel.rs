//! Browser-side `RenderContext`.
//!
//! Mutations land in plain fields that `view.rs` turns into markup on the next
//! render. Log entries are mirrored to the developer console and alerts use the
//! blocking `window.alert`.

use common::model::log::{LogConsole, LogEntry, LogLevel};
use common::model::media::MediaElement;
use common::submission::{RenderContext, RenderError};

use super::helpers::show_alert;

pub struct ResultPanel {
    pub trigger_busy: bool,
    pub empty_state_visible: bool,
    pub result_visible: bool,
    pub text: Option<String>,
    pub media: Vec<MediaElement>,
    pub logs: LogConsole,
}

impl Default for ResultPanel {
    fn default() -> Self {
        Self {
            trigger_busy: false,
            empty_state_visible: true,
            result_visible: false,
            text: None,
            media: Vec::new(),
            logs: LogConsole::new(),
        }
    }
}

impl RenderContext for ResultPanel {
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
        self.media = elements;
        Ok(())
    }

    fn append_log(&mut self, entry: LogEntry) {
        let line = format!("[{}] {}", entry.time_label(), entry.message);
        match entry.level {
            LogLevel::Error => gloo_console::error!(line),
            LogLevel::Info => gloo_console::info!(line),
            LogLevel::System | LogLevel::Success => gloo_console::log!(line),
        }
        self.logs.push(entry);
    }

    fn alert(&mut self, message: &str) {
        show_alert(message);
    }
}
