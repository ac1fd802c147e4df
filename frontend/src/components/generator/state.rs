//! Component state of the generation form.
//!
//! The struct holds the submission state machine, the rendered panel (which is
//! the `RenderContext` handed to the state machine), the active tab, the abort
//! handle of the in-flight request, and the copy control label.

use common::submission::{CopyLabel, SubmissionController};
use web_sys::AbortController;
use yew::prelude::*;

use super::messages::Tab;
use super::panel::ResultPanel;

pub const COPY_LABEL: &str = "Copy Text";

pub struct GeneratorComponent {
    pub controller: SubmissionController,

    /// Everything the result and logs tabs draw.
    pub panel: ResultPanel,

    pub active_tab: Tab,

    /// Reference to the `<form>` element, used to build the `FormData` snapshot.
    pub form_ref: NodeRef,

    /// Abort handle of the in-flight request, if any.
    pub abort: Option<AbortController>,

    pub copy_label: CopyLabel,
}

impl GeneratorComponent {
    pub fn new() -> Self {
        Self {
            controller: SubmissionController::new(),
            panel: ResultPanel::default(),
            active_tab: Tab::Result,
            form_ref: NodeRef::default(),
            abort: None,
            copy_label: CopyLabel::new(COPY_LABEL),
        }
    }
}
