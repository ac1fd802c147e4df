//! Generation form and result panel: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering, and
//! helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `GeneratorProps`, `GeneratorComponent`).
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - On creation, write a `system` entry into the log console so the logs tab
//!   is never blank.

use common::model::log::LogEntry;
use common::submission::RenderContext;
use yew::prelude::*;

mod helpers;
mod messages;
mod panel;
mod props;
mod state;
mod update;
mod view;

pub use messages::{Msg, Tab};
pub use props::GeneratorProps;
pub use state::GeneratorComponent;

impl Component for GeneratorComponent {
    type Message = Msg;
    type Properties = GeneratorProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut component = GeneratorComponent::new();
        component.panel.append_log(LogEntry::system(format!(
            "Ready. Requests go to {}.",
            ctx.props().endpoint
        )));
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(controller) = self.abort.take() {
            controller.abort();
        }
    }
}
