//! Update function for the generation form, Elm-style: mutate the state for
//! `msg` and return whether the view must re-render.
//!
//! Key behaviors
//! - `Submit` starts the lifecycle through `SubmissionController::begin` and
//!   spawns exactly one request; `Completed` hands the reply back to
//!   `SubmissionController::complete`, which always re-enables the trigger.
//! - `Cancel` aborts the in-flight request.
//! - Copying the result text with a temporary "Copied!" label.

use common::model::log::LogEntry;
use common::submission::{RenderContext, COPY_CONFIRMATION_MS};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;
use yew::prelude::*;

use super::helpers::{media_choice_of, send_generation, show_toast, write_clipboard};
use super::messages::{Msg, Tab};
use super::state::GeneratorComponent;

pub fn update(component: &mut GeneratorComponent, ctx: &Context<GeneratorComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Submit(form) => {
            let choice = media_choice_of(&form);
            let ticket = match component.controller.begin(&mut component.panel, choice) {
                Ok(ticket) => ticket,
                Err(rejected) => {
                    gloo_console::warn!(rejected.to_string());
                    return false;
                }
            };

            let abort = AbortController::new().ok();
            component.abort = abort.clone();
            component.active_tab = Tab::Result;

            let props = ctx.props();
            let endpoint = props.endpoint.to_string();
            let timeout_ms = props.timeout_ms;
            let link = ctx.link().clone();
            spawn_local(async move {
                let reply = send_generation(&endpoint, form, abort, timeout_ms).await;
                link.send_message(Msg::Completed { ticket, reply });
            });
            true
        }
        Msg::Completed { ticket, reply } => {
            component.abort = None;
            component
                .controller
                .complete(&mut component.panel, &ticket, reply);
            true
        }
        Msg::Cancel => match component.abort.take() {
            Some(controller) => {
                component
                    .panel
                    .append_log(LogEntry::info("Cancelling the request..."));
                controller.abort();
                true
            }
            None => false,
        },
        Msg::SetTab(tab) => {
            component.active_tab = tab;
            true
        }
        Msg::CopyResult => {
            let text = component.panel.text.clone().unwrap_or_default();
            let link = ctx.link().clone();
            spawn_local(async move {
                match write_clipboard(&text).await {
                    Ok(()) => link.send_message(Msg::CopySucceeded),
                    Err(reason) => link.send_message(Msg::CopyFailed(reason)),
                }
            });
            false
        }
        Msg::CopySucceeded => {
            let token = component.copy_label.confirm();
            let link = ctx.link().clone();
            spawn_local(async move {
                TimeoutFuture::new(COPY_CONFIRMATION_MS).await;
                link.send_message(Msg::RevertCopyLabel(token));
            });
            true
        }
        Msg::CopyFailed(reason) => {
            gloo_console::warn!(format!("clipboard write failed: {}", reason));
            show_toast("Could not copy the text to the clipboard.");
            false
        }
        Msg::RevertCopyLabel(token) => component.copy_label.revert(token),
    }
}
