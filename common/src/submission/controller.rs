//! UI state machine of one generation request.
//!
//! `begin` moves the panel into `Generating` and hands out a ticket; the caller
//! then issues exactly one request and passes the ticket back to `complete`
//! with whatever the network produced. `complete` always re-enables the
//! trigger, whichever branch it takes.

use thiserror::Error;

use crate::model::generation::GenerationResult;
use crate::model::log::LogEntry;
use crate::model::media::{MediaChoice, plan_media};
use crate::requests::GENERATE_PATH;
use crate::submission::outcome::{HttpReply, SubmitError, TransportError, interpret};
use crate::submission::render::{NO_TEXT_PLACEHOLDER, RenderContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiPhase {
    #[default]
    Idle,
    Generating,
    Success,
    Failed,
}

/// Proof that a submission was started; required to complete it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    id: u64,
    media_choice: Option<MediaChoice>,
}

impl SubmissionTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn media_choice(&self) -> Option<&MediaChoice> {
        self.media_choice.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a generation request is already in progress")]
    AlreadyInFlight,
}

#[derive(Debug, Default)]
pub struct SubmissionController {
    phase: UiPhase,
    next_id: u64,
    in_flight: Option<u64>,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> UiPhase {
        self.phase
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Enters `Generating`. `media_choice` is the form value captured together
    /// with the rest of the snapshot.
    pub fn begin<R: RenderContext>(
        &mut self,
        ctx: &mut R,
        media_choice: Option<MediaChoice>,
    ) -> Result<SubmissionTicket, SubmitRejected> {
        if self.in_flight.is_some() {
            return Err(SubmitRejected::AlreadyInFlight);
        }

        self.next_id += 1;
        let id = self.next_id;
        self.in_flight = Some(id);
        self.phase = UiPhase::Generating;

        ctx.set_trigger_busy(true);
        ctx.set_empty_state_visible(true);
        ctx.set_result_visible(false);
        ctx.clear_result();
        ctx.append_log(LogEntry::system("Starting content generation process..."));
        ctx.append_log(LogEntry::info(format!(
            "Sending request to {GENERATE_PATH}..."
        )));

        Ok(SubmissionTicket { id, media_choice })
    }

    /// Applies the network outcome of `ticket`. A ticket that is not the one in
    /// flight is ignored and the current phase is returned unchanged.
    pub fn complete<R: RenderContext>(
        &mut self,
        ctx: &mut R,
        ticket: &SubmissionTicket,
        reply: Result<HttpReply, TransportError>,
    ) -> UiPhase {
        if self.in_flight != Some(ticket.id) {
            return self.phase;
        }

        let rendered = interpret(reply).and_then(|result| render_success(ctx, ticket, &result));
        self.phase = match rendered {
            Ok(()) => {
                ctx.append_log(LogEntry::success("Content generation completed successfully."));
                UiPhase::Success
            }
            Err(err) => {
                report_failure(ctx, &err);
                UiPhase::Failed
            }
        };

        ctx.set_trigger_busy(false);
        self.in_flight = None;
        self.phase
    }
}

fn render_success<R: RenderContext>(
    ctx: &mut R,
    ticket: &SubmissionTicket,
    result: &GenerationResult,
) -> Result<(), SubmitError> {
    ctx.set_empty_state_visible(false);
    ctx.set_result_visible(true);

    let text = result
        .generated_text
        .as_deref()
        .filter(|text| !text.is_empty())
        .unwrap_or(NO_TEXT_PLACEHOLDER);
    ctx.render_text(text);

    let elements = plan_media(result.generated_media_url.as_ref(), ticket.media_choice());
    ctx.render_media(elements)?;
    Ok(())
}

fn report_failure<R: RenderContext>(ctx: &mut R, err: &SubmitError) {
    match err {
        SubmitError::Application(messages) => {
            for message in messages {
                ctx.append_log(LogEntry::error(message.clone()));
            }
        }
        other => ctx.append_log(LogEntry::error(format!("Error: {other}"))),
    }

    // A render failure may have revealed the panel already.
    ctx.clear_result();
    ctx.set_result_visible(false);
    ctx.set_empty_state_visible(true);

    if !matches!(err, SubmitError::Transport(TransportError::Cancelled)) {
        ctx.alert(&format!("Content generation failed. {err}"));
    }
}
