//! Submission lifecycle of the generation form.
//!
//! - `outcome`: turns an HTTP reply into a [`GenerationResult`] or a typed error.
//! - `render`: the [`RenderContext`] seam the UI implements.
//! - `controller`: the `Idle -> Generating -> Success | Failed` state machine.
//! - `copy`: label feedback of the "copy result" control.
//!
//! [`GenerationResult`]: crate::model::generation::GenerationResult

mod controller;
mod copy;
mod outcome;
mod render;

pub use controller::{SubmissionController, SubmissionTicket, SubmitRejected, UiPhase};
pub use copy::{COPY_CONFIRMATION, COPY_CONFIRMATION_MS, CopyLabel};
pub use outcome::{HttpReply, SubmitError, TransportError, interpret};
pub use render::{NO_TEXT_PLACEHOLDER, RenderContext, RenderError};

#[cfg(test)]
pub(crate) mod testing;
