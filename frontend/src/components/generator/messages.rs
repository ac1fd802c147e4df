use common::submission::{HttpReply, SubmissionTicket, TransportError};
use web_sys::FormData;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Result,
    Logs,
}

pub enum Msg {
    /// Form snapshot taken inside the submit handler.
    Submit(FormData),
    Completed {
        ticket: SubmissionTicket,
        reply: Result<HttpReply, TransportError>,
    },
    Cancel,
    SetTab(Tab),
    CopyResult,
    CopySucceeded,
    CopyFailed(String),
    RevertCopyLabel(u64),
}
