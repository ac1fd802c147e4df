use thiserror::Error;

use crate::model::generation::GenerationResult;
use crate::submission::render::RenderError;

/// Status and body of a reply that reached the client.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("no response after {0} ms, request aborted")]
    Timeout(u32),
    #[error("request cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("invalid response payload: {0}")]
    Decode(String),
    #[error("generation failed: {}", .0.join("; "))]
    Application(Vec<String>),
    #[error("could not render result: {0}")]
    Render(#[from] RenderError),
}

/// Interprets what came back from the network.
///
/// Non-2xx statuses are transport failures and their body is never parsed.
/// A 2xx body carrying a non-empty `errors` list is an application failure.
pub fn interpret(reply: Result<HttpReply, TransportError>) -> Result<GenerationResult, SubmitError> {
    let reply = reply?;
    if !reply.is_success() {
        return Err(TransportError::Status(reply.status).into());
    }

    let result: GenerationResult =
        serde_json::from_str(&reply.body).map_err(|e| SubmitError::Decode(e.to_string()))?;

    if result.has_errors() {
        return Err(SubmitError::Application(result.reported_errors().to_vec()));
    }
    Ok(result)
}
