use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::workflow::WorkflowError;

/// Failures of `POST /generate`, rendered as `{ "detail": "..." }`.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("malformed multipart payload: {0}")]
    Multipart(String),
    #[error("upload exceeds the limit of {0} bytes")]
    PayloadTooLarge(usize),
    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}

impl From<actix_multipart::MultipartError> for GatewayError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        GatewayError::Multipart(err.to_string())
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::MissingField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            GatewayError::Multipart(_) => StatusCode::BAD_REQUEST,
            GatewayError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            GatewayError::Workflow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}
