//! The content pipeline behind `/generate`.
//!
//! The gateway only knows the pipeline through [`ContentWorkflow`]: it hands
//! over a [`GenerationRequest`] and gets back the pipeline's final state as a
//! [`GenerationResult`]. How the pipeline plans, writes and renders is not
//! this crate's concern.

use async_trait::async_trait;
use common::model::generation::GenerationResult;
use common::requests::GenerationRequest;
use thiserror::Error;

mod upstream;

pub use upstream::UpstreamWorkflow;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Workflow app not initialized. Set WORKFLOW_URL to the content pipeline endpoint.")]
    NotConfigured,
    #[error("content pipeline unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("content pipeline answered HTTP {status}: {body}")]
    Upstream { status: u16, body: String },
}

#[async_trait]
pub trait ContentWorkflow: Send + Sync {
    async fn invoke(&self, request: GenerationRequest) -> Result<GenerationResult, WorkflowError>;
}

/// Used when no pipeline endpoint is configured; every call fails.
pub struct UnconfiguredWorkflow;

#[async_trait]
impl ContentWorkflow for UnconfiguredWorkflow {
    async fn invoke(&self, _request: GenerationRequest) -> Result<GenerationResult, WorkflowError> {
        Err(WorkflowError::NotConfigured)
    }
}
