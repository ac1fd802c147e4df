use std::time::Duration;

use async_trait::async_trait;
use common::model::generation::GenerationResult;
use common::requests::GenerationRequest;
use log::debug;

use super::{ContentWorkflow, WorkflowError};

/// Forwards the request as JSON to a running pipeline service.
pub struct UpstreamWorkflow {
    client: reqwest::Client,
    url: String,
}

impl UpstreamWorkflow {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, WorkflowError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ContentWorkflow for UpstreamWorkflow {
    async fn invoke(&self, request: GenerationRequest) -> Result<GenerationResult, WorkflowError> {
        debug!("posting generation request to {}", self.url);
        let response = self.client.post(&self.url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WorkflowError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<GenerationResult>().await?)
    }
}
