//! One-shot render submission. A submission carries the exported template
//! source graph plus the keys of the still-active preview targets and waits
//! for the collaborator's single terminal answer; there is no progress
//! stream to consume.

use common::jobs::RenderStatus;
use common::requests::{RenderRequest, RenderResult};
use gloo_net::http::Request;
use thiserror::Error;

const RENDER_ENDPOINT: &str = "/api/render";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render request failed: {0}")]
    Request(String),
    #[error("{0}")]
    Rejected(String),
}

/// Submits the render job and resolves with the download URL of the finished
/// video, or the collaborator's failure message.
pub async fn submit(request: &RenderRequest) -> Result<String, RenderError> {
    let response = Request::post(RENDER_ENDPOINT)
        .json(request)
        .map_err(|err| RenderError::Request(err.to_string()))?
        .send()
        .await
        .map_err(|err| RenderError::Request(err.to_string()))?;

    if response.status() != 200 {
        return Err(RenderError::Rejected(format!(
            "render service answered {}",
            response.status()
        )));
    }

    let result: RenderResult = response
        .json()
        .await
        .map_err(|err| RenderError::Request(err.to_string()))?;

    match (result.status, result.url) {
        (RenderStatus::Succeeded, Some(url)) => Ok(url),
        (RenderStatus::Succeeded, None) => {
            Err(RenderError::Rejected("render finished without a result URL".into()))
        }
        (RenderStatus::Failed, _) => Err(RenderError::Rejected(
            result
                .error_message
                .unwrap_or_else(|| "render failed".to_string()),
        )),
    }
}
