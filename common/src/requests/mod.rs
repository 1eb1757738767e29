use serde::{Deserialize, Serialize};

use crate::jobs::RenderStatus;

/// One page of catalog search results. `has_more` drives the picker's
/// "load more" control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage<T> {
    pub records: Vec<T>,
    pub has_more: bool,
}

impl<T> SearchPage<T> {
    /// The degraded result used when a lookup provider is unreachable or
    /// answers with a non-success status.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            has_more: false,
        }
    }
}

/// Render submission payload: the main preview's exported template source
/// graph plus the keys of the preview targets the user left active.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub source: serde_json::Value,
    pub templates: Vec<String>,
}

/// Terminal result of a render submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResult {
    pub status: RenderStatus,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Response of the upload collaborator: the publicly reachable URL of the
/// stored file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub url: String,
}
