use serde::{Deserialize, Serialize};

/// Terminal status of a render job as reported by the render collaborator.
/// There is no intermediate progress reporting; one submission yields one
/// terminal result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStatus {
    Succeeded,
    Failed,
}
