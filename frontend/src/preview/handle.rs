use std::collections::BTreeMap;

use common::model::element::Element;
use thiserror::Error;

/// Failure of a single preview instance operation. Errors of this type are
/// contained at the target they occurred on; the fan-out layer never lets
/// them cross over to sibling targets.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PreviewError {
    /// The underlying engine call rejected or the instance is gone.
    #[error("preview call failed: {0}")]
    Sdk(String),
    /// The engine reported an element tree this tool could not read.
    #[error("malformed element tree: {0}")]
    Elements(String),
}

/// Contract a live preview instance must satisfy.
///
/// Mirrors the operations the external engine exposes: a queryable element
/// tree, a seekable timeline, a whole-map property-override channel, an
/// exportable source graph, and template loading. The editing core depends
/// only on this trait, so tests run against in-memory fakes and production
/// runs against [`super::sdk::JsPreviewHandle`].
#[allow(async_fn_in_trait)]
pub trait PreviewHandle {
    /// The instance's current element tree.
    async fn elements(&self) -> Result<Vec<Element>, PreviewError>;

    /// Seeks the instance's timeline to `seconds`.
    async fn set_time(&self, seconds: f64) -> Result<(), PreviewError>;

    /// Replaces the instance's property overrides with the given map. The
    /// engine applies the whole map at once; partial pushes do not exist.
    async fn set_modifications(
        &self,
        modifications: &BTreeMap<String, String>,
    ) -> Result<(), PreviewError>;

    /// Exports the instance's template source graph for render submission.
    async fn template_source(&self) -> Result<serde_json::Value, PreviewError>;

    /// Loads another template into the instance.
    async fn load_template(&self, template_id: &str) -> Result<(), PreviewError>;
}
