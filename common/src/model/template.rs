use serde::{Deserialize, Serialize};

/// One additional preview attached beside the main one, usually an
/// aspect-ratio rendition of the same design. The variant list is fixed when
/// the previews are attached; only the per-variant activation toggles change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVariant {
    pub key: String,
    pub template_id: String,
    pub label: String,
}
