//! Properties for the `EditorComponent`.

use yew::prelude::*;

use common::model::template::TemplateVariant;

/// Configuration passed from the embedding page via the app shell.
///
/// `template_id` is the template loaded into the main preview on first
/// render; without it the preview keeps whatever the engine loads by
/// default. `variants` lists the additional previews to attach beside the
/// main one. The set is fixed for the whole session; only the per-variant
/// activation toggles change afterwards.
#[derive(Properties, PartialEq, Clone)]
pub struct EditorProps {
    #[prop_or_default]
    pub template_id: Option<String>,

    #[prop_or_default]
    pub variants: Vec<TemplateVariant>,
}
