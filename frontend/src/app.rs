use serde::Deserialize;
use wasm_bindgen::JsValue;
use yew::{html, Component, Context, Html};

use common::model::template::TemplateVariant;

use crate::components::editor::EditorComponent;

/// Configuration the embedding page leaves on `window.studioConfig`: the
/// template to load into the main preview and the variant previews to
/// attach beside it.
#[derive(Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
struct StudioConfig {
    template_id: Option<String>,
    variants: Vec<TemplateVariant>,
}

fn read_config() -> StudioConfig {
    let Some(window) = web_sys::window() else {
        return StudioConfig::default();
    };
    js_sys::Reflect::get(&window, &JsValue::from_str("studioConfig"))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .and_then(|value| js_sys::JSON::stringify(&value).ok())
        .and_then(|text| text.as_string())
        .and_then(|text| serde_json::from_str(&text).ok())
        .unwrap_or_default()
}

pub struct App {
    config: StudioConfig,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            config: read_config(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="studio-root">
                <EditorComponent
                    template_id={self.config.template_id.clone()}
                    variants={self.config.variants.clone()}
                />
            </div>
        }
    }
}
