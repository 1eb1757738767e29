//! Binding to the preview engine SDK the embedding page loads.
//!
//! The page exposes a `createTemplatePreview(containerId)` factory on
//! `window`; the object it resolves to carries the engine's instance API.
//! Element trees and source graphs cross the boundary as JSON text
//! (`JSON.stringify` on the JS side of the fence, `serde_json` on this one),
//! which keeps the engine's objects out of Rust entirely. Modification maps
//! travel the other way as a plain object built via `Reflect`.

use std::cell::RefCell;
use std::collections::BTreeMap;

use common::model::element::Element;
use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::handle::{PreviewError, PreviewHandle};

#[wasm_bindgen]
extern "C" {
    pub type PreviewSdk;

    #[wasm_bindgen(catch, js_namespace = window, js_name = "createTemplatePreview")]
    async fn create_template_preview(container_id: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = "getElements")]
    fn get_elements(this: &PreviewSdk) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = "setTime")]
    fn set_time(this: &PreviewSdk, seconds: f64) -> js_sys::Promise;

    #[wasm_bindgen(method, js_name = "setModifications")]
    fn set_modifications(this: &PreviewSdk, modifications: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(method, catch, js_name = "getSource")]
    fn get_source(this: &PreviewSdk) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = "loadTemplate")]
    fn load_template(this: &PreviewSdk, template_id: &str) -> js_sys::Promise;

    #[wasm_bindgen(method, js_name = "onStateChange")]
    fn on_state_change(this: &PreviewSdk, callback: &js_sys::Function);
}

/// A live preview instance attached to a DOM container.
pub struct JsPreviewHandle {
    sdk: PreviewSdk,
    // Kept alive for as long as the instance is; dropping the closure would
    // detach the engine's state-change notifications.
    state_change: RefCell<Option<Closure<dyn FnMut(JsValue)>>>,
}

impl JsPreviewHandle {
    /// Attaches a new preview instance to the container with the given DOM
    /// id.
    pub async fn attach(container_id: &str) -> Result<Self, PreviewError> {
        let sdk = create_template_preview(container_id)
            .await
            .map_err(sdk_error)?
            .unchecked_into::<PreviewSdk>();
        Ok(Self {
            sdk,
            state_change: RefCell::new(None),
        })
    }

    /// Subscribes to the engine's state-change notification. The callback
    /// receives the freshly reported element tree; a tree this tool cannot
    /// read is logged and dropped rather than surfaced to the user.
    pub fn subscribe_state_change(&self, on_elements: impl Fn(Vec<Element>) + 'static) {
        let closure = Closure::wrap(Box::new(move |state: JsValue| {
            match parse_json::<Vec<Element>>(&state) {
                Ok(elements) => on_elements(elements),
                Err(err) => gloo_console::error!(format!("unreadable preview state: {err}")),
            }
        }) as Box<dyn FnMut(JsValue)>);
        self.sdk.on_state_change(closure.as_ref().unchecked_ref());
        *self.state_change.borrow_mut() = Some(closure);
    }
}

impl PreviewHandle for JsPreviewHandle {
    async fn elements(&self) -> Result<Vec<Element>, PreviewError> {
        let value = self.sdk.get_elements().map_err(sdk_error)?;
        parse_json(&value)
    }

    async fn set_time(&self, seconds: f64) -> Result<(), PreviewError> {
        JsFuture::from(self.sdk.set_time(seconds))
            .await
            .map_err(sdk_error)?;
        Ok(())
    }

    async fn set_modifications(
        &self,
        modifications: &BTreeMap<String, String>,
    ) -> Result<(), PreviewError> {
        let object = js_sys::Object::new();
        for (selector, value) in modifications {
            Reflect::set(
                &object,
                &JsValue::from_str(selector),
                &JsValue::from_str(value),
            )
            .map_err(sdk_error)?;
        }
        JsFuture::from(self.sdk.set_modifications(&object))
            .await
            .map_err(sdk_error)?;
        Ok(())
    }

    async fn template_source(&self) -> Result<serde_json::Value, PreviewError> {
        let value = self.sdk.get_source().map_err(sdk_error)?;
        parse_json(&value)
    }

    async fn load_template(&self, template_id: &str) -> Result<(), PreviewError> {
        JsFuture::from(self.sdk.load_template(template_id))
            .await
            .map_err(sdk_error)?;
        Ok(())
    }
}

/// Round-trips a JS value through JSON text into a serde-readable shape.
fn parse_json<T: serde::de::DeserializeOwned>(value: &JsValue) -> Result<T, PreviewError> {
    let text = js_sys::JSON::stringify(value)
        .map_err(sdk_error)?
        .as_string()
        .ok_or_else(|| PreviewError::Elements("state is not JSON-serializable".into()))?;
    serde_json::from_str(&text).map_err(|err| PreviewError::Elements(err.to_string()))
}

fn sdk_error(value: JsValue) -> PreviewError {
    let message = value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"));
    PreviewError::Sdk(message)
}
