//! Template editor: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `EditorProps`, `EditorComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, attach the preview engine to the main container and to
//!   one container per template variant, subscribe to the main instance's
//!   state-change notifications, and hand the finished session to the
//!   component.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod debounce;
mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use crate::preview::handle::PreviewHandle;
use crate::preview::sdk::JsPreviewHandle;
use crate::preview::session::PreviewSession;

use helpers::{variant_container_id, MAIN_PREVIEW_CONTAINER};
pub use messages::Msg;
pub use props::EditorProps;
pub use state::EditorComponent;

impl Component for EditorComponent {
    type Message = Msg;
    type Properties = EditorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        EditorComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            let template_id = ctx.props().template_id.clone();
            let variants = ctx.props().variants.clone();

            spawn_local(async move {
                let main = match JsPreviewHandle::attach(MAIN_PREVIEW_CONTAINER).await {
                    Ok(main) => main,
                    Err(err) => {
                        link.send_message(Msg::AttachFailed(err.to_string()));
                        return;
                    }
                };

                if let Some(id) = &template_id {
                    if let Err(err) = main.load_template(id).await {
                        gloo_console::error!(format!("could not load template {id}: {err}"));
                    }
                }

                {
                    let link = link.clone();
                    main.subscribe_state_change(move |elements| {
                        link.send_message(Msg::ElementsChanged(elements));
                    });
                }

                // Additional previews attach active; a variant that fails to
                // attach is logged and left out, the session works without it.
                let mut session = PreviewSession::new("main", main);
                for variant in variants {
                    match JsPreviewHandle::attach(&variant_container_id(&variant.key)).await {
                        Ok(handle) => {
                            if let Err(err) = handle.load_template(&variant.template_id).await {
                                gloo_console::error!(format!(
                                    "could not load template {} into preview '{}': {err}",
                                    variant.template_id, variant.key
                                ));
                            }
                            session.attach(variant.key, handle, true);
                        }
                        Err(err) => {
                            gloo_console::error!(format!(
                                "could not attach preview '{}': {err}",
                                variant.key
                            ));
                        }
                    }
                }

                link.send_message(Msg::SessionReady(session));
            });
        }
    }
}
