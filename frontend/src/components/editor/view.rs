//! View rendering for the template editor component.
//!
//! Layout: the preview grid (main instance plus one cell per template
//! variant, each with its activation toggle), the resolved field list, the
//! render bar, the picker sheet, and the busy overlay shown while a derived
//! expansion is in flight.

use web_sys::{HtmlInputElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::preview::bindings::{FieldBinding, FieldRole};
use crate::preview_grid::PreviewGrid;

use super::dialogs::picker::picker_dialog;
use super::helpers::{variant_container_id, MAIN_PREVIEW_CONTAINER};
use super::messages::Msg;
use super::state::{EditorComponent, RenderPhase};

/// Main view function: preview panel, field panel, render bar, dialogs.
pub fn view(component: &EditorComponent, ctx: &Context<EditorComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="editor-root">
            { build_preview_panel(component, ctx) }
            { build_field_panel(component, link) }
            { build_render_bar(component, link) }
            { picker_dialog(component, link) }
            {
                if component.busy {
                    html! {
                        <div class="busy-overlay">
                            <span>{"Applying selection…"}</span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

/// The main preview plus one cell per variant. Toggling a variant's checkbox
/// decides whether it receives subsequent edits and whether its key is
/// submitted with the render job.
fn build_preview_panel(component: &EditorComponent, ctx: &Context<EditorComponent>) -> Html {
    let link = ctx.link();
    let variants = &ctx.props().variants;

    html! {
        <PreviewGrid columns={variants.len() + 1}>
            <div class="preview-cell">
                <div id={MAIN_PREVIEW_CONTAINER} class="preview-container"></div>
                <span class="preview-label">{"Main"}</span>
            </div>
            {
                for variants.iter().map(|variant| {
                    let key = variant.key.clone();
                    let active = component
                        .session
                        .as_ref()
                        .map(|s| s.is_active(&variant.key))
                        .unwrap_or(true);
                    let ontoggle = link.callback(move |_: Event| Msg::ToggleTarget(key.clone()));
                    html! {
                        <div class="preview-cell">
                            <div id={variant_container_id(&variant.key)} class="preview-container"></div>
                            <label class="preview-label">
                                <input type="checkbox" checked={active} onchange={ontoggle} />
                                { variant.label.clone() }
                            </label>
                        </div>
                    }
                })
            }
        </PreviewGrid>
    }
}

fn build_field_panel(component: &EditorComponent, link: &Scope<EditorComponent>) -> Html {
    if let Some(message) = &component.attach_error {
        return html! {
            <div class="field-panel">
                <p class="attach-error">{ format!("Preview unavailable: {message}") }</p>
            </div>
        };
    }
    if component.session.is_none() {
        return html! {
            <div class="field-panel">
                <p class="field-panel-note">{"Attaching previews…"}</p>
            </div>
        };
    }

    let has_overrides = component
        .session
        .as_ref()
        .map(|s| s.has_overrides())
        .unwrap_or(false);

    html! {
        <div class="field-panel">
            { for component.bindings.iter().map(|binding| build_field_row(component, link, binding)) }
            {
                if has_overrides {
                    html! {
                        <button class="reset-btn" onclick={link.callback(|_| Msg::ResetEdits)}>
                            {"Reset all edits"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_field_row(
    component: &EditorComponent,
    link: &Scope<EditorComponent>,
    binding: &FieldBinding,
) -> Html {
    match binding.role {
        FieldRole::PlainText => {
            let source_name = binding.source_name.clone();
            let oninput = link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::TextInput {
                    source_name: source_name.clone(),
                    value: input.value(),
                }
            });
            html! {
                <div class="field-row">
                    <label class="field-name">{ binding.source_name.clone() }</label>
                    <input
                        type="text"
                        class="field-input"
                        value={component.field_value(&binding.source_name)}
                        placeholder="Template default"
                        {oninput}
                    />
                </div>
            }
        }
        _ => {
            let current = component
                .session
                .as_ref()
                .and_then(|s| s.value_of(&binding.source_name));
            let opened = binding.clone();
            let onclick = link.callback(move |_| Msg::OpenPicker(opened.clone()));
            html! {
                <div class="field-row">
                    <label class="field-name">{ binding.source_name.clone() }</label>
                    <button class="picker-btn" {onclick}>
                        { role_label(&binding.role) }
                        {
                            if current.is_some() {
                                html! { <span class="picker-set-marker">{" ●"}</span> }
                            } else {
                                html! {}
                            }
                        }
                    </button>
                </div>
            }
        }
    }
}

fn build_render_bar(component: &EditorComponent, link: &Scope<EditorComponent>) -> Html {
    let button = match &component.render_phase {
        RenderPhase::Create => html! {
            <button
                class="render-btn"
                disabled={component.session.is_none()}
                onclick={link.callback(|_| Msg::StartRender)}
            >
                {"Create video"}
            </button>
        },
        RenderPhase::Rendering => html! {
            <button class="render-btn" disabled={true}>{"Rendering…"}</button>
        },
        RenderPhase::Ready(_) => html! {
            <button class="render-btn ready" onclick={link.callback(|_| Msg::OpenRenderResult)}>
                {"Download video"}
            </button>
        },
    };

    html! {
        <div class="render-bar">{ button }</div>
    }
}

/// Label shown on picker buttons, by what the field selects.
pub fn role_label(role: &FieldRole) -> String {
    match role {
        FieldRole::PlainText => "Text".to_string(),
        FieldRole::GenericFile => "Choose file".to_string(),
        FieldRole::FrontImage => "Choose front image".to_string(),
        FieldRole::SponsorLogo => "Choose sponsor".to_string(),
        FieldRole::TeamLogoLeft => "Choose home team".to_string(),
        FieldRole::TeamLogoRight => "Choose away team".to_string(),
        FieldRole::Player(slot) => format!("Choose player {slot}"),
    }
}
