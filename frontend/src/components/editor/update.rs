//! Update function for the template editor component.
//!
//! Single Elm-style `update`: receives the current `EditorComponent` state,
//! the `Context`, and a `Msg`, mutates the state, and returns whether the
//! view should re-render.
//!
//! Key behaviors
//! - Text edits echo locally at once and reach the previews through the
//!   debounce channel, one write per quiet window.
//! - Every propagated edit goes through the session's fan-out: seek, then
//!   whole-map push, per active target, failures contained per target.
//! - Catalog selections expand into their derived edit lists behind one busy
//!   flag; sponsor logos and local files pass through the upload
//!   collaborator first.
//! - Render submission is a three-phase machine guarded against duplicate
//!   clicks.

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use common::requests::RenderRequest;

use crate::preview::bindings::FieldRole;
use crate::preview::broadcast::TargetOutcome;
use crate::services::{expansion, lookup, render, upload};
use crate::services::expansion::TeamSide;
use crate::sheet::modal_sheet::{close_sheet, open_sheet};

use super::debounce::{DebouncedChannel, DEBOUNCE_MS};
use super::helpers::{show_alert, show_toast};
use super::messages::Msg;
use super::state::{EditorComponent, PickerRecords, PickerState, RenderPhase};

/// Central update function for the component.
pub fn update(component: &mut EditorComponent, ctx: &Context<EditorComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SessionReady(session) => {
            component.session = Some(std::rc::Rc::new(session));
            true
        }
        Msg::AttachFailed(message) => {
            gloo_console::error!(format!("preview engine unavailable: {message}"));
            component.attach_error = Some(message);
            true
        }
        Msg::ElementsChanged(elements) => {
            // The tree is replaced wholesale on every report; overrides and
            // drafts survive template reloads within the session.
            component.bindings = crate::preview::bindings::resolve_bindings(&elements);
            true
        }
        Msg::TextInput { source_name, value } => {
            component.drafts.insert(source_name.clone(), value);

            let channel = component
                .debouncers
                .entry(source_name.clone())
                .or_insert_with(DebouncedChannel::new);
            let token = channel.arm();
            let link = ctx.link().clone();
            channel.schedule(Timeout::new(DEBOUNCE_MS, move || {
                link.send_message(Msg::CommitText { source_name, token });
            }));
            true
        }
        Msg::CommitText { source_name, token } => {
            let accepted = component
                .debouncers
                .get_mut(&source_name)
                .map(|channel| channel.accepts(token))
                .unwrap_or(false);
            if !accepted {
                return false;
            }
            let Some(session) = component.session.clone() else {
                return false;
            };
            let value = component.drafts.get(&source_name).cloned().unwrap_or_default();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcomes = session.apply_edit(&source_name, &value).await;
                link.send_message(Msg::EditSettled(outcomes));
            });
            false
        }
        Msg::EditSettled(outcomes) => {
            log_outcomes(&outcomes);
            true
        }
        Msg::OpenPicker(binding) => {
            component.picker = Some(PickerState::open_for(binding));
            open_sheet(component.sheet_ref.clone());
            let token = component.search_debounce.arm();
            ctx.link().send_message(Msg::RunPickerSearch { token });
            true
        }
        Msg::ClosePicker => {
            component.picker = None;
            close_sheet(component.sheet_ref.clone());
            true
        }
        Msg::PickerQueryInput(value) => {
            let Some(picker) = component.picker.as_mut() else {
                return false;
            };
            picker.query = value;
            let token = component.search_debounce.arm();
            let link = ctx.link().clone();
            component.search_debounce.schedule(Timeout::new(DEBOUNCE_MS, move || {
                link.send_message(Msg::RunPickerSearch { token });
            }));
            true
        }
        Msg::RunPickerSearch { token } => {
            if !component.search_debounce.accepts(token) {
                return false;
            }
            let Some(picker) = component.picker.as_mut() else {
                return false;
            };
            picker.loading = true;
            picker.page = 0;
            spawn_search(ctx.link(), &picker.binding.role, picker.query.clone(), 0, false);
            true
        }
        Msg::LoadMore => {
            let Some(picker) = component.picker.as_mut() else {
                return false;
            };
            if picker.loading || !picker.has_more {
                return false;
            }
            picker.loading = true;
            let next_page = picker.page + 1;
            spawn_search(
                ctx.link(),
                &picker.binding.role,
                picker.query.clone(),
                next_page,
                true,
            );
            true
        }
        Msg::PickerPageLoaded {
            records,
            has_more,
            page,
            append,
        } => {
            let Some(picker) = component.picker.as_mut() else {
                return false;
            };
            picker.loading = false;
            picker.has_more = has_more;
            picker.page = page;
            if append {
                picker.records.extend(records);
            } else if picker.records.same_shape(&records) {
                picker.records = records;
            }
            true
        }
        Msg::ChooseTeam(team) => {
            let Some(side) = component
                .picker
                .as_ref()
                .and_then(|p| TeamSide::from_role(&p.binding.role))
            else {
                return false;
            };
            let Some(session) = component.session.clone() else {
                return false;
            };
            component.busy = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                // The league logo is a secondary lookup keyed by the team's
                // league; a missing logo still writes (and thereby clears)
                // the selector.
                let league_logo = lookup::fetch_league(&team.league_name)
                    .await
                    .and_then(|league| league.logo_url);
                let edits = expansion::team_edits(side, &team, league_logo.as_deref());
                let outcomes = session.apply_edits(&edits).await;
                link.send_message(Msg::ExpansionSettled(outcomes));
            });
            true
        }
        Msg::ChoosePlayer(player) => {
            let Some(FieldRole::Player(slot)) =
                component.picker.as_ref().map(|p| p.binding.role.clone())
            else {
                return false;
            };
            let Some(session) = component.session.clone() else {
                return false;
            };
            component.busy = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcomes = session
                    .apply_edits(&expansion::player_edits(slot, &player))
                    .await;
                link.send_message(Msg::ExpansionSettled(outcomes));
            });
            true
        }
        Msg::ChooseSponsor(sponsor) => {
            let Some(session) = component.session.clone() else {
                return false;
            };
            component.busy = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                // The sponsor catalog stores a reference URL, not the final
                // hosted asset; re-host before writing.
                match upload::rehost(&sponsor.logo_url).await {
                    Ok(url) => {
                        let outcomes = session.apply_edits(&expansion::sponsor_edits(&url)).await;
                        link.send_message(Msg::ExpansionSettled(outcomes));
                    }
                    Err(err) => link.send_message(Msg::UploadFailed(err.to_string())),
                }
            });
            true
        }
        Msg::ChooseImage(asset) => {
            let Some(selector) = component
                .picker
                .as_ref()
                .map(|p| p.binding.source_name.clone())
            else {
                return false;
            };
            let Some(session) = component.session.clone() else {
                return false;
            };
            component.busy = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcomes = session.apply_edit(&selector, &asset.url).await;
                link.send_message(Msg::ExpansionSettled(outcomes));
            });
            true
        }
        Msg::OpenFileDialog => {
            if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FileSelected(file) => {
            let Some(selector) = component
                .picker
                .as_ref()
                .map(|p| p.binding.source_name.clone())
            else {
                return false;
            };
            let Some(session) = component.session.clone() else {
                return false;
            };
            component.busy = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                let filename = file.name();
                let blob = gloo_file::Blob::from(file);
                match gloo_file::futures::read_as_bytes(&blob).await {
                    Ok(bytes) => match upload::upload_bytes(&filename, bytes).await {
                        Ok(url) => {
                            let outcomes = session.apply_edit(&selector, &url).await;
                            link.send_message(Msg::ExpansionSettled(outcomes));
                        }
                        Err(err) => link.send_message(Msg::UploadFailed(err.to_string())),
                    },
                    Err(err) => link.send_message(Msg::UploadFailed(err.to_string())),
                }
            });
            true
        }
        Msg::UploadFailed(message) => {
            component.busy = false;
            show_alert(&format!("Upload failed: {message}"));
            true
        }
        Msg::ExpansionSettled(outcomes) => {
            log_outcomes(&outcomes);
            component.busy = false;
            component.picker = None;
            close_sheet(component.sheet_ref.clone());
            true
        }
        Msg::ToggleTarget(key) => {
            let Some(session) = component.session.as_ref() else {
                return false;
            };
            session.set_active(&key, !session.is_active(&key));
            true
        }
        Msg::ResetEdits => {
            let Some(session) = component.session.clone() else {
                return false;
            };
            component.drafts.clear();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcomes = session.reset().await;
                link.send_message(Msg::EditSettled(outcomes));
            });
            true
        }
        Msg::StartRender => {
            if !component.render_phase.can_submit() {
                return false;
            }
            let Some(session) = component.session.clone() else {
                return false;
            };
            component.render_phase = RenderPhase::Rendering;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match session.export_source().await {
                    Ok(source) => {
                        let request = RenderRequest {
                            source,
                            templates: session.active_keys(),
                        };
                        render::submit(&request).await.map_err(|err| err.to_string())
                    }
                    Err(err) => Err(err.to_string()),
                };
                link.send_message(Msg::RenderFinished(result));
            });
            true
        }
        Msg::RenderFinished(result) => {
            match result {
                Ok(url) => component.render_phase = RenderPhase::Ready(url),
                Err(message) => {
                    show_toast(&format!("Render failed: {message}"));
                    component.render_phase = RenderPhase::Create;
                }
            }
            true
        }
        Msg::OpenRenderResult => {
            if let RenderPhase::Ready(url) = &component.render_phase {
                if let Some(window) = web_sys::window() {
                    window.open_with_url(url).ok();
                }
            }
            // Downloading discards the result and returns to Create.
            component.render_phase = RenderPhase::Create;
            true
        }
    }
}

/// Per-target failures are contained and logged; they never reach the user
/// or the sibling targets.
fn log_outcomes(outcomes: &[TargetOutcome]) {
    for outcome in outcomes {
        if let Err(err) = &outcome.result {
            gloo_console::error!(format!(
                "preview '{}' rejected the edit: {err}",
                outcome.key
            ));
        }
    }
}

/// Kicks off a catalog search for the picker, shaped by the binding role the
/// dialog was opened for.
fn spawn_search(
    link: &Scope<EditorComponent>,
    role: &FieldRole,
    query: String,
    page: u32,
    append: bool,
) {
    let link = link.clone();
    match role {
        FieldRole::TeamLogoLeft | FieldRole::TeamLogoRight => spawn_local(async move {
            let result = lookup::search_teams(&query, page).await;
            link.send_message(Msg::PickerPageLoaded {
                records: PickerRecords::Teams(result.records),
                has_more: result.has_more,
                page,
                append,
            });
        }),
        FieldRole::Player(_) => spawn_local(async move {
            let result = lookup::search_players(&query, page).await;
            link.send_message(Msg::PickerPageLoaded {
                records: PickerRecords::Players(result.records),
                has_more: result.has_more,
                page,
                append,
            });
        }),
        FieldRole::SponsorLogo => spawn_local(async move {
            let result = lookup::search_sponsors(&query, page).await;
            link.send_message(Msg::PickerPageLoaded {
                records: PickerRecords::Sponsors(result.records),
                has_more: result.has_more,
                page,
                append,
            });
        }),
        _ => spawn_local(async move {
            let result = lookup::search_images(&query, page).await;
            link.send_message(Msg::PickerPageLoaded {
                records: PickerRecords::Images(result.records),
                has_more: result.has_more,
                page,
                append,
            });
        }),
    }
}
