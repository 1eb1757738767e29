//! Catalog picker sheet: debounced search box, paged record grid, and the
//! "use your own file" path for image and video fields.

use web_sys::{HtmlInputElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::preview::bindings::FieldRole;
use crate::sheet::modal_sheet::ModalSheet;

use super::super::messages::Msg;
use super::super::state::{EditorComponent, PickerRecords, PickerState};
use super::super::view::role_label;

pub fn picker_dialog(component: &EditorComponent, link: &Scope<EditorComponent>) -> Html {
    html! {
        <ModalSheet node_ref={component.sheet_ref.clone()}>
            {
                if let Some(picker) = &component.picker {
                    build_dialog(component, picker, link)
                } else {
                    html! {}
                }
            }
        </ModalSheet>
    }
}

fn build_dialog(
    component: &EditorComponent,
    picker: &PickerState,
    link: &Scope<EditorComponent>,
) -> Html {
    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::PickerQueryInput(input.value())
    });

    html! {
        <div class="picker-dialog">
            <div class="picker-header">
                <span class="picker-title">{ role_label(&picker.binding.role) }</span>
                <button class="picker-close" onclick={link.callback(|_| Msg::ClosePicker)}>
                    { "✕" }
                </button>
            </div>
            <input
                type="text"
                class="picker-search"
                placeholder="Search…"
                value={picker.query.clone()}
                {oninput}
            />
            { build_results(picker, link) }
            {
                if picker.has_more && !picker.loading {
                    html! {
                        <button class="picker-more" onclick={link.callback(|_| Msg::LoadMore)}>
                            {"Load more"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
            { build_upload_row(component, picker, link) }
        </div>
    }
}

fn build_results(picker: &PickerState, link: &Scope<EditorComponent>) -> Html {
    if picker.loading && picker.records.is_empty() {
        return html! { <p class="picker-note">{"Searching…"}</p> };
    }
    if picker.records.is_empty() {
        return html! { <p class="picker-note">{"No results."}</p> };
    }

    match &picker.records {
        PickerRecords::Teams(teams) => html! {
            <div class="picker-grid">
                {
                    for teams.iter().map(|team| {
                        let chosen = team.clone();
                        html! {
                            <button
                                class="picker-record"
                                onclick={link.callback(move |_| Msg::ChooseTeam(chosen.clone()))}
                            >
                                <img src={team.logo_url.clone()} alt="" />
                                <span>{ team.name.clone() }</span>
                                <span class="picker-sub">{ team.league_name.clone() }</span>
                            </button>
                        }
                    })
                }
            </div>
        },
        PickerRecords::Players(players) => html! {
            <div class="picker-grid">
                {
                    for players.iter().map(|player| {
                        let chosen = player.clone();
                        html! {
                            <button
                                class="picker-record"
                                onclick={link.callback(move |_| Msg::ChoosePlayer(chosen.clone()))}
                            >
                                <img src={player.player_image.clone()} alt="" />
                                <span>{ player.name.clone() }</span>
                                <span class="picker-sub">{ player.position_and_number.clone() }</span>
                            </button>
                        }
                    })
                }
            </div>
        },
        PickerRecords::Sponsors(sponsors) => html! {
            <div class="picker-grid">
                {
                    for sponsors.iter().map(|sponsor| {
                        let chosen = sponsor.clone();
                        html! {
                            <button
                                class="picker-record"
                                onclick={link.callback(move |_| Msg::ChooseSponsor(chosen.clone()))}
                            >
                                <img src={sponsor.logo_url.clone()} alt="" />
                                <span>{ sponsor.name.clone() }</span>
                            </button>
                        }
                    })
                }
            </div>
        },
        PickerRecords::Images(images) => html! {
            <div class="picker-grid">
                {
                    for images.iter().map(|image| {
                        let chosen = image.clone();
                        html! {
                            <button
                                class="picker-record"
                                onclick={link.callback(move |_| Msg::ChooseImage(chosen.clone()))}
                            >
                                <img src={image.url.clone()} alt="" />
                                <span>{ image.name.clone() }</span>
                            </button>
                        }
                    })
                }
            </div>
        },
    }
}

/// Image and video fields can also take a local file, which goes through the
/// upload collaborator before the selector is written.
fn build_upload_row(
    component: &EditorComponent,
    picker: &PickerState,
    link: &Scope<EditorComponent>,
) -> Html {
    let uploadable = matches!(
        picker.binding.role,
        FieldRole::GenericFile | FieldRole::FrontImage
    );
    if !uploadable {
        return html! {};
    }

    let onchange = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().and_then(|files| files.get(0));
        input.set_value("");
        file.map(Msg::FileSelected)
    });

    html! {
        <div class="picker-upload">
            <input
                type="file"
                ref={component.file_input_ref.clone()}
                style="display:none;"
                {onchange}
            />
            <button class="picker-upload-btn" onclick={link.callback(|_| Msg::OpenFileDialog)}>
                {"Use your own file"}
            </button>
        </div>
    }
}
