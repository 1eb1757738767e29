//! Component state for the template editor.
//!
//! This module defines the state struct holding the editor's runtime data
//! (the preview session, the resolved field list, text drafts and their
//! debounce channels, picker dialog state, and the render submission phase),
//! along with the small state machines and accessors the view and update
//! logic share.

use std::collections::HashMap;
use std::rc::Rc;

use yew::prelude::*;

use common::model::image::ImageAsset;
use common::model::player::Player;
use common::model::sponsor::Sponsor;
use common::model::team::Team;

use crate::preview::bindings::{FieldBinding, FieldRole};
use crate::preview::sdk::JsPreviewHandle;
use crate::preview::session::PreviewSession;

use super::debounce::DebouncedChannel;

/// Main state container for the `EditorComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct EditorComponent {
    /// The editing session around the attached previews. `None` until the
    /// preview engine finished attaching.
    pub session: Option<Rc<PreviewSession<JsPreviewHandle>>>,

    /// Editable fields resolved from the main preview's element tree, in
    /// document order. Replaced wholesale on every state-change report.
    pub bindings: Vec<FieldBinding>,

    /// Local text drafts, keyed by slot name. Updated synchronously on every
    /// keystroke for immediate echo; the previews only hear about a draft
    /// once its debounce window closes.
    pub drafts: HashMap<String, String>,

    /// One debounce channel per text field.
    pub debouncers: HashMap<String, DebouncedChannel>,

    /// Debounce channel for the picker's search box.
    pub search_debounce: DebouncedChannel,

    /// State of the currently open picker dialog, if any.
    pub picker: Option<PickerState>,

    /// Single busy flag covering a whole derived expansion or upload.
    pub busy: bool,

    /// Render submission phase.
    pub render_phase: RenderPhase,

    /// Set when attaching the preview engine failed; the editor shows the
    /// message instead of an empty field list.
    pub attach_error: Option<String>,

    /// Reference to the picker sheet container node.
    pub sheet_ref: NodeRef,

    /// Reference to the hidden file input used for "use your own file".
    pub file_input_ref: NodeRef,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl EditorComponent {
    pub fn new() -> Self {
        Self {
            session: None,
            bindings: Vec::new(),
            drafts: HashMap::new(),
            debouncers: HashMap::new(),
            search_debounce: DebouncedChannel::new(),
            picker: None,
            busy: false,
            render_phase: RenderPhase::Create,
            attach_error: None,
            sheet_ref: Default::default(),
            file_input_ref: Default::default(),
            loaded: false,
        }
    }

    /// The value a text field shows: the local draft if one exists,
    /// otherwise the current override. An empty box means "template
    /// default".
    pub fn field_value(&self, source_name: &str) -> String {
        if let Some(draft) = self.drafts.get(source_name) {
            return draft.clone();
        }
        self.session
            .as_ref()
            .and_then(|s| s.value_of(source_name))
            .unwrap_or_default()
    }
}

/// State of the open picker dialog.
pub struct PickerState {
    /// The binding the dialog was opened for.
    pub binding: FieldBinding,
    pub query: String,
    pub page: u32,
    pub records: PickerRecords,
    pub has_more: bool,
    pub loading: bool,
}

impl PickerState {
    pub fn open_for(binding: FieldBinding) -> Self {
        let records = PickerRecords::empty_for(&binding.role);
        Self {
            binding,
            query: String::new(),
            page: 0,
            records,
            has_more: false,
            loading: true,
        }
    }
}

/// Records loaded into the picker, shaped by the catalog the binding's role
/// searches.
pub enum PickerRecords {
    Teams(Vec<Team>),
    Players(Vec<Player>),
    Sponsors(Vec<Sponsor>),
    Images(Vec<ImageAsset>),
}

impl PickerRecords {
    pub fn empty_for(role: &FieldRole) -> Self {
        match role {
            FieldRole::TeamLogoLeft | FieldRole::TeamLogoRight => PickerRecords::Teams(Vec::new()),
            FieldRole::Player(_) => PickerRecords::Players(Vec::new()),
            FieldRole::SponsorLogo => PickerRecords::Sponsors(Vec::new()),
            _ => PickerRecords::Images(Vec::new()),
        }
    }

    /// True when both hold records of the same catalog.
    pub fn same_shape(&self, other: &PickerRecords) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Appends a freshly loaded page of the same shape; pages of another
    /// shape (a stale response after the dialog switched fields) are
    /// dropped.
    pub fn extend(&mut self, more: PickerRecords) {
        match (self, more) {
            (PickerRecords::Teams(held), PickerRecords::Teams(new)) => held.extend(new),
            (PickerRecords::Players(held), PickerRecords::Players(new)) => held.extend(new),
            (PickerRecords::Sponsors(held), PickerRecords::Sponsors(new)) => held.extend(new),
            (PickerRecords::Images(held), PickerRecords::Images(new)) => held.extend(new),
            _ => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            PickerRecords::Teams(r) => r.is_empty(),
            PickerRecords::Players(r) => r.is_empty(),
            PickerRecords::Sponsors(r) => r.is_empty(),
            PickerRecords::Images(r) => r.is_empty(),
        }
    }
}

/// Render submission phase. One submission is outstanding at most: the
/// button is phase-guarded, so rapid repeated clicks cannot start a second
/// job while one is rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPhase {
    /// Nothing submitted; the next click submits.
    Create,
    /// A submission is outstanding.
    Rendering,
    /// The finished video is ready to download at the given URL.
    Ready(String),
}

impl RenderPhase {
    pub fn can_submit(&self) -> bool {
        matches!(self, RenderPhase::Create)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_create_phase_accepts_a_submission() {
        assert!(RenderPhase::Create.can_submit());
        assert!(!RenderPhase::Rendering.can_submit());
        assert!(!RenderPhase::Ready("https://cdn.example/video.mp4".into()).can_submit());
    }

    #[test]
    fn picker_records_drop_pages_of_another_shape() {
        let mut records = PickerRecords::Teams(Vec::new());
        records.extend(PickerRecords::Players(vec![Player {
            id: "p1".into(),
            name: "Jane Doe".into(),
            position_and_number: "GK 1".into(),
            player_image: "u1".into(),
        }]));
        assert!(records.is_empty());
    }
}
