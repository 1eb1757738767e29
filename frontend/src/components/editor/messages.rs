use common::model::element::Element;
use common::model::image::ImageAsset;
use common::model::player::Player;
use common::model::sponsor::Sponsor;
use common::model::team::Team;

use crate::preview::bindings::FieldBinding;
use crate::preview::broadcast::TargetOutcome;
use crate::preview::sdk::JsPreviewHandle;
use crate::preview::session::PreviewSession;

use super::state::PickerRecords;

pub enum Msg {
    SessionReady(PreviewSession<JsPreviewHandle>),
    AttachFailed(String),
    ElementsChanged(Vec<Element>),
    TextInput { source_name: String, value: String },
    CommitText { source_name: String, token: u64 },
    EditSettled(Vec<TargetOutcome>),
    OpenPicker(FieldBinding),
    ClosePicker,
    PickerQueryInput(String),
    RunPickerSearch { token: u64 },
    LoadMore,
    PickerPageLoaded { records: PickerRecords, has_more: bool, page: u32, append: bool },
    ChooseTeam(Team),
    ChoosePlayer(Player),
    ChooseSponsor(Sponsor),
    ChooseImage(ImageAsset),
    OpenFileDialog,
    FileSelected(web_sys::File),
    UploadFailed(String),
    ExpansionSettled(Vec<TargetOutcome>),
    ToggleTarget(String),
    ResetEdits,
    StartRender,
    RenderFinished(Result<String, String>),
    OpenRenderResult,
}
