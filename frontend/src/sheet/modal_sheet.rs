use uuid::Uuid;
use web_sys::js_sys;
use yew::{html, Component, Context, Html, NodeRef, Properties};

/// Slide-in sheet hosting the picker dialogs. The sheet itself is always in
/// the DOM; visibility is toggled through the `open` class so the slide
/// transition can run.
pub struct ModalSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for ModalSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="modal-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

// The class toggles run through a deferred callback so a sheet opened in the
// same tick its content renders still animates.

pub fn open_sheet(sheet_ref: NodeRef) {
    toggle_sheet_class(sheet_ref, "add");
}

pub fn close_sheet(sheet_ref: NodeRef) {
    toggle_sheet_class(sheet_ref, "remove");
}

fn toggle_sheet_class(sheet_ref: NodeRef, method: &str) {
    if let Some(sheet) = sheet_ref.cast::<web_sys::HtmlElement>() {
        let func = js_sys::Function::new_no_args(&format!(
            "document.querySelector('#{}').classList.{}('open')",
            sheet.id(),
            method
        ));
        if let Some(window) = web_sys::window() {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50)
                .ok();
        }
    }
}
