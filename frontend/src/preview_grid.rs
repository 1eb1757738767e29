use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct PreviewGridProps {
    pub columns: usize,
    pub children: Children,
}

/// Lays out the main preview and the variant previews side by side. Cells
/// share one row; each holds a preview container plus its toggle label.
pub struct PreviewGrid;

impl Component for PreviewGrid {
    type Message = ();
    type Properties = PreviewGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PreviewGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, minmax(0, 1fr));
             gap: 16px;
             width: 100%;
             padding: 12px;
             background: #111;
             border-radius: 6px;",
            props.columns
        );

        html! {
            <div style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
