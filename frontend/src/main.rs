use crate::app::App;

mod app;
mod components;
mod preview;
mod preview_grid;
mod services;
mod sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
