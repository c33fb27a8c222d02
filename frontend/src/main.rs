use crate::app::App;

mod api;
mod app;
mod clock;
mod components;
mod modal;
mod store;
mod submit;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
