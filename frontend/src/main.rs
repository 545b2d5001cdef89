use crate::app::App;

mod app;
mod components;
mod config;
mod overlay;
mod session;
mod store;
mod sync;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
