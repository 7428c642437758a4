mod app;
mod components;
mod config;
mod models;
mod pages;
mod routes;
mod services;
mod stores;
mod utils;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🛫 SkyTicket client starting...");

    yew::Renderer::<App>::new().render();
}
