//! Todo List Frontend Entry Point

mod models;
mod todo_list;
mod modal;
mod store;
mod theme;
mod assets;
mod config;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_logger::init(LevelFilter::Info);

    let config = config::load();
    if let Ok(level) = config.level_filter() {
        console_logger::set_level(level);
    }

    // The overlay container must exist once, before any modal opens
    let host_id = config.host_id().unwrap_or_default();
    if let Err(err) = leptos_modal_host::ensure_host(&host_id) {
        log::error!("[APP] Modal host #{} unavailable: {}", host_id, err);
    }

    log::info!("[APP] Mounting todo list");
    mount_to_body(move || view! { <App config=config /> });
}
