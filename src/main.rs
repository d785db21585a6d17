//! Bucket List Frontend Entry Point

mod models;
mod context;
mod store;
mod logger;
mod components;
mod screens;
mod app;

use app::App;
use bucket_core::AppConfig;
use leptos::prelude::*;

const CONFIG_JSON: &str = include_str!("../app-config.json");

fn load_config() -> AppConfig {
    match AppConfig::from_json(CONFIG_JSON) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(&format!("[APP] {}, using defaults", e).into());
            AppConfig::default()
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let config = load_config();
    logger::init(config.log_level);
    log::info!("[APP] starting");
    mount_to_body(move || view! { <App config=config /> });
}
