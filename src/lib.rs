use wasm_bindgen::prelude::*;

pub mod app;
pub mod assistant;
pub mod browser;
pub mod components;
pub mod config;
pub mod converter;
pub mod error;
pub mod history;
pub mod logging;
pub mod output;
pub mod state;
pub mod theme;
pub mod types;
pub mod upload;

use app::{App, AppProps};
use config::AppConfig;

#[wasm_bindgen(start)]
pub fn run_app() {
    logging::init(log::LevelFilter::Info);
    let config = AppConfig::load();
    if let Ok(level) = config.level_filter() {
        log::set_max_level(level);
    }

    let root = match browser::root_element("root") {
        Ok(root) => root,
        Err(e) => {
            web_sys::console::error_1(&format!("cannot mount app: {}", e).into());
            return;
        }
    };
    log::info!(
        "mounting code converter (history limit {}, theme {})",
        config.history_limit,
        config.theme.name()
    );
    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
