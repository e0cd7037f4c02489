//! Todo Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod edit_state;
mod error;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

use crate::api::HttpTodoApi;
use crate::config::Config;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match Config::from_build_env() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    if let Err(err) = console_log::init_with_level(config.log_level) {
        web_sys::console::error_1(&format!("Failed to set up logging: {err}").into());
    }
    if let Some(err) = config_error {
        log::warn!("{err}, using defaults");
    }

    let api = match HttpTodoApi::from_config(&config) {
        Ok(api) => api,
        Err(err) => {
            log::error!("{err}, falling back to {}", crate::config::DEFAULT_API_URL);
            match HttpTodoApi::from_config(&Config::default()) {
                Ok(api) => api,
                Err(err) => {
                    log::error!("{err}");
                    return;
                }
            }
        }
    };
    log::info!("Using todo endpoint {}", api.routes().collection());

    mount_to_body(move || view! { <App api=api.clone() /> });
}
