#![allow(warnings)]
//! Rewards Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod forms;
mod guard;
mod models;
mod pages;
mod session;
mod staging;
mod store;
mod view_state;

use app::{App, ConfigErrorView};
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = match AppConfig::from_environment() {
        Ok(config) => config,
        Err(e) => {
            // Logger level is part of the config, so fall back to the default
            let _ = console_logger::init_logger(log::LevelFilter::Info);
            log::error!("Invalid configuration: {}", e);
            let message = e.to_string();
            mount_to_body(move || view! { <ConfigErrorView message=message.clone() /> });
            return;
        }
    };

    if let Err(e) = console_logger::init_logger(config.log_level) {
        web_sys::console::error_1(&format!("Logger already initialized: {}", e).into());
    }
    log::info!("Starting rewards client against {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
