//! PackPal Frontend Entry Point

mod app;
mod carousel;
mod components;
mod config;
mod context;
mod effects;
mod forms;
mod markdown;
mod models;
mod sound;
mod store;

use app::App;
use console_logger::LoggerConfig;
use leptos::prelude::*;
use tracing::{info, warn};

fn main() {
    console_error_panic_hook::set_once();
    match console_logger::init(LoggerConfig::default()) {
        Ok(_) => info!("PackPal starting"),
        Err(e) => warn!("{}", e),
    }
    mount_to_body(App);
}
