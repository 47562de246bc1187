//! Ingredients Frontend Entry Point

mod models;
mod config;
mod error;
mod reducer;
mod remote;
mod handlers;
mod store;
mod logging;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::LOG_LEVEL);
    mount_to_body(App);
}
