//! Dual Grid Frontend Entry Point

mod app;
mod board;
mod components;
mod context;
mod layout;
mod logging;
mod models;
mod transfer;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(logging::default_level());
    log::info!(target: "app", "mounting dual grid");
    mount_to_body(App);
}
