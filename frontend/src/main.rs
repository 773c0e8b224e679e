//! Entry point for the WASM application

use frontend_rust::{App, APP_NAME};
use leptos::*;

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🔬 {} - Starting Leptos App", APP_NAME);

    mount_to_body(|| view! { <App/> })
}
