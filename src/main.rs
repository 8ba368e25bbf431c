#![allow(non_snake_case)]

use dioxus::prelude::*;
use stores::api_config;

// Modules
mod components;
mod context;
mod routes;
mod services;
mod stores;
mod utils;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting Gigboard web client");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Initialize stores on mount
    use_effect(move || {
        api_config::init_api_config();
    });

    rsx! {
        Router::<routes::Route> {}
    }
}
