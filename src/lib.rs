// lib.rs - Root module for the elvco_web library
//
// The same crate builds three ways:
// - native (default): model, search controller, REST client and config
// - ssr: the above plus the Leptos server side
// - hydrate: the WASM client that takes over the server-rendered page

#[cfg(feature = "native")]
pub mod config;

pub mod web_app;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
