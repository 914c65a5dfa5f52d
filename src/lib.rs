#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod build_info;
pub mod content;
pub mod scroll;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // only fails if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
