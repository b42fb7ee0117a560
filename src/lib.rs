pub mod api;
pub mod config;


pub use api::FileExplorer;
pub use config::Config;

use wasm_bindgen::prelude::wasm_bindgen;

/// The explorer entrypoint
#[wasm_bindgen(start)]
fn main() {
    if let Err(e) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::error_1(&format!("Failed to set up logging: {}", e).into());
    }
    log::set_max_level(Config::default().level_filter());
    set_panic_hook();
}

/// The panic hook for the WASM module
fn set_panic_hook() {
    static SET_HOOK: std::sync::Once = std::sync::Once::new();
    SET_HOOK.call_once(|| {
        std::panic::set_hook(Box::new(|panic_info| {
            log::error!("Explorer Panic: {}", panic_info);
            console_error_panic_hook::hook(panic_info);
        }));
    });
}
