//! Console logging and panic reporting for the WASM entry points.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the console logger and the panic hook. Safe to call repeatedly.
pub fn init() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        // Another bundle on the page may already own the global subscriber.
        if dioxus_logger::init(dioxus_logger::tracing::Level::INFO).is_err() {
            web_sys::console::warn_1(&"wayne: logger already initialized".into());
        }
    });
}
