//! Browser bridge for the Wayne admin pages.
//!
//! This crate provides:
//! - `js_bridge`: typed bindings to the Chart.js global
//! - `dom`: `web-sys` adapters implementing the report chart host
//! - `dialog`: `window.confirm()` and the opt-in button binding
//! - `logging`: console logger and panic hook
//!
//! and the `#[wasm_bindgen]` exports the server templates call.

pub mod dialog;
pub mod dom;
pub mod js_bridge;
pub mod logging;

use wasm_bindgen::prelude::*;
use wayne_report::settings::DEFAULT_CONFIRM_SELECTOR;
use wayne_report::{render_report_chart, ChartSettings, RenderOutcome};

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

/// Ask the user to confirm a destructive action.
///
/// Templates use it as `onsubmit="return confirmAction('...')"`.
#[wasm_bindgen(js_name = confirmAction)]
pub fn confirm_action(message: Option<String>) -> bool {
    match dialog::BrowserDialog::current() {
        Ok(dialog) => wayne_report::confirm_action(&dialog, message.as_deref()),
        Err(e) => {
            log::warn!("{:#}", e);
            false
        }
    }
}

/// One-time page initialization with the default report chart settings.
#[wasm_bindgen(js_name = initReports)]
pub fn init_reports() -> Result<(), JsValue> {
    start(ChartSettings::default()).map_err(to_js)
}

/// Like `initReports`, with settings overrides given as JSON.
#[wasm_bindgen(js_name = initReportsWithSettings)]
pub fn init_reports_with_settings(settings_json: &str) -> Result<(), JsValue> {
    logging::init();
    let settings = ChartSettings::from_json(settings_json).map_err(to_js)?;
    start(settings).map_err(to_js)
}

/// Opt-in: attach the confirmation gate to buttons (default `.delete-button`).
#[wasm_bindgen(js_name = bindConfirmButtons)]
pub fn bind_confirm_buttons(selector: Option<String>) -> Result<u32, JsValue> {
    logging::init();
    let document = dom::document().map_err(to_js)?;
    let selector = selector.as_deref().unwrap_or(DEFAULT_CONFIRM_SELECTOR);
    dialog::bind_confirm_buttons(&document, selector).map_err(to_js)
}

/// Render the report chart once the document is ready.
pub fn start(settings: ChartSettings) -> anyhow::Result<()> {
    logging::init();
    let document = dom::document()?;
    let page = dom::BrowserPage::new(document.clone());
    dom::on_document_ready(&document, move || {
        if let RenderOutcome::Rendered(dataset) = render_report_chart(&page, &settings) {
            log::info!("Report chart rendered with {} categories", dataset.entries.len());
        }
    })
}
