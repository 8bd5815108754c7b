//! Typed bindings to the Chart.js global.
//!
//! Chart.js is loaded by the page with a plain `<script>` tag, so `Chart` is a
//! global constructor rather than an ES module import.

use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use wayne_report::ChartConfig;

#[wasm_bindgen]
extern "C" {
    /// A Chart.js instance. Never read back; the chart lives as long as the page.
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(context: &JsValue, config: &JsValue) -> Result<Chart, JsValue>;
}

/// Convert a thrown JS value into an `anyhow::Error`.
pub fn js_error(context: &str, err: JsValue) -> anyhow::Error {
    match err.as_string() {
        Some(msg) => anyhow!("{}: {}", context, msg),
        None => anyhow!("{}: {:?}", context, err),
    }
}

/// Whether the page has loaded Chart.js.
pub fn chart_library_loaded() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("Chart")).unwrap_or(false)
}

/// Turn the serialized configuration into a plain JS object.
pub fn config_to_js(config: &ChartConfig) -> anyhow::Result<JsValue> {
    let json = config.to_json()?;
    js_sys::JSON::parse(&json).map_err(|e| js_error("chart config is not valid JSON", e))
}

/// `new Chart(context, config)`.
pub fn construct_chart(context: &JsValue, config: &ChartConfig) -> anyhow::Result<Chart> {
    if !chart_library_loaded() {
        return Err(anyhow!("Chart.js is not loaded (global `Chart` is undefined)"));
    }
    let js_config = config_to_js(config)?;
    Chart::new(context, &js_config).map_err(|e| js_error("Chart.js rejected the configuration", e))
}
