//! `web-sys` adapters for the report page.

use crate::js_bridge::{self, js_error};
use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wayne_report::{AttributeSource, ChartConfig, ChartHost};
use web_sys::{Document, Element, HtmlCanvasElement};

/// The current document, if running in a window.
pub fn document() -> anyhow::Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| anyhow!("window document object not found"))
}

/// Attribute reads over a DOM element.
pub struct ElementAttributes(pub Element);

impl AttributeSource for ElementAttributes {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }
}

/// The live browser page as a chart host.
pub struct BrowserPage {
    document: Document,
}

impl BrowserPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn current() -> anyhow::Result<Self> {
        Ok(Self::new(document()?))
    }
}

impl ChartHost for BrowserPage {
    type Container = ElementAttributes;

    fn find_container(&self, id: &str) -> Option<ElementAttributes> {
        self.document.get_element_by_id(id).map(ElementAttributes)
    }

    fn construct_chart(
        &self,
        container: &ElementAttributes,
        config: &ChartConfig,
    ) -> anyhow::Result<()> {
        let canvas = container
            .0
            .clone()
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|el| {
                anyhow!(
                    "chart container <{}> is not a canvas",
                    el.tag_name().to_lowercase()
                )
            })?;
        let context = canvas
            .get_context("2d")
            .map_err(|e| js_error("getContext('2d') failed", e))?
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?;

        js_bridge::construct_chart(&context, config)?;
        Ok(())
    }
}

/// Run `f` once the document has been parsed.
///
/// If parsing already finished, `f` runs immediately; otherwise it is attached
/// to `DOMContentLoaded`.
pub fn on_document_ready<F>(document: &Document, f: F) -> anyhow::Result<()>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let callback = Closure::once_into_js(f);
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .map_err(|e| js_error("failed to register DOMContentLoaded", e))
}
