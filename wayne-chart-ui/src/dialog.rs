//! Browser confirmation dialog and the opt-in button binding.

use crate::js_bridge::js_error;
use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wayne_report::confirm::{self, ConfirmDialog};
use wayne_report::settings::CONFIRM_MESSAGE_ATTRIBUTE;
use web_sys::{Document, Element, Event, Window};

/// `window.confirm()`.
pub struct BrowserDialog {
    window: Window,
}

impl BrowserDialog {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    pub fn current() -> anyhow::Result<Self> {
        web_sys::window()
            .map(Self::new)
            .ok_or_else(|| anyhow!("window object not found"))
    }
}

impl ConfirmDialog for BrowserDialog {
    fn confirm(&self, message: Option<&str>) -> bool {
        let answer = match message {
            Some(message) => self.window.confirm_with_message(message),
            None => self.window.confirm(),
        };
        answer.unwrap_or_else(|e| {
            log::warn!("{}", js_error("confirm dialog unavailable", e));
            false
        })
    }
}

/// Attach the confirmation gate to every element matching `selector`.
///
/// Each click prompts with the element's `data-confirm-message` (or the default
/// message) and calls `preventDefault()` when the user declines. Returns the
/// number of elements bound.
pub fn bind_confirm_buttons(document: &Document, selector: &str) -> anyhow::Result<u32> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| js_error("invalid confirm selector", e))?;

    let mut bound = 0;
    for i in 0..nodes.length() {
        let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };

        let source = element.clone();
        let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let dialog = match BrowserDialog::current() {
                Ok(dialog) => dialog,
                Err(e) => {
                    log::warn!("{:#}", e);
                    return;
                }
            };
            let message = source.get_attribute(CONFIRM_MESSAGE_ATTRIBUTE);
            if confirm::should_block_click(&dialog, message.as_deref()) {
                event.prevent_default();
            }
        });
        element
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .map_err(|e| js_error("failed to bind click handler", e))?;
        // Listener lives as long as the page.
        handler.forget();
        bound += 1;
    }

    log::info!("Bound confirmation to {} element(s) matching '{}'", bound, selector);
    Ok(bound)
}
