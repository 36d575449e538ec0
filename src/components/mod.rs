// Page enhancements
// Each binder looks up its elements once and skips itself if they are absent

pub mod copy_button;
pub mod ugliness_slider;

pub use copy_button::bind_copy_button;
pub use ugliness_slider::bind_slider;

use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::context::PageConfig;
use crate::utils::dom::listen;

/// Bind the page now, or once the DOM has finished loading
// Only called from the wasm32 entry point
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn mount() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("No document"))?;

    if document.ready_state() != "loading" {
        bind_page(&window, &document);
        return Ok(());
    }

    let target = document.clone();
    let mut pending = Some((window, document));
    listen(&target, "DOMContentLoaded", move |_| {
        if let Some((window, document)) = pending.take() {
            bind_page(&window, &document);
        }
    })
}

fn bind_page(window: &Window, document: &Document) {
    let config = PageConfig::load(document);
    let slider = bind_slider(document, &config);
    let copy = bind_copy_button(window, document, &config);
    log::info!("Page bound (slider: {}, copy button: {})", slider, copy);
}
