//! Browser implementations of the clipboard and feedback seams

use std::cell::RefCell;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Event, EventTarget, HtmlDocument, HtmlTextAreaElement, Window};

use super::clipboard::ClipboardHost;
use super::errors::{js_error_message, CopyError};
use super::feedback::{FeedbackTimer, LabelTarget};

/// Clipboard access through `window.navigator` and the document
pub struct WebClipboard {
    window: Window,
}

impl WebClipboard {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn document(&self) -> Result<Document, CopyError> {
        self.window
            .document()
            .ok_or_else(|| CopyError::LegacyCopyThrew("No document".to_string()))
    }
}

fn threw(e: JsValue) -> CopyError {
    CopyError::LegacyCopyThrew(js_error_message(&e))
}

#[async_trait(?Send)]
impl ClipboardHost for WebClipboard {
    type Scratch = HtmlTextAreaElement;

    fn clipboard_api_present(&self) -> bool {
        let clipboard = self.window.navigator().clipboard();
        !clipboard.is_undefined() && !clipboard.is_null()
    }

    fn is_secure_context(&self) -> bool {
        self.window.is_secure_context()
    }

    async fn write_text(&self, text: &str) -> Result<(), CopyError> {
        let clipboard = self.window.navigator().clipboard();
        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| CopyError::ClipboardWriteRejected(js_error_message(&e)))
    }

    fn attach_scratch(&self, text: &str) -> Result<HtmlTextAreaElement, CopyError> {
        let document = self.document()?;
        let body = document
            .body()
            .ok_or_else(|| CopyError::LegacyCopyThrew("No document body".to_string()))?;

        let text_area: HtmlTextAreaElement = document
            .create_element("textarea")
            .map_err(threw)?
            .dyn_into()
            .map_err(|_| CopyError::LegacyCopyThrew("textarea element has unexpected type".to_string()))?;
        text_area.set_value(text);

        // Park it far outside the viewport so it never flashes on screen
        let style = text_area.style();
        style.set_property("position", "fixed").map_err(threw)?;
        style.set_property("left", "-999999px").map_err(threw)?;
        style.set_property("top", "-999999px").map_err(threw)?;

        body.append_child(&text_area).map_err(threw)?;

        // From here on the element is in the document, so any failure must remove it
        if let Err(e) = text_area.focus() {
            text_area.remove();
            return Err(threw(e));
        }
        text_area.select();

        Ok(text_area)
    }

    fn exec_copy(&self, _scratch: &HtmlTextAreaElement) -> Result<bool, CopyError> {
        let document: HtmlDocument = self.document()?.unchecked_into();
        document.exec_command("copy").map_err(threw)
    }

    fn detach_scratch(&self, scratch: HtmlTextAreaElement) {
        scratch.remove();
    }
}

/// Label backed by a DOM element's text and class list
pub struct ElementLabel {
    element: Element,
}

impl ElementLabel {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl LabelTarget for ElementLabel {
    fn text(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn set_class(&self, class: &str, enabled: bool) {
        let classes = self.element.class_list();
        let result = if enabled {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        if let Err(e) = result {
            log::warn!("Failed to toggle class '{}': {}", class, js_error_message(&e));
        }
    }
}

/// Timer backed by `setTimeout` on the local executor
#[derive(Clone, Copy, Default)]
pub struct BrowserTimer;

impl FeedbackTimer for BrowserTimer {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            callback();
        });
    }
}

/// Look up an element by id, cast to the requested type
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

// Listeners live as long as the page; kept here instead of Closure::forget()
thread_local! {
    static LISTENERS: RefCell<Vec<Closure<dyn FnMut(Event)>>> = RefCell::new(Vec::new());
}

/// Attach `handler` to `event` on `target` for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    LISTENERS.with(|listeners| listeners.borrow_mut().push(callback));
    Ok(())
}
