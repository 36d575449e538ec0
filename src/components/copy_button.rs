use std::rc::Rc;

use web_sys::{Document, Window};

use crate::context::PageConfig;
use crate::utils::clipboard::ClipboardCopier;
use crate::utils::dom::{listen, BrowserTimer, ElementLabel, WebClipboard};
use crate::utils::feedback::LabelFeedback;

type PageCopier = ClipboardCopier<WebClipboard, LabelFeedback<ElementLabel, BrowserTimer>>;

/// Wire the copy button on the page; returns false when the button or the
/// URL element is missing
///
/// Both elements are resolved once here. The URL text is read on every
/// click so the copy always reflects what the page currently shows.
pub fn bind_copy_button(window: &Window, document: &Document, config: &PageConfig) -> bool {
    let button = document.get_element_by_id(&config.copy_button_id);
    let source = document.get_element_by_id(&config.copy_source_id);

    let (Some(button), Some(source)) = (button, source) else {
        log::debug!(
            "Copy button #{} or source #{} not on page, skipping",
            config.copy_button_id,
            config.copy_source_id
        );
        return false;
    };

    let feedback = LabelFeedback::new(
        ElementLabel::new(button.clone()),
        BrowserTimer,
        &config.copied_label,
        &config.copied_class,
        config.feedback_ms,
    );
    let copier: Rc<PageCopier> = Rc::new(ClipboardCopier::new(WebClipboard::new(window.clone()), feedback));

    let result = listen(&button, "click", move |_| {
        let text = source.text_content().unwrap_or_default();
        let copier = Rc::clone(&copier);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = copier.copy(&text).await;
            if !outcome.is_copied() {
                log::debug!("Copy attempt gave up: {:?}", outcome);
            }
        });
    });

    if let Err(e) = result {
        log::error!("Failed to bind copy button: {:?}", e);
        return false;
    }
    true
}
