use web_sys::{Document, HtmlInputElement};

use crate::context::PageConfig;
use crate::utils::dom::{element_by_id, listen, ElementLabel};
use crate::utils::feedback::LabelTarget;

/// Mirrors the ugliness slider's value into its label
pub struct UglinessSlider<L> {
    label: L,
}

impl<L: LabelTarget> UglinessSlider<L> {
    pub fn new(label: L) -> Self {
        Self { label }
    }

    /// Copy the raw slider value into the label; the slider's own min/max is the only clamp
    pub fn on_input(&self, value: &str) {
        self.label.set_text(value);
    }

    #[cfg(test)]
    pub fn label(&self) -> &L {
        &self.label
    }
}

/// Wire the slider on the page; returns false when either element is missing
pub fn bind_slider(document: &Document, config: &PageConfig) -> bool {
    let input = element_by_id::<HtmlInputElement>(document, &config.slider_id);
    let label = document.get_element_by_id(&config.slider_label_id);

    let (Some(input), Some(label)) = (input, label) else {
        log::debug!(
            "Slider #{} or label #{} not on page, skipping",
            config.slider_id,
            config.slider_label_id
        );
        return false;
    };

    // The server-rendered label is left as is until the first input event
    let slider = UglinessSlider::new(ElementLabel::new(label));

    let source = input.clone();
    if let Err(e) = listen(&input, "input", move |_| slider.on_input(&source.value())) {
        log::error!("Failed to bind slider input: {:?}", e);
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::feedback::testing::FakeLabel;

    #[test]
    fn test_value_is_mirrored_verbatim() {
        let slider = UglinessSlider::new(FakeLabel::with_text("5"));

        slider.on_input("42");
        assert_eq!(slider.label().text(), "42");

        slider.on_input("1");
        assert_eq!(slider.label().text(), "1");
    }

    #[test]
    fn test_new_leaves_rendered_label_untouched() {
        let slider = UglinessSlider::new(FakeLabel::with_text("5"));
        assert_eq!(slider.label().text(), "5");
        assert!(slider.label().classes.borrow().is_empty());
    }

    #[test]
    fn test_no_validation_or_formatting() {
        let slider = UglinessSlider::new(FakeLabel::default());
        slider.on_input("07");
        assert_eq!(slider.label().text(), "07");
        slider.on_input("");
        assert_eq!(slider.label().text(), "");
    }
}
