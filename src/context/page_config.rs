//! Page configuration
//!
//! Element ids and copy feedback settings. The server-rendered page can
//! override any field with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="uglyurl-config">
//!   { "feedback_ms": 1500, "copied_label": "Copied to clipboard" }
//! </script>
//! ```
//!
//! Fields left out keep their defaults.

use serde::Deserialize;

/// Id of the inline JSON config block
pub const CONFIG_ELEMENT_ID: &str = "uglyurl-config";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub slider_id: String,       // range input
    pub slider_label_id: String, // mirrors the slider value
    pub copy_button_id: String,
    pub copy_source_id: String, // element whose text is copied
    pub copied_label: String,
    pub copied_class: String,
    pub feedback_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            slider_id: "ugliness".to_string(),
            slider_label_id: "ugliness-value".to_string(),
            copy_button_id: "copy-btn".to_string(),
            copy_source_id: "ugly-url".to_string(),
            copied_label: "Copied!".to_string(),
            copied_class: "copied".to_string(),
            feedback_ms: 2000,
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read overrides from the page, falling back to defaults
    pub fn load(document: &web_sys::Document) -> Self {
        let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };

        let json = element.text_content().unwrap_or_default();
        if json.trim().is_empty() {
            return Self::default();
        }

        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded page config from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Err(e) => {
                log::warn!("Ignoring malformed page config: {}", e);
                Self::default()
            }
        }
    }
}
