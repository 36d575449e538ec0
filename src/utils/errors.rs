//! Clipboard copy error types
//!
//! Every variant is recovered inside the copier: logged once, never propagated.

use std::fmt;
use wasm_bindgen::{JsCast, JsValue};

/// Failure of one clipboard copy path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    /// `navigator.clipboard.writeText` rejected (e.g. permission denied)
    ClipboardWriteRejected(String),
    /// `document.execCommand("copy")` returned false
    LegacyCopyUnsupported,
    /// The legacy path raised while preparing or running the copy command
    LegacyCopyThrew(String),
}

impl CopyError {
    /// Short label used as the log prefix
    pub fn context(&self) -> &'static str {
        match self {
            Self::ClipboardWriteRejected(_) => "Failed to copy",
            Self::LegacyCopyUnsupported => "Fallback copy failed",
            Self::LegacyCopyThrew(_) => "Fallback copy error",
        }
    }

    /// Whether the copier still has another path to try after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ClipboardWriteRejected(_))
    }
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClipboardWriteRejected(msg) => write!(f, "Clipboard write rejected: {}", msg),
            Self::LegacyCopyUnsupported => write!(f, "Copy command reported failure"),
            Self::LegacyCopyThrew(msg) => write!(f, "Copy command raised: {}", msg),
        }
    }
}

impl std::error::Error for CopyError {}

/// Extract a readable message from a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
