//! Clipboard copy with a legacy fallback
//!
//! Tries the async Clipboard API first (only in a secure context), then falls
//! back to selecting the text in an off-screen textarea and running the
//! legacy copy command. Failures are logged and never propagated.

use async_trait::async_trait;

use super::errors::CopyError;
use super::feedback::CopyFeedback;

/// Browser capabilities the copier needs
#[async_trait(?Send)]
pub trait ClipboardHost {
    /// Temporary element holding the text for the legacy command
    type Scratch;

    /// `navigator.clipboard` exists
    fn clipboard_api_present(&self) -> bool;

    fn is_secure_context(&self) -> bool;

    async fn write_text(&self, text: &str) -> Result<(), CopyError>;

    /// Create an off-screen element containing `text`, focused and selected
    fn attach_scratch(&self, text: &str) -> Result<Self::Scratch, CopyError>;

    /// Run the legacy copy command on the current selection
    fn exec_copy(&self, scratch: &Self::Scratch) -> Result<bool, CopyError>;

    fn detach_scratch(&self, scratch: Self::Scratch);
}

/// The async Clipboard API is only tried when present in a secure context
pub fn modern_path_allowed(api_present: bool, secure_context: bool) -> bool {
    api_present && secure_context
}

/// Which path put the text on the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    Modern,
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(CopyPath),
    /// Every failure that was logged along the way
    Failed(Vec<CopyError>),
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied(_))
    }
}

/// Scratch element that is detached when the guard goes out of scope
struct ScratchGuard<'a, H: ClipboardHost> {
    host: &'a H,
    scratch: Option<H::Scratch>,
}

impl<'a, H: ClipboardHost> ScratchGuard<'a, H> {
    fn attach(host: &'a H, text: &str) -> Result<Self, CopyError> {
        let scratch = host.attach_scratch(text)?;
        Ok(Self {
            host,
            scratch: Some(scratch),
        })
    }

    fn exec_copy(&self) -> Result<bool, CopyError> {
        match &self.scratch {
            Some(scratch) => self.host.exec_copy(scratch),
            None => Err(CopyError::LegacyCopyThrew("scratch element already released".to_string())),
        }
    }
}

impl<H: ClipboardHost> Drop for ScratchGuard<'_, H> {
    fn drop(&mut self) {
        if let Some(scratch) = self.scratch.take() {
            self.host.detach_scratch(scratch);
        }
    }
}

/// Copies text and reports success through its feedback
pub struct ClipboardCopier<H, F> {
    host: H,
    feedback: F,
}

impl<H: ClipboardHost, F: CopyFeedback> ClipboardCopier<H, F> {
    pub fn new(host: H, feedback: F) -> Self {
        Self { host, feedback }
    }

    #[cfg(test)]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[cfg(test)]
    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Copy `text` to the system clipboard
    ///
    /// Empty text is copied like any other value.
    pub async fn copy(&self, text: &str) -> CopyOutcome {
        let mut errors = Vec::new();

        if modern_path_allowed(self.host.clipboard_api_present(), self.host.is_secure_context()) {
            match self.host.write_text(text).await {
                Ok(()) => {
                    log::info!("Copied {} chars to clipboard", text.chars().count());
                    self.feedback.copied();
                    return CopyOutcome::Copied(CopyPath::Modern);
                }
                Err(e) => {
                    log::error!("{}: {}", e.context(), e);
                    let recoverable = e.is_recoverable();
                    errors.push(e);
                    if !recoverable {
                        return CopyOutcome::Failed(errors);
                    }
                }
            }
        }

        match self.legacy_copy(text) {
            Ok(()) => {
                log::info!("Copied {} chars to clipboard via fallback", text.chars().count());
                self.feedback.copied();
                CopyOutcome::Copied(CopyPath::Legacy)
            }
            Err(e) => {
                log::error!("{}: {}", e.context(), e);
                errors.push(e);
                CopyOutcome::Failed(errors)
            }
        }
    }

    fn legacy_copy(&self, text: &str) -> Result<(), CopyError> {
        let guard = ScratchGuard::attach(&self.host, text)?;
        if guard.exec_copy()? {
            Ok(())
        } else {
            Err(CopyError::LegacyCopyUnsupported)
        }
    }
}
