//! Clipboard access behind a swappable provider.
//!
//! [`copy_to_clipboard`] works with any [`ClipboardProvider`]. The real one,
//! [`SystemClipboard`], needs the `system-clipboard` feature (on by default);
//! [`MemoryClipboard`] keeps the text in memory for tests and headless hosts.
//!
//! ## Examples
//!
//! ```rust
//! use utilkit::{copy_to_clipboard, ClipboardProvider, MemoryClipboard};
//!
//! let mut clipboard = MemoryClipboard::new();
//! assert!(copy_to_clipboard(&mut clipboard, "hello"));
//! assert_eq!(clipboard.read_text().unwrap(), "hello");
//!
//! // Failures are logged, not returned.
//! let mut broken = MemoryClipboard::failing("no display");
//! assert!(!copy_to_clipboard(&mut broken, "hello"));
//! ```

use crate::error::{Error, Result};

/// Something that can hold a piece of text for pasting.
pub trait ClipboardProvider {
    fn write_text(&mut self, text: &str) -> Result<()>;

    fn read_text(&mut self) -> Result<String>;
}

/// Writes `text` to `clipboard`, logging the outcome.
///
/// Returns `true` on success. Errors are logged at `error` level and never
/// returned.
pub fn copy_to_clipboard<P>(clipboard: &mut P, text: &str) -> bool
where
    P: ClipboardProvider + ?Sized,
{
    match clipboard.write_text(text) {
        Ok(()) => {
            tracing::info!(chars = text.chars().count(), "copied to clipboard");
            true
        }
        Err(err) => {
            tracing::error!(error = %err, "clipboard copy failed");
            false
        }
    }
}

/// Writes `text` to the operating system clipboard, logging the outcome.
#[cfg(feature = "system-clipboard")]
pub fn copy_to_system_clipboard(text: &str) -> bool {
    copy_to_clipboard(&mut SystemClipboard::new(), text)
}

/// The operating system clipboard.
///
/// The connection is opened on first use, so creating one never fails.
#[cfg(feature = "system-clipboard")]
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

#[cfg(feature = "system-clipboard")]
impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(Error::clipboard)?;
            tracing::debug!("opened system clipboard");
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| Error::clipboard("system clipboard unavailable"))
    }
}

#[cfg(feature = "system-clipboard")]
impl ClipboardProvider for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.handle()?.set_text(text).map_err(Error::clipboard)
    }

    fn read_text(&mut self) -> Result<String> {
        self.handle()?.get_text().map_err(Error::clipboard)
    }
}

#[cfg(feature = "system-clipboard")]
impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.inner.is_some())
            .finish()
    }
}

/// An in-memory clipboard.
///
/// [`MemoryClipboard::failing`] builds one that rejects every operation, for
/// exercising error paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<String>,
    failure: Option<String>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every operation fails with `reason`.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        MemoryClipboard {
            contents: None,
            failure: Some(reason.into()),
        }
    }

    /// The current text, if any was written.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(reason) => Err(Error::clipboard(reason)),
            None => Ok(()),
        }
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.check()?;
        self.contents = Some(text.to_string());
        Ok(())
    }

    fn read_text(&mut self) -> Result<String> {
        self.check()?;
        self.contents
            .clone()
            .ok_or_else(|| Error::clipboard("clipboard is empty"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_overwrites() {
        let mut clipboard = MemoryClipboard::new();
        assert!(copy_to_clipboard(&mut clipboard, "first"));
        assert!(copy_to_clipboard(&mut clipboard, "second"));
        assert_eq!(clipboard.contents(), Some("second"));
    }

    #[test]
    fn test_read_empty_is_error() {
        let mut clipboard = MemoryClipboard::new();
        assert!(matches!(clipboard.read_text(), Err(Error::Clipboard(_))));
    }

    #[test]
    fn test_failing_clipboard_keeps_nothing() {
        let mut clipboard = MemoryClipboard::failing("denied");
        assert!(!copy_to_clipboard(&mut clipboard, "secret"));
        assert_eq!(clipboard.contents(), None);
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut clipboard: Box<dyn ClipboardProvider> = Box::new(MemoryClipboard::new());
        assert!(copy_to_clipboard(clipboard.as_mut(), "dyn"));
        assert_eq!(clipboard.read_text().unwrap(), "dyn");
    }
}
