//! Clipboard helper for the copy-email shortcut
//!
//! Uses `arboard` for cross-platform support. The clipboard is opened per
//! copy rather than held for the life of the app.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Common failure cases: no display server (headless Linux, SSH sessions).
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

/// Copy `text` and return the toast message describing the result
pub fn copy_with_feedback(text: &str, what: &str) -> String {
    match copy_to_clipboard(text) {
        Ok(()) => {
            tracing::debug!(what, "Copied to clipboard");
            format!("✓ Copied {} to clipboard", what)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Clipboard unavailable");
            format!("✗ Clipboard unavailable: {}", text)
        }
    }
}
