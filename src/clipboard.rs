//! Clipboard access used by the share action.

use arboard::Clipboard;

/// Handler for clipboard operations.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    pub fn new() -> Result<Self, arboard::Error> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }

    /// Write text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| format!("Failed to copy to clipboard: {}", e))
    }
}

/// Copy `text`, opening the clipboard on first use.
///
/// The handler is cached in `slot` so the platform clipboard is opened
/// once per session.
pub fn share(slot: &mut Option<ClipboardHandler>, text: &str) -> Result<(), String> {
    if slot.is_none() {
        let handler = ClipboardHandler::new()
            .map_err(|e| format!("Clipboard unavailable: {}", e))?;
        *slot = Some(handler);
    }
    match slot.as_mut() {
        Some(handler) => handler.set_text(text),
        None => Err("Clipboard unavailable".to_string()),
    }
}
