// crates/cli/src/clipboard.rs
use arboard::Clipboard;

/// Best-effort copy; callers report failure as a warning, not an error, so
/// the tool stays usable over SSH and in headless sessions.
pub fn copy(text: &str) -> std::result::Result<(), arboard::Error> {
    Clipboard::new()?.set_text(text)
}
