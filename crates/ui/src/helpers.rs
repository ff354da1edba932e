//! Helper functions for the UI

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Toast text confirming that a lead's email was copied
pub const EMAIL_COPIED: &str = "E-Mail-Text kopiert ✅";

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("failed to access system clipboard")?;
    clipboard
        .set_text(text)
        .context("failed to copy text to clipboard")?;
    Ok(())
}

/// Copy `text` and, only if the write succeeded, fire the notifier with
/// `confirmation`. A failed write is logged and produces no toast.
///
/// The write is injected so the sequencing is testable without touching the
/// real clipboard.
pub fn copy_with_feedback<W, N>(text: &str, confirmation: &str, write: W, mut notify: N)
where
    W: FnOnce(&str) -> Result<()>,
    N: FnMut(&str),
{
    match write(text) {
        Ok(()) => notify(confirmation),
        Err(err) => log::warn!("clipboard write failed: {err:#}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[test]
    fn write_is_invoked_exactly_once_with_the_exact_payload() {
        let written = RefCell::new(Vec::<String>::new());
        copy_with_feedback(
            "Hello",
            EMAIL_COPIED,
            |text| {
                written.borrow_mut().push(text.to_string());
                Ok(())
            },
            |_| {},
        );
        assert_eq!(*written.borrow(), vec!["Hello".to_string()]);
    }

    #[test]
    fn notifier_fires_once_with_the_confirmation_on_success() {
        let mut notified = Vec::new();
        copy_with_feedback("Hello", EMAIL_COPIED, |_| Ok(()), |msg| {
            notified.push(msg.to_string());
        });
        assert_eq!(notified, vec![EMAIL_COPIED.to_string()]);
    }

    #[test]
    fn notifier_never_fires_when_the_write_fails() {
        let mut notified = Vec::new();
        copy_with_feedback(
            "Hello",
            EMAIL_COPIED,
            |_| Err(anyhow::anyhow!("denied")),
            |msg| notified.push(msg.to_string()),
        );
        assert!(notified.is_empty());
    }
}
