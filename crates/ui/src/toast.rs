//! Transient toast notifications
//!
//! `Toasts` is plain state; it is held in a signal by the layout and handed
//! to components explicitly. Rendering lives in `components::ToastHost`.

use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    created_at: Instant,
}

impl Toast {
    fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) > TOAST_DURATION
    }
}

/// Toast stack. Every `show` pushes a fresh toast; expired ones are pruned
/// by the host on its tick, so fast successive shows briefly stack with the
/// newest message last.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    toasts: Vec<Toast>,
    shown: u64,
}

impl Toasts {
    pub fn show(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastKind::Success));
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.push(Toast::new(message, ToastKind::Error));
    }

    fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
        self.shown += 1;
    }

    /// Drop expired toasts
    pub fn prune(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    pub fn has_expired(&self) -> bool {
        self.toasts.iter().any(Toast::is_expired)
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    /// Number of display triggers since creation, pruning included
    pub fn times_shown(&self) -> u64 {
        self.shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn show_stores_the_message_verbatim() {
        let mut toasts = Toasts::default();
        toasts.show("  X  ");
        assert_eq!(toasts.latest().unwrap().message, "  X  ");
        assert_eq!(toasts.latest().unwrap().kind, ToastKind::Success);
    }

    #[test]
    fn two_shows_keep_the_newest_on_top_and_count_both() {
        let mut toasts = Toasts::default();
        toasts.show("erste");
        toasts.show("zweite");
        assert_eq!(toasts.latest().unwrap().message, "zweite");
        assert_eq!(toasts.times_shown(), 2);
        assert_eq!(toasts.visible().len(), 2);
    }

    #[test]
    fn expiry_is_based_on_creation_time() {
        let toast = Toast::new("hallo", ToastKind::Success);
        let now = Instant::now();
        assert!(!toast.is_expired_at(now));
        assert!(!toast.is_expired_at(now + TOAST_DURATION - Duration::from_millis(100)));
        assert!(toast.is_expired_at(now + TOAST_DURATION + Duration::from_millis(50)));
    }

    #[test]
    fn prune_keeps_fresh_toasts() {
        let mut toasts = Toasts::default();
        toasts.show("bleibt");
        toasts.prune();
        assert_eq!(toasts.visible().len(), 1);
        assert_eq!(toasts.times_shown(), 1);
    }

    #[test]
    fn errors_are_marked_as_such() {
        let mut toasts = Toasts::default();
        toasts.show_error("kaputt");
        assert_eq!(toasts.latest().unwrap().kind, ToastKind::Error);
    }
}
