//! Toast overlay component

use dioxus::prelude::*;

use crate::toast::{ToastKind, Toasts};

/// Renders the toast stack bottom-right and prunes expired toasts.
#[component]
pub fn ToastHost(mut toasts: Signal<Toasts>) -> Element {
    // Tick; only write the signal when something actually expired to avoid
    // re-render churn.
    use_future(move || async move {
        loop {
            tokio::time::sleep(std::time::Duration::from_millis(250)).await;
            if toasts.read().has_expired() {
                toasts.write().prune();
            }
        }
    });

    let visible = toasts.read().visible().to_vec();
    if visible.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "toast-stack",
            for toast in visible {
                div {
                    class: if toast.kind == ToastKind::Error { "toast toast-error" } else { "toast toast-success" },
                    "{toast.message}"
                }
            }
        }
    }
}
