//! UI library for LeadLens
//! Contains Dioxus components with custom CSS (offline)

mod components;
mod helpers;
mod routes;
mod state;
mod styles;
mod toast;

pub use components::App;
pub use helpers::{copy_to_clipboard, copy_with_feedback, EMAIL_COPIED};
pub use state::*;
pub use styles::CUSTOM_STYLES;
pub use toast::{Toast, ToastKind, Toasts, TOAST_DURATION};
