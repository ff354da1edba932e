//! Main application component with routing

use dioxus::prelude::*;

use super::ToastHost;
use crate::routes::Route;
use crate::styles::CUSTOM_STYLES;
use crate::toast::Toasts;

/// Main application component
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Layout component wrapping all routes
#[component]
pub fn Layout() -> Element {
    // Toast state lives here and is handed to tabs via context, so every
    // component talks to the same stack without ambient globals.
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    let mut about_popup = use_signal(|| false);
    let route: Route = use_route();

    let version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown");

    let is_leads_tab = matches!(route, Route::LeadsTab {});
    let is_webcheck_tab = matches!(route, Route::WebcheckTab {});

    let about_message = format!(
        r#"
    LeadLens findet und bewertet Leads für eine Branche
    in einer Stadt und prüft Websites auf SEO- und
    Performance-Basics.

    Leads • Scoring • Outreach-E-Mails • Website-Check

    Version: {}
    "#,
        version
    );

    rsx! {
        style { {CUSTOM_STYLES} }

        div {
            class: "main-container",

            // Custom title bar
            div { class: "title-bar",
                div {
                    class: "title-bar-drag",
                    onmousedown: move |_| {
                        let window = dioxus::desktop::window();
                        let _ = window.drag_window();
                    },
                    span { class: "title-text", "📡 LeadLens | Lead-Recherche & Website-Check v{version}" }
                }
                div { class: "title-bar-buttons",
                    button {
                        class: "title-btn",
                        onclick: move |_| about_popup.set(true),
                        "?"
                    }
                    button {
                        class: "title-btn",
                        onclick: move |_| {
                            let window = dioxus::desktop::window();
                            window.set_minimized(true);
                        },
                        "─"
                    }
                    button {
                        class: "title-btn",
                        onclick: move |_| {
                            let window = dioxus::desktop::window();
                            window.set_maximized(!window.is_maximized());
                        },
                        "□"
                    }
                    button {
                        class: "title-btn title-btn-close",
                        onclick: move |_| {
                            let window = dioxus::desktop::window();
                            window.close();
                        },
                        "✕"
                    }
                }
            }

            // Tab Navigation
            div { class: "tab-bar",
                Link {
                    to: Route::LeadsTab {},
                    class: if is_leads_tab { "tab-item tab-active" } else { "tab-item" },
                    "🎯 Lead-Scoring"
                }
                Link {
                    to: Route::WebcheckTab {},
                    class: if is_webcheck_tab { "tab-item tab-active" } else { "tab-item" },
                    "🔍 Website-Check"
                }
            }

            // Content Area with Router Outlet
            div { class: "content-area",
                Outlet::<Route> {}
            }

            ToastHost { toasts }

            if *about_popup.read() {
                div {
                    class: "about-modal-overlay",
                    onclick: move |_| about_popup.set(false),

                    div {
                        class: "about-modal",
                        onclick: |e| e.stop_propagation(),

                        div {
                            class: "about-modal-header",
                            h2 { class: "about-modal-title", "📡 Über LeadLens" }
                            button {
                                class: "about-modal-close",
                                onclick: move |_| about_popup.set(false),
                                "✕"
                            }
                        }

                        span {
                            class: "about-modal-body",
                            "{about_message}"
                        }
                    }
                }
            }
        }
    }
}
