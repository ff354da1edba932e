//! Lead scoring tab component

use dioxus::prelude::*;
use leads::{generate_leads, Lead};

use super::LeadCard;
use crate::helpers::{copy_to_clipboard, copy_with_feedback, EMAIL_COPIED};
use crate::toast::Toasts;

const DEFAULT_COUNT: usize = 8;

/// Lead Scoring tab component
#[component]
pub fn LeadsTab() -> Element {
    let mut industry = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut count = use_signal(|| DEFAULT_COUNT);
    let mut results = use_signal(Vec::<Lead>::new);
    let mut searched = use_signal(|| false);
    let mut toasts = use_context::<Signal<Toasts>>();

    let lead_list = results.read().clone();
    let result_count = lead_list.len();

    rsx! {
        div { class: "tab-page",

            div { class: "header-box",
                h1 { class: "header-title", "🎯 Lead-Scoring" }
                div { class: "header-stats",
                    span { "Deterministische Beispiel-Leads mit Score und Outreach-E-Mail" }
                    if *searched.read() {
                        span { "{result_count} Leads" }
                    }
                }
            }

            div { class: "controls",
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Branche, z.B. Friseur",
                    value: "{industry}",
                    oninput: move |e| industry.set(e.value().clone()),
                }
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Stadt, z.B. Berlin",
                    value: "{city}",
                    oninput: move |e| city.set(e.value().clone()),
                }
                input {
                    class: "count-input",
                    r#type: "number",
                    min: "1",
                    max: "50",
                    value: "{count}",
                    oninput: move |e| {
                        if let Ok(n) = e.value().parse::<usize>() {
                            count.set(n.clamp(1, 50));
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        let branche = industry.read().trim().to_string();
                        let stadt = city.read().trim().to_string();
                        if branche.is_empty() || stadt.is_empty() {
                            toasts.write().show_error("Bitte Branche und Stadt angeben");
                            return;
                        }
                        results.set(generate_leads(&branche, &stadt, *count.read()));
                        searched.set(true);
                    },
                    "🚀 Leads generieren"
                }
            }

            div { class: "card-list",
                if *searched.read() && result_count == 0 {
                    div { class: "empty-hint", "Keine Leads generiert." }
                }
                for lead in lead_list {
                    LeadCard {
                        lead,
                        on_copy: move |text: String| {
                            copy_with_feedback(
                                &text,
                                EMAIL_COPIED,
                                copy_to_clipboard,
                                |msg| toasts.write().show(msg),
                            );
                        },
                    }
                }
            }
        }
    }
}
