//! Lead card component

use dioxus::prelude::*;
use leads::Lead;

/// One scored lead with its outreach email and the copy button. The card
/// carries the email payload; the parent decides what copying means.
#[component]
pub fn LeadCard(lead: Lead, on_copy: EventHandler<String>) -> Element {
    let email = lead.email.clone();
    let badge_class = format!("score-badge {}", lead.score_color.css_class());

    rsx! {
        div {
            key: "{lead.domain}",
            class: "lead-card",

            div { class: "lead-card-header",
                div { class: "lead-card-names",
                    span { class: "lead-name", "{lead.name}" }
                    span { class: "lead-domain", "{lead.domain}" }
                }
                span { class: "{badge_class}", "{lead.score}" }
            }

            ul { class: "lead-reasons",
                for reason in lead.reasons.clone() {
                    li { "{reason}" }
                }
            }

            pre { class: "lead-email", "{lead.email}" }

            button {
                class: "btn btn-primary",
                onclick: move |_| on_copy.call(email.clone()),
                "📋 E-Mail kopieren"
            }
        }
    }
}
