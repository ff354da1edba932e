//! Website quick-check tab component

use dioxus::prelude::*;
use webcheck::{analyze_site, Report};

use crate::helpers::{copy_to_clipboard, copy_with_feedback};
use crate::state::CheckState;
use crate::toast::Toasts;

/// Website Check tab component
#[component]
pub fn WebcheckTab() -> Element {
    let mut url = use_signal(String::new);
    let mut check = use_signal(CheckState::default);
    let mut toasts = use_context::<Signal<Toasts>>();

    let state = check.read().clone();
    let running = state.is_running();

    rsx! {
        div { class: "tab-page",

            div { class: "header-box",
                h1 { class: "header-title", "🔍 Website-Check" }
                div { class: "header-stats",
                    span { "SEO- und Performance-Basics einer Website prüfen" }
                }
            }

            div { class: "controls",
                input {
                    class: "search-input search-input-wide",
                    r#type: "text",
                    placeholder: "URL, z.B. example.de",
                    value: "{url}",
                    oninput: move |e| url.set(e.value().clone()),
                }
                button {
                    class: "btn btn-primary",
                    disabled: running,
                    onclick: move |_| {
                        let target = url.read().trim().to_string();
                        if target.is_empty() {
                            toasts.write().show_error("Bitte URL angeben");
                            return;
                        }
                        check.set(CheckState::Running);
                        spawn(async move {
                            let report = analyze_site(&target).await;
                            check.set(CheckState::Done(report));
                        });
                    },
                    if running { "⏳ Prüfe..." } else { "🔍 Prüfen" }
                }
            }

            match state {
                CheckState::Idle => rsx! {
                    div { class: "empty-hint", "Noch kein Check gelaufen." }
                },
                CheckState::Running => rsx! {
                    div { class: "empty-hint", "Seite wird geladen und ausgewertet..." }
                },
                CheckState::Done(report) => rsx! {
                    ReportPanel { report }
                },
            }
        }
    }
}

#[component]
fn ReportPanel(report: Report) -> Element {
    let mut toasts = use_context::<Signal<Toasts>>();

    let suggestions_text = report.suggestions.join("\n");
    let overall_class = score_class(report.overall_score);
    let seo_class = score_class(report.seo.seo_score);
    let perf_class = score_class(report.perf_score);

    let response_time = format!("{:.2} s", report.metrics.response_time_s);
    let html_size = format!("{:.1} KB", report.metrics.html_size_kb);
    let images_total = report.metrics.images_total;
    let alt_pct = format!("{:.1}%", report.metrics.images_alt_pct);

    let missing = "– fehlt –".to_string();
    let title_display = if report.seo.title.is_empty() {
        missing.clone()
    } else {
        report.seo.title.clone()
    };
    let desc_display = if report.seo.meta_description.is_empty() {
        missing
    } else {
        report.seo.meta_description.clone()
    };
    let h1_count = report.seo.h1_count;
    let h1_samples = report.seo.h1_samples.join(" | ");

    rsx! {
        div { class: "report-panel",

            if !report.ok {
                div { class: "report-warning",
                    "⚠️ Die Seite konnte nicht geladen werden – bewertet wurde ein leeres Dokument."
                }
            }

            div { class: "score-row",
                div { class: "score-box",
                    span { class: "score-box-label", "Gesamt" }
                    span { class: "score-box-value {overall_class}", "{report.overall_score}" }
                }
                div { class: "score-box",
                    span { class: "score-box-label", "SEO" }
                    span { class: "score-box-value {seo_class}", "{report.seo.seo_score}" }
                }
                div { class: "score-box",
                    span { class: "score-box-label", "Performance" }
                    span { class: "score-box-value {perf_class}", "{report.perf_score}" }
                }
            }

            div { class: "metric-grid",
                div { class: "metric-item",
                    span { class: "metric-label", "Antwortzeit" }
                    span { class: "metric-value", "{response_time}" }
                }
                div { class: "metric-item",
                    span { class: "metric-label", "HTML-Größe" }
                    span { class: "metric-value", "{html_size}" }
                }
                div { class: "metric-item",
                    span { class: "metric-label", "Bilder" }
                    span { class: "metric-value", "{images_total}" }
                }
                div { class: "metric-item",
                    span { class: "metric-label", "Alt-Texte" }
                    span { class: "metric-value", "{alt_pct}" }
                }
            }

            div { class: "seo-details",
                div { class: "seo-line",
                    span { class: "metric-label", "Title" }
                    span { class: "seo-value", "{title_display}" }
                }
                div { class: "seo-line",
                    span { class: "metric-label", "Meta-Description" }
                    span { class: "seo-value", "{desc_display}" }
                }
                div { class: "seo-line",
                    span { class: "metric-label", "H1 ({h1_count})" }
                    span { class: "seo-value", "{h1_samples}" }
                }
            }

            if !report.suggestions.is_empty() {
                div { class: "suggestions",
                    div { class: "suggestions-header",
                        span { "Empfehlungen" }
                        button {
                            class: "btn btn-small",
                            onclick: move |_| {
                                copy_with_feedback(
                                    &suggestions_text,
                                    "Empfehlungen kopiert ✅",
                                    copy_to_clipboard,
                                    |msg| toasts.write().show(msg),
                                );
                            },
                            "📋 Kopieren"
                        }
                    }
                    ul { class: "suggestion-list",
                        for suggestion in report.suggestions.clone() {
                            li { "{suggestion}" }
                        }
                    }
                }
            }
        }
    }
}

fn score_class(score: u32) -> &'static str {
    if score >= 80 {
        "score-good"
    } else if score >= 60 {
        "score-mid"
    } else {
        "score-bad"
    }
}
