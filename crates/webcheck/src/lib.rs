//! Website quick-check module
//! Fetches a page and scores SEO and performance basics

mod scan;

pub use scan::DocScan;

use scan::scan_document;
use std::time::{Duration, Instant};
use thiserror::Error;

const FETCH_TIMEOUT: Duration = Duration::from_secs(8);
const USER_AGENT: &str = "Mozilla/5.0 (compatible; LeadLens/1.0)";

/// Fetch-layer failures. The caller collapses these into an `ok = false`
/// report; the variants exist so the log line says what actually happened.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },
}

/// Page-level metrics gathered during the fetch
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metrics {
    pub response_time_s: f64,
    pub html_size_kb: f64,
    pub images_total: usize,
    pub images_alt_pct: f64,
}

/// SEO signals and their score
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeoReport {
    pub title: String,
    pub meta_description: String,
    pub h1_count: usize,
    pub h1_samples: Vec<String>,
    pub seo_score: u32,
}

/// Full quick-check result for one URL
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    pub ok: bool,
    pub url: String,
    pub metrics: Metrics,
    pub seo: SeoReport,
    pub perf_score: u32,
    pub overall_score: u32,
    pub suggestions: Vec<String>,
}

/// Run the quick-check against a URL.
///
/// Missing schemes default to https. A failed fetch is not an error at this
/// level: it yields a report with `ok = false` and an empty document, the
/// same way the check treats an unreachable site as "nothing to score".
pub async fn analyze_site(url: &str) -> Report {
    let full_url = ensure_scheme(url);
    log::info!("quick-check: fetching {full_url}");
    let started = Instant::now();
    match fetch_page(&full_url).await {
        Ok(page) => build_report(url, true, page.elapsed_s, page.size_kb, &page.body),
        Err(err) => {
            log::warn!("quick-check: {err}");
            build_report(url, false, started.elapsed().as_secs_f64(), 0.0, "")
        }
    }
}

struct FetchedPage {
    body: String,
    elapsed_s: f64,
    size_kb: f64,
}

async fn fetch_page(url: &str) -> Result<FetchedPage, FetchError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(FetchError::Client)?;

    let started = Instant::now();
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;
    let bytes = response
        .bytes()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;
    let elapsed_s = started.elapsed().as_secs_f64();

    Ok(FetchedPage {
        size_kb: bytes.len() as f64 / 1024.0,
        body: String::from_utf8_lossy(&bytes).into_owned(),
        elapsed_s,
    })
}

fn ensure_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

fn build_report(url: &str, ok: bool, elapsed_s: f64, size_kb: f64, html: &str) -> Report {
    let doc = scan_document(html);

    let alt_pct = if doc.images_total > 0 {
        round1(doc.images_with_alt as f64 / doc.images_total as f64 * 100.0)
    } else {
        100.0
    };

    let title_len = doc.title.chars().count();
    let desc_len = doc.meta_description.chars().count();

    let mut seo_score = 0u32;
    if !doc.title.is_empty() {
        seo_score += 25;
        if (35..=65).contains(&title_len) {
            seo_score += 15;
        }
    }
    if !doc.meta_description.is_empty() {
        seo_score += 25;
        if (80..=160).contains(&desc_len) {
            seo_score += 15;
        }
    }
    if doc.h1_texts.len() == 1 {
        seo_score += 20;
    }
    let seo_score = seo_score.min(100);

    let mut perf_score = 0u32;
    perf_score += if elapsed_s < 1.0 {
        40
    } else if elapsed_s < 2.0 {
        25
    } else {
        10
    };
    perf_score += if size_kb < 1500.0 {
        40
    } else if size_kb < 3500.0 {
        25
    } else {
        10
    };
    if alt_pct >= 80.0 {
        perf_score += 20;
    }
    let perf_score = perf_score.min(100);

    let overall_score = (0.5 * seo_score as f64 + 0.4 * perf_score as f64 + 0.1 * alt_pct) as u32;

    let mut suggestions = Vec::new();
    if doc.title.is_empty() {
        suggestions.push("Fehlender <title>-Tag – dringend ergänzen (SEO-Basic).".to_string());
    } else if !(35..=65).contains(&title_len) {
        suggestions.push("Title-Länge optimieren (35–65 Zeichen).".to_string());
    }
    if doc.meta_description.is_empty() {
        suggestions.push(
            "Meta-Description fehlt – für höhere CTR ergänzen (80–160 Zeichen).".to_string(),
        );
    } else if !(80..=160).contains(&desc_len) {
        suggestions.push("Meta-Description auf 80–160 Zeichen trimmen.".to_string());
    }
    if doc.h1_texts.len() != 1 {
        suggestions.push(format!(
            "Genau eine H1 verwenden – aktuell {} gefunden.",
            doc.h1_texts.len()
        ));
    }
    if elapsed_s >= 1.0 {
        suggestions.push(format!(
            "Antwortzeit reduzieren – aktuell {elapsed_s:.2}s (Ziel <1.0s)."
        ));
    }
    if size_kb >= 1500.0 {
        suggestions.push(format!(
            "Seitengewicht optimieren – aktuell {}KB (Bilder/JS/CSS minifizieren).",
            round1(size_kb)
        ));
    }
    if alt_pct < 80.0 {
        suggestions.push(format!("Bild-Alt-Texte ergänzen – nur {alt_pct}% mit Alt."));
    }

    let h1_count = doc.h1_texts.len();
    let mut h1_samples = doc.h1_texts;
    h1_samples.truncate(3);

    Report {
        ok,
        url: url.to_string(),
        metrics: Metrics {
            response_time_s: round2(elapsed_s),
            html_size_kb: round1(size_kb),
            images_total: doc.images_total,
            images_alt_pct: alt_pct,
        },
        seo: SeoReport {
            title: doc.title,
            meta_description: doc.meta_description,
            h1_count,
            h1_samples,
            seo_score,
        },
        perf_score,
        overall_score,
        suggestions,
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(title: &str, desc: &str, h1s: usize) -> String {
        let mut html = format!(
            "<html><head><title>{title}</title>\
             <meta name=\"description\" content=\"{desc}\"></head><body>"
        );
        for i in 0..h1s {
            html.push_str(&format!("<h1>Überschrift {i}</h1>"));
        }
        html.push_str("</body></html>");
        html
    }

    #[test]
    fn scheme_is_added_when_missing() {
        assert_eq!(ensure_scheme("example.de"), "https://example.de");
        assert_eq!(ensure_scheme("http://example.de"), "http://example.de");
        assert_eq!(ensure_scheme("https://example.de"), "https://example.de");
    }

    #[test]
    fn well_formed_fast_page_scores_full_marks() {
        let html = page(
            &"T".repeat(40),
            &"Eine ausführliche Beschreibung. ".repeat(4),
            1,
        );
        let report = build_report("example.de", true, 0.3, 120.0, &html);
        assert_eq!(report.seo.seo_score, 100);
        assert_eq!(report.perf_score, 100);
        assert_eq!(report.overall_score, 100);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn failed_fetch_still_produces_a_report() {
        let report = build_report("down.example", false, 0.01, 0.0, "");
        assert!(!report.ok);
        assert_eq!(report.seo.seo_score, 0);
        // Empty doc: fast, tiny, all-alt by definition
        assert_eq!(report.perf_score, 100);
        assert_eq!(report.overall_score, 50);
        assert_eq!(report.metrics.images_alt_pct, 100.0);
    }

    #[test]
    fn title_length_band_gates_the_bonus() {
        let short = build_report("x", true, 0.3, 100.0, &page("Kurz", "", 1));
        assert_eq!(short.seo.seo_score, 25 + 20);
        let fits = build_report("x", true, 0.3, 100.0, &page(&"T".repeat(50), "", 1));
        assert_eq!(fits.seo.seo_score, 25 + 15 + 20);
    }

    #[test]
    fn multiple_h1s_trigger_the_suggestion() {
        let report = build_report("x", true, 0.3, 100.0, &page(&"T".repeat(50), "", 3));
        assert_eq!(report.seo.h1_count, 3);
        assert!(report
            .suggestions
            .iter()
            .any(|s| s == "Genau eine H1 verwenden – aktuell 3 gefunden."));
    }

    #[test]
    fn h1_samples_are_capped_at_three() {
        let report = build_report("x", true, 0.3, 100.0, &page("T", "", 5));
        assert_eq!(report.seo.h1_count, 5);
        assert_eq!(report.seo.h1_samples.len(), 3);
    }

    #[test]
    fn slow_heavy_page_gets_performance_suggestions() {
        let html = page(&"T".repeat(50), &"D".repeat(100), 1);
        let report = build_report("x", true, 2.5, 4000.0, &html);
        assert_eq!(report.perf_score, 10 + 10 + 20);
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.starts_with("Antwortzeit reduzieren – aktuell 2.50s")));
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.starts_with("Seitengewicht optimieren – aktuell 4000KB")));
    }

    #[test]
    fn low_alt_coverage_is_flagged() {
        let html = format!(
            "{}<img src=\"a.jpg\" alt=\"ok\"><img src=\"b.jpg\"><img src=\"c.jpg\">",
            page(&"T".repeat(50), "", 1)
        );
        let report = build_report("x", true, 0.3, 100.0, &html);
        assert_eq!(report.metrics.images_total, 3);
        assert_eq!(report.metrics.images_alt_pct, 33.3);
        assert!(report
            .suggestions
            .iter()
            .any(|s| s == "Bild-Alt-Texte ergänzen – nur 33.3% mit Alt."));
    }

    #[tokio::test]
    async fn unreachable_host_collapses_into_not_ok() {
        // .invalid is reserved and never resolves
        let report = analyze_site("unreachable.invalid").await;
        assert!(!report.ok);
        assert_eq!(report.url, "unreachable.invalid");
        assert_eq!(report.metrics.html_size_kb, 0.0);
    }
}
