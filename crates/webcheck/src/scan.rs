//! String-based HTML scanning for the quick-check.
//!
//! We only need a handful of signals (title, meta description, h1s, img alt
//! coverage), so the page is walked as text instead of pulling in a full
//! HTML parser. Attribute handling is quote-aware.

/// Signals extracted from a fetched page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocScan {
    pub title: String,
    pub meta_description: String,
    pub h1_texts: Vec<String>,
    pub images_total: usize,
    pub images_with_alt: usize,
}

/// Walk the document once per tag kind and collect the scored signals.
pub fn scan_document(html: &str) -> DocScan {
    let title = tag_text(html, "title").unwrap_or_default();
    let meta_description = meta_description(html);
    let h1_texts = all_tag_texts(html, "h1");

    let img_tags = open_tags(html, "img");
    let images_total = img_tags.len();
    let images_with_alt = img_tags
        .iter()
        .filter(|tag| attribute(tag, "alt").is_some_and(|alt| !alt.trim().is_empty()))
        .count();

    DocScan {
        title,
        meta_description,
        h1_texts,
        images_total,
        images_with_alt,
    }
}

/// `name="description"` first, `property="og:description"` as fallback
fn meta_description(html: &str) -> String {
    let metas = open_tags(html, "meta");
    let by_name = metas.iter().find_map(|tag| {
        if attribute(tag, "name").as_deref() == Some("description") {
            attribute(tag, "content")
        } else {
            None
        }
    });
    let described = by_name.or_else(|| {
        metas.iter().find_map(|tag| {
            if attribute(tag, "property").as_deref() == Some("og:description") {
                attribute(tag, "content")
            } else {
                None
            }
        })
    });
    described.map(|d| d.trim().to_string()).unwrap_or_default()
}

/// Text content of the first `<tag>...</tag>` pair, tags stripped and
/// whitespace collapsed.
fn tag_text(html: &str, tag: &str) -> Option<String> {
    all_tag_texts_iter(html, tag).next()
}

/// Text content of every `<tag>...</tag>` pair in document order.
fn all_tag_texts(html: &str, tag: &str) -> Vec<String> {
    all_tag_texts_iter(html, tag).collect()
}

fn all_tag_texts_iter<'a>(html: &'a str, tag: &'a str) -> impl Iterator<Item = String> + 'a {
    let lower = html.to_ascii_lowercase();
    let open = format!("<{}", tag.to_ascii_lowercase());
    let close = format!("</{}", tag.to_ascii_lowercase());

    let mut pos = 0usize;
    std::iter::from_fn(move || {
        while pos < lower.len() {
            let start = match lower[pos..].find(&open) {
                Some(offset) => pos + offset,
                None => return None,
            };
            // Reject prefix matches such as <titlebar> when looking for <title>
            let after = lower.as_bytes().get(start + open.len()).copied();
            if !matches!(after, Some(b'>') | Some(b'/') | None)
                && !after.is_some_and(|b| b.is_ascii_whitespace())
            {
                pos = start + 1;
                continue;
            }
            let Some(bracket) = unquoted_close_bracket(&html[start..]) else {
                return None;
            };
            let body_start = start + bracket + 1;
            let Some(end_offset) = lower[body_start..].find(&close) else {
                pos = body_start;
                continue;
            };
            pos = body_start + end_offset + close.len();
            return Some(collapse_text(&html[body_start..body_start + end_offset]));
        }
        None
    })
}

/// Collect the attribute region of every `<tag ...>` opening in the document,
/// e.g. every `<img ...>` regardless of self-closing style.
fn open_tags(html: &str, tag: &str) -> Vec<String> {
    let lower = html.to_ascii_lowercase();
    let open = format!("<{}", tag.to_ascii_lowercase());
    let mut tags = Vec::new();
    let mut pos = 0usize;

    while pos < lower.len() {
        let Some(offset) = lower[pos..].find(&open) else {
            break;
        };
        let start = pos + offset;
        let after = lower.as_bytes().get(start + open.len()).copied();
        let boundary = matches!(after, Some(b'>') | Some(b'/') | None)
            || after.is_some_and(|b| b.is_ascii_whitespace());
        if !boundary {
            pos = start + 1;
            continue;
        }
        match unquoted_close_bracket(&html[start..]) {
            Some(bracket) => {
                tags.push(html[start..start + bracket].to_string());
                pos = start + bracket + 1;
            }
            // Unterminated tag, stop scanning
            None => break,
        }
    }

    tags
}

/// Find the closing `>` of a tag while ignoring brackets inside quoted
/// attribute values.
fn unquoted_close_bracket(tag: &str) -> Option<usize> {
    let mut in_single = false;
    let mut in_double = false;
    for (i, &byte) in tag.as_bytes().iter().enumerate() {
        match byte {
            b'\'' if !in_double => in_single = !in_single,
            b'"' if !in_single => in_double = !in_double,
            b'>' if !in_single && !in_double => return Some(i),
            _ => {}
        }
    }
    None
}

/// Extract a single attribute value from a tag's attribute region.
fn attribute(tag: &str, name: &str) -> Option<String> {
    let lower = tag.to_ascii_lowercase();
    let wanted = name.to_ascii_lowercase();
    let bytes = tag.as_bytes();

    let mut search = 0usize;
    while let Some(found) = lower[search..].find(&wanted) {
        let at = search + found;
        let word_start = at == 0 || bytes[at - 1].is_ascii_whitespace();
        if !word_start {
            search = at + 1;
            continue;
        }

        let mut pos = at + wanted.len();
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= bytes.len() || bytes[pos] != b'=' {
            search = at + 1;
            continue;
        }
        pos += 1;
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= bytes.len() {
            return None;
        }

        let rest = &tag[pos..];
        let quote = rest.chars().next()?;
        if quote == '"' || quote == '\'' {
            return rest[1..]
                .find(quote)
                .map(|close| rest[1..close + 1].to_string());
        }
        // Unquoted value runs to whitespace or end of the attribute region
        let end = rest
            .find(|c: char| c.is_ascii_whitespace())
            .unwrap_or(rest.len());
        return Some(rest[..end].to_string());
    }

    None
}

/// Drop nested tags and collapse runs of whitespace.
fn collapse_text(fragment: &str) -> String {
    let mut text = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for ch in fragment.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAGE: &str = r##"<!doctype html>
<html>
<head>
  <TITLE>  Bäckerei Müller – Brot aus Berlin </TITLE>
  <meta charset="utf-8">
  <meta name="description" content="Handwerksbäckerei seit 1950 > mit Herz">
  <meta property="og:description" content="og fallback text">
</head>
<body>
  <h1 class="hero">Willkommen <em>bei</em>
     Müller</h1>
  <h1>Zweite Überschrift</h1>
  <img src="a.jpg" alt="Schaufenster">
  <img src="b.jpg" alt="">
  <img src=c.jpg alt=logo >
  <img src="d.jpg"/>
</body>
</html>"##;

    #[test]
    fn extracts_title_case_insensitively() {
        let scan = scan_document(PAGE);
        assert_eq!(scan.title, "Bäckerei Müller – Brot aus Berlin");
    }

    #[test]
    fn meta_description_prefers_name_over_og() {
        let scan = scan_document(PAGE);
        assert_eq!(scan.meta_description, "Handwerksbäckerei seit 1950 > mit Herz");
    }

    #[test]
    fn meta_description_falls_back_to_og() {
        let html = r#"<meta property="og:description" content="og only">"#;
        assert_eq!(scan_document(html).meta_description, "og only");
    }

    #[test]
    fn h1_texts_are_collected_and_cleaned() {
        let scan = scan_document(PAGE);
        assert_eq!(
            scan.h1_texts,
            vec!["Willkommen bei Müller".to_string(), "Zweite Überschrift".to_string()]
        );
    }

    #[test]
    fn img_alt_counting_skips_empty_and_missing() {
        let scan = scan_document(PAGE);
        assert_eq!(scan.images_total, 4);
        // "Schaufenster" and the unquoted "logo" count, alt="" and no-alt do not
        assert_eq!(scan.images_with_alt, 2);
    }

    #[test]
    fn prefix_tag_names_do_not_match() {
        let html = "<title-card>nope</title-card><h1>ok</h1>";
        let scan = scan_document(html);
        assert_eq!(scan.title, "");
        assert_eq!(scan.h1_texts, vec!["ok".to_string()]);
    }

    #[test]
    fn empty_document_scans_to_defaults() {
        assert_eq!(scan_document(""), DocScan::default());
    }
}
