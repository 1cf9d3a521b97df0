//! HTML-specific lookups: head metadata and element-scoped phone scanning

use crate::extract::patterns::extract_phone_numbers;
use crate::url::resolve_href;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Extracts the page title from the first `<title>` element
///
/// Surrounding whitespace is trimmed. A present but empty title yields
/// `Some("")`; only a missing element yields None.
pub fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}

/// Extracts the `content` of `<meta name="description">`
pub fn extract_description(document: &Html) -> Option<String> {
    let meta_selector = Selector::parse(r#"meta[name="description"]"#).ok()?;

    document
        .select(&meta_selector)
        .find_map(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
}

/// Extracts the favicon from `<link rel="icon">`, resolved against `base_url`
///
/// `rel` is matched as a token list, so `rel="shortcut icon"` counts too.
pub fn extract_favicon(document: &Html, base_url: &Url) -> Option<String> {
    let icon_selector = Selector::parse(r#"link[rel~="icon"][href]"#).ok()?;

    document
        .select(&icon_selector)
        .next()
        .and_then(|element| element.value().attr("href"))
        .and_then(|href| resolve_href(base_url, href))
}

/// Joins an element's text nodes with single spaces, dropping blank ones
///
/// Keeps a boundary between sibling elements so `<span>555</span><span>1234</span>`
/// does not read as one run of digits.
pub fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs phone extraction over the text of every `<p>`, `<span>` and `<div>`
///
/// Nested elements are scanned individually, so the same number can be
/// reported more than once.
pub fn extract_phone_numbers_from_elements(document: &Html) -> Vec<String> {
    let Ok(text_selector) = Selector::parse("p, span, div") else {
        return Vec::new();
    };

    document
        .select(&text_selector)
        .flat_map(|element| extract_phone_numbers(&element_text(element)))
        .collect()
}
