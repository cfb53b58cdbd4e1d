//! Page summary extraction
//!
//! Pulls the three pieces of a page the scraper reports:
//! - Page title (first `<title>`)
//! - Meta description (first `<meta name="description">`)
//! - Top-level headings (every `<h1>`, in document order)

use scraper::{ElementRef, Html, Selector};

/// Extracted summary of one HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSummary {
    /// Trimmed text of the first `<title>`, empty if absent
    pub title: String,

    /// `content` of the first `<meta name="description">`, empty if absent
    pub description: String,

    /// Trimmed text of every `<h1>` in document order
    pub headings: Vec<String>,
}

/// Extracts the page summary from a parsed document
///
/// Total and pure: missing elements yield empty values, and malformed markup
/// only degrades what is found.
///
/// # Example
///
/// ```
/// use parasync_scraper::crawler::{extract, parse_document};
///
/// let html = r#"<html><head><title>Test</title></head><body><h1>Hello</h1></body></html>"#;
/// let summary = extract(&parse_document(html));
/// assert_eq!(summary.title, "Test");
/// assert_eq!(summary.headings, vec!["Hello".to_string()]);
/// ```
pub fn extract(document: &Html) -> PageSummary {
    PageSummary {
        title: extract_title(document),
        description: extract_description(document),
        headings: extract_headings(document),
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> String {
    let Ok(title_selector) = Selector::parse("title") else {
        return String::new();
    };

    document
        .select(&title_selector)
        .next()
        .map(|element| element_text(&element))
        .unwrap_or_default()
}

/// Extracts the meta description content attribute
fn extract_description(document: &Html) -> String {
    let Ok(meta_selector) = Selector::parse(r#"meta[name="description"]"#) else {
        return String::new();
    };

    document
        .select(&meta_selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Extracts every h1 heading in document order
fn extract_headings(document: &Html) -> Vec<String> {
    let Ok(h1_selector) = Selector::parse("h1") else {
        return Vec::new();
    };

    document
        .select(&h1_selector)
        .map(|element| element_text(&element))
        .collect()
}

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
