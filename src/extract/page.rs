//! Full metadata extraction for a fetched HTML page

use crate::extract::html::{
    extract_description, extract_favicon, extract_phone_numbers_from_elements, extract_title,
};
use crate::extract::patterns::{extract_emails, extract_phone_numbers};
use crate::extract::social::{extract_social_links, NetworkPatterns, SocialLinks};
use scraper::Html;
use url::Url;

/// Metadata pulled from one source, before the pipeline merges it into a record
///
/// `emails` and `phone_numbers` may still hold duplicates here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub favicon: Option<String>,
    pub emails: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub social_links: SocialLinks,
}

/// Parses a fetched HTML page and extracts its metadata
///
/// Emails and phone numbers are scanned over the raw body (markup included),
/// and phone numbers additionally over the text of `p`/`span`/`div`
/// elements. Both phone scans are concatenated without deduplication.
///
/// # Arguments
///
/// * `body` - The raw response body
/// * `page_url` - The URL the body was fetched from, used to resolve the favicon
/// * `patterns` - The social-network table
///
/// # Example
///
/// ```
/// use contact_scout::extract::{parse_page, SOCIAL_NETWORKS};
/// use url::Url;
///
/// let html = r#"<html><head><title>Acme</title></head><body>hi@acme.io</body></html>"#;
/// let page = parse_page(html, &Url::parse("https://acme.io/").unwrap(), SOCIAL_NETWORKS);
/// assert_eq!(page.title.as_deref(), Some("Acme"));
/// assert_eq!(page.emails, vec!["hi@acme.io".to_string()]);
/// ```
pub fn parse_page(body: &str, page_url: &Url, patterns: &NetworkPatterns) -> PageMetadata {
    let document = Html::parse_document(body);

    let mut phone_numbers = extract_phone_numbers(body);
    phone_numbers.extend(extract_phone_numbers_from_elements(&document));

    PageMetadata {
        title: extract_title(&document),
        description: extract_description(&document),
        favicon: extract_favicon(&document, page_url),
        emails: extract_emails(body),
        phone_numbers,
        social_links: extract_social_links(&document, patterns),
    }
}
