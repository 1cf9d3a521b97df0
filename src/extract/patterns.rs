//! Regex extractors for emails and phone numbers over plain text

use regex::Regex;
use std::sync::LazyLock;

/// Standard email syntax; asset-looking top-level labels are filtered after matching
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid regex")
});

/// Optional country code, optional (parenthesized) area code, then 3 + 4 digits
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?(?:\(?\d{3}\)?[-.\s]?)?\d{3}[-.\s]?\d{4}")
        .expect("valid regex")
});

/// File extensions that show up after an `@` in asset paths like `logo@2x.png`
const ASSET_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "svg", "css", "js"];

/// Shortest phone candidate kept, in characters
const MIN_PHONE_LEN: usize = 10;

/// Extracts email addresses from text
///
/// Matches whose final domain label is a static-asset extension
/// (`sprite@2x.png`, `bundle@1.2.js`) are dropped. Order follows the text and
/// duplicates are kept.
///
/// # Example
///
/// ```
/// use contact_scout::extract::extract_emails;
///
/// let emails = extract_emails("contact me at a@b.com, see logo.png");
/// assert_eq!(emails, vec!["a@b.com".to_string()]);
/// ```
pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|candidate| !candidate.is_empty() && !has_asset_suffix(candidate))
        .map(str::to_string)
        .collect()
}

fn has_asset_suffix(email: &str) -> bool {
    email
        .rsplit('.')
        .next()
        .map(|label| {
            ASSET_EXTENSIONS
                .iter()
                .any(|ext| label.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Extracts phone number candidates from text
///
/// The pattern is permissive on purpose; the only filter is a minimum
/// trimmed length of 10 characters. Duplicates are kept.
///
/// # Example
///
/// ```
/// use contact_scout::extract::extract_phone_numbers;
///
/// let phones = extract_phone_numbers("Call 123-456-7890 or (555) 234 5678");
/// assert_eq!(phones, vec!["123-456-7890", "(555) 234 5678"]);
/// ```
pub fn extract_phone_numbers(text: &str) -> Vec<String> {
    PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|candidate| candidate.chars().count() >= MIN_PHONE_LEN)
        .map(str::to_string)
        .collect()
}
