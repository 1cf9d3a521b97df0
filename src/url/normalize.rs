use crate::{UrlError, UrlResult};
use url::Url;

/// Scheme prefixed onto inputs that carry none
const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Normalizes a caller-supplied URL by making sure it carries an HTTP(S) scheme
///
/// The check is case-insensitive. Anything that does not start with
/// `http://` or `https://` gets `https://` prepended; nothing else about the
/// input is touched, so the result is always `"https://" + input` or the
/// input itself.
///
/// # Examples
///
/// ```
/// use contact_scout::url::normalize_url;
///
/// assert_eq!(normalize_url("example.com"), "https://example.com");
/// assert_eq!(normalize_url("HTTP://example.com"), "HTTP://example.com");
/// ```
pub fn normalize_url(url_str: &str) -> String {
    if has_http_scheme(url_str) {
        url_str.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME_PREFIX, url_str)
    }
}

/// Returns true if the string starts with `http://` or `https://`, ignoring case
fn has_http_scheme(url_str: &str) -> bool {
    ["http://", "https://"].iter().any(|prefix| {
        url_str
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

/// Parses a normalized URL into a `Url`, rejecting anything that is not HTTP(S)
pub fn parse_target(url_str: &str) -> UrlResult<Url> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(format!("{}: {}", url_str, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    Ok(url)
}

/// Resolves an href against the page it was found on
///
/// Absolute hrefs come back unchanged (modulo `Url` serialization); relative
/// ones are joined onto `base`. Returns None for hrefs that cannot be resolved.
pub fn resolve_href(base: &Url, href: &str) -> Option<String> {
    base.join(href.trim()).ok().map(|resolved| resolved.to_string())
}
