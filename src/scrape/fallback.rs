//! Fallback fetcher backed by a third-party scraping API
//!
//! The API answers with a JSON envelope shaped like
//! `{ "body": { "title", "meta": { "description" }, "favicon", "content", "links": [..] } }`.
//! Extraction over that envelope mirrors the HTML path: emails from the page
//! text and links, phone numbers from the page text, social links from the
//! link list.

use crate::config::FallbackConfig;
use crate::extract::{
    extract_emails, extract_phone_numbers, NetworkPatterns, PageMetadata, SocialLinks,
    SocialNetwork,
};
use crate::ScoutError;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// Top-level API response
#[derive(Debug, Default, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub body: Option<ApiBody>,
}

/// The page data inside the envelope
#[derive(Debug, Default, Deserialize)]
pub struct ApiBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub meta: Option<ApiMeta>,
    #[serde(default)]
    pub favicon: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub links: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiMeta {
    #[serde(default)]
    pub description: Option<String>,
}

/// Metadata recovered through the scraping API, plus the response it came from
#[derive(Debug, Clone)]
pub struct FallbackResult {
    pub metadata: PageMetadata,
    pub original_response: Value,
}

/// Queries the scraping API for `url` and extracts metadata from its answer
///
/// Any non-200 status, transport error or unexpected body shape is reported
/// as `ScoutError::FallbackUnavailable`.
///
/// # Arguments
///
/// * `client` - The HTTP client owned by this invocation
/// * `config` - Endpoint and query parameter name
/// * `url` - The normalized target URL, passed verbatim as the query value
/// * `patterns` - The social-network table
pub async fn fetch_fallback(
    client: &Client,
    config: &FallbackConfig,
    url: &str,
    patterns: &NetworkPatterns,
) -> Result<FallbackResult, ScoutError> {
    tracing::debug!("Querying scraping API {} for {}", config.endpoint, url);

    let response = client
        .get(&config.endpoint)
        .query(&[(config.query_param.as_str(), url)])
        .send()
        .await
        .map_err(|e| unavailable(url, format!("request failed: {}", e)))?;

    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(unavailable(
            url,
            format!("API returned status {}: {}", status.as_u16(), body.trim()),
        ));
    }

    let original_response: Value = response
        .json()
        .await
        .map_err(|e| unavailable(url, format!("response is not JSON: {}", e)))?;

    let envelope: ApiEnvelope = serde_json::from_value(original_response.clone())
        .map_err(|e| unavailable(url, format!("unexpected response shape: {}", e)))?;

    let metadata = extract_from_body(&envelope.body.unwrap_or_default(), patterns);

    Ok(FallbackResult {
        metadata,
        original_response,
    })
}

fn unavailable(url: &str, reason: String) -> ScoutError {
    ScoutError::FallbackUnavailable {
        url: url.to_string(),
        reason,
    }
}

/// Extracts metadata from the API's page data
pub fn extract_from_body(body: &ApiBody, patterns: &NetworkPatterns) -> PageMetadata {
    let content = body.content.as_deref().unwrap_or("");
    let links = body.links.as_deref().unwrap_or(&[]);

    let mut emails = extract_emails(content);
    for link in links {
        emails.extend(extract_emails(link));
    }

    let mut phone_numbers = extract_phone_numbers(content);
    let mut social_links = SocialLinks::new();

    for link in links {
        if let Some(phone) = whatsapp_phone(link) {
            phone_numbers.push(phone);
            social_links.insert(SocialNetwork::Whatsapp, link.as_str());
        }
        social_links.record_link(patterns, link);
    }

    PageMetadata {
        title: body.title.clone(),
        description: body.meta.as_ref().and_then(|meta| meta.description.clone()),
        favicon: body.favicon.clone(),
        emails,
        phone_numbers,
        social_links,
    }
}

/// Returns the `phone` query value of a WhatsApp link such as
/// `https://api.whatsapp.com/send?phone=14155552671`
pub fn whatsapp_phone(link: &str) -> Option<String> {
    let parsed = Url::parse(link).ok()?;
    if !parsed.host_str()?.contains("whatsapp") {
        return None;
    }

    parsed
        .query_pairs()
        .find(|(key, value)| key == "phone" && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}
