//! Social-network link detection
//!
//! Both the HTML and the scraping-API extraction paths classify links with
//! the same [`SOCIAL_NETWORKS`] table.

use scraper::{Html, Selector};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Social networks recognized in page links
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    Instagram,
    Facebook,
    Twitter,
    Linkedin,
    Youtube,
    Tiktok,
    Pinterest,
    Whatsapp,
    Snapchat,
}

impl SocialNetwork {
    /// Returns the lowercase network name used in output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Youtube => "youtube",
            Self::Tiktok => "tiktok",
            Self::Pinterest => "pinterest",
            Self::Whatsapp => "whatsapp",
            Self::Snapchat => "snapchat",
        }
    }
}

impl fmt::Display for SocialNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered `(network, substring)` pairs a link is tested against
pub type NetworkPatterns = [(SocialNetwork, &'static str)];

/// The fixed network table
pub const SOCIAL_NETWORKS: &NetworkPatterns = &[
    (SocialNetwork::Instagram, "instagram.com"),
    (SocialNetwork::Facebook, "facebook.com"),
    (SocialNetwork::Twitter, "twitter.com"),
    (SocialNetwork::Linkedin, "linkedin.com"),
    (SocialNetwork::Youtube, "youtube.com"),
    (SocialNetwork::Tiktok, "tiktok.com"),
    (SocialNetwork::Pinterest, "pinterest.com"),
    (SocialNetwork::Whatsapp, "wa.me"),
    (SocialNetwork::Snapchat, "snapchat.com"),
];

/// One profile link per network; recording a network again replaces its link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SocialLinks(BTreeMap<SocialNetwork, String>);

impl SocialLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `url` under `network`, replacing any earlier link
    pub fn insert(&mut self, network: SocialNetwork, url: impl Into<String>) {
        self.0.insert(network, url.into());
    }

    /// Tests `href` against every pattern and records each network it matches
    ///
    /// Returns true if at least one network matched.
    pub fn record_link(&mut self, patterns: &NetworkPatterns, href: &str) -> bool {
        let mut matched = false;
        for (network, needle) in patterns {
            if href.contains(needle) {
                self.insert(*network, href);
                matched = true;
            }
        }
        matched
    }

    pub fn get(&self, network: SocialNetwork) -> Option<&str> {
        self.0.get(&network).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SocialNetwork, &str)> {
        self.0.iter().map(|(network, url)| (*network, url.as_str()))
    }
}

/// Extracts social-network links from every `<a href>` in the document
///
/// Anchors are visited in document order, so when several links point at the
/// same network the last one wins.
///
/// # Example
///
/// ```
/// use contact_scout::extract::{extract_social_links, SocialNetwork, SOCIAL_NETWORKS};
/// use scraper::Html;
///
/// let doc = Html::parse_document(r#"<a href="https://instagram.com/acme">IG</a>"#);
/// let links = extract_social_links(&doc, SOCIAL_NETWORKS);
/// assert_eq!(links.get(SocialNetwork::Instagram), Some("https://instagram.com/acme"));
/// ```
pub fn extract_social_links(document: &Html, patterns: &NetworkPatterns) -> SocialLinks {
    let mut links = SocialLinks::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                links.record_link(patterns, href);
            }
        }
    }

    links
}
