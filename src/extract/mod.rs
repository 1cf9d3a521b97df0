//! Extraction module for contact metadata
//!
//! This module contains the pure, I/O-free extractors used by both fetch paths:
//! - Email and phone-number pattern matching over text
//! - Social-network link detection against a shared pattern table
//! - HTML lookups for title, description and favicon

mod html;
mod page;
mod patterns;
mod social;

pub use html::{
    element_text, extract_description, extract_favicon, extract_phone_numbers_from_elements,
    extract_title,
};
pub use page::{parse_page, PageMetadata};
pub use patterns::{extract_emails, extract_phone_numbers};
pub use social::{
    extract_social_links, NetworkPatterns, SocialLinks, SocialNetwork, SOCIAL_NETWORKS,
};
