//! URL handling module for Contact-Scout
//!
//! This module provides scheme normalization for caller input, target
//! parsing, and resolution of relative hrefs found on a page.

mod normalize;

// Re-export main functions
pub use normalize::{normalize_url, parse_target, resolve_href};
