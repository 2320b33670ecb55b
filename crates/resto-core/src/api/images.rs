//! Image URL resolution.
//!
//! The API never serves image bytes alongside the catalogue; it hands out
//! picture references that resolve against fixed base paths. Restaurant
//! photos come from the API's own image host, reviewer avatars from a
//! generic avatar generator keyed by the reviewer's name.

use super::DEFAULT_API_BASE;

/// Resolve a restaurant's picture reference to a small-image URL.
pub fn restaurant_image_url(picture_id: &str) -> String {
    format!("{DEFAULT_API_BASE}/images/small/{picture_id}")
}

/// Resolve a reviewer name to a generated avatar URL.
pub fn avatar_url(name: &str) -> String {
    format!("https://ui-avatars.com/api/?name={name}")
}
