//! Restaurant detail and review models.

use serde::{Deserialize, Serialize};

/// Extended restaurant record returned by the detail endpoint.
///
/// A superset of [`crate::models::Restaurant`] with a description and the
/// customer reviews. Fetched on demand when the user opens a restaurant's
/// detail view; never cached, so repeated requests re-fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestaurantDetail {
    /// Unique identifier for the restaurant
    pub id: String,

    /// Display name of the restaurant
    pub name: String,

    /// City the restaurant is located in
    pub city: String,

    /// Star rating, 0 through 5
    pub rating: f64,

    /// Whether the restaurant is currently open
    #[serde(default)]
    pub open_now: bool,

    /// Reference to the restaurant's photo
    #[serde(rename = "pictureId")]
    pub picture_id: String,

    /// Long-form description of the restaurant
    pub description: String,

    /// Customer reviews, in the order the API returns them
    #[serde(rename = "customerReviews", default)]
    pub reviews: Vec<Review>,
}

/// A single customer review.
///
/// Reviews have no identity beyond their position in the detail record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Name of the reviewer
    pub name: String,

    /// Review text
    pub review: String,
}
