//! Restaurant summary model definition.

use serde::{Deserialize, Serialize};

/// A restaurant summary as returned by the catalogue list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    /// Unique identifier for the restaurant
    pub id: String,

    /// Display name of the restaurant
    pub name: String,

    /// City the restaurant is located in
    pub city: String,

    /// Star rating, 0 through 5
    pub rating: f64,

    /// Whether the restaurant is currently open.
    /// The API omits this field for some entries; absent means closed.
    #[serde(default)]
    pub open_now: bool,

    /// Reference to the restaurant's photo, resolved against the image base
    /// path by [`crate::api::images::restaurant_image_url`]
    #[serde(rename = "pictureId")]
    pub picture_id: String,
}
