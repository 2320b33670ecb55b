//! Display implementations for domain models.
//!
//! All model formatting produces markdown for the terminal renderer. Cards
//! are compact (one summary per restaurant), the detail view is the
//! full-width "modal" equivalent with description and reviews.

use std::fmt;

use super::stars::{PriceTag, Stars};
use crate::api::images::{avatar_url, restaurant_image_url};
use crate::models::{Restaurant, RestaurantDetail, Review};

/// Open/closed marker with consistent icon formatting.
fn status_marker(open_now: bool) -> &'static str {
    if open_now {
        "● Open"
    } else {
        "○ Closed"
    }
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;

        writeln!(f, "- **Rating**: {} ({})", Stars(self.rating), self.rating)?;
        let price = PriceTag(self.rating);
        if !price.is_empty() {
            writeln!(f, "- **Price**: {price}")?;
        }
        writeln!(f, "- **City**: {}", self.city)?;
        writeln!(f, "- **Status**: {}", status_marker(self.open_now))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for RestaurantDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Rating: {} ({})", Stars(self.rating), self.rating)?;
        let price = PriceTag(self.rating);
        if !price.is_empty() {
            writeln!(f, "- Price: {price}")?;
        }
        writeln!(f, "- City: {}", self.city)?;
        writeln!(f, "- Status: {}", status_marker(self.open_now))?;
        writeln!(f, "- Photo: {}", restaurant_image_url(&self.picture_id))?;

        // Description as a paragraph
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;

        if self.reviews.is_empty() {
            writeln!(f, "\nNo reviews yet.")?;
        } else {
            writeln!(f, "\n## Reviews")?;
            writeln!(f)?;
            for review in &self.reviews {
                write!(f, "{review}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "{}", self.review)?;
        writeln!(f)?;
        writeln!(f, "- Avatar: {}", avatar_url(&self.name))?;
        writeln!(f)?;

        Ok(())
    }
}
