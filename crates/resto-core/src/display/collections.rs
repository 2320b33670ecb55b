//! Collection wrapper types for displaying groups of domain objects.
//!
//! These newtypes format collections with consistent structure and empty
//! collection handling, so consumers never hand-roll "no results" text.

use std::{fmt, ops::Index};

use crate::models::Restaurant;

/// Newtype wrapper for displaying a run of restaurant cards.
///
/// Formats each restaurant using its own Display implementation and
/// handles the empty collection gracefully.
///
/// # Examples
///
/// ```rust
/// use resto_core::{display::Cards, models::Restaurant};
///
/// let cards = Cards(vec![Restaurant {
///     id: "r1".to_string(),
///     name: "Melting Pot".to_string(),
///     city: "Medan".to_string(),
///     rating: 4.2,
///     open_now: true,
///     picture_id: "14".to_string(),
/// }]);
/// let output = format!("{}", cards);
/// assert!(output.contains("Melting Pot"));
/// ```
pub struct Cards(pub Vec<Restaurant>);

impl Cards {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of cards in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the restaurant at the given index.
    pub fn get(&self, index: usize) -> Option<&Restaurant> {
        self.0.get(index)
    }

    /// Get an iterator over the restaurants.
    pub fn iter(&self) -> std::slice::Iter<'_, Restaurant> {
        self.0.iter()
    }
}

impl Index<usize> for Cards {
    type Output = Restaurant;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Cards {
    type Item = Restaurant;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Cards {
    type Item = &'a Restaurant;
    type IntoIter = std::slice::Iter<'a, Restaurant>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Cards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No restaurants found.")
        } else {
            for restaurant in &self.0 {
                write!(f, "{restaurant}")?;
            }
            Ok(())
        }
    }
}

/// The visible page of a filtered listing, with its footer.
///
/// Wraps the visible cards together with the filtered total so the output
/// can say how much of the list is on screen and whether more can be
/// loaded.
pub struct Listing {
    /// The currently visible cards
    pub cards: Cards,
    /// Size of the whole filtered list
    pub total: usize,
}

impl Listing {
    /// Create a listing page over the visible slice of a filtered list.
    pub fn new(visible: Vec<Restaurant>, total: usize) -> Self {
        Self {
            cards: Cards(visible),
            total,
        }
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total == 0 {
            return writeln!(f, "No restaurants match the current filters.");
        }

        write!(f, "{}", self.cards)?;
        writeln!(f, "Showing {} of {} restaurants.", self.cards.len(), self.total)?;
        if self.cards.len() < self.total {
            writeln!(f, "Load more to see the rest.")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_restaurant(id: &str, name: &str) -> Restaurant {
        Restaurant {
            id: id.to_string(),
            name: name.to_string(),
            city: "Bandung".to_string(),
            rating: 3.4,
            open_now: false,
            picture_id: "30".to_string(),
        }
    }

    #[test]
    fn test_cards_display() {
        let cards = Cards(vec![
            create_test_restaurant("r1", "Bumi Bandung"),
            create_test_restaurant("r2", "Saya Suka"),
        ]);
        let output = format!("{cards}");

        assert!(output.contains("## Bumi Bandung (ID: r1)"));
        assert!(output.contains("## Saya Suka (ID: r2)"));

        // Cards format themselves; the wrapper adds no title header
        assert!(!output.starts_with("# "));
    }

    #[test]
    fn test_cards_display_empty() {
        let cards = Cards(vec![]);
        assert_eq!(format!("{cards}"), "No restaurants found.\n");
    }

    #[test]
    fn test_listing_footer_reports_progress() {
        let listing = Listing::new(vec![create_test_restaurant("r1", "Bumi Bandung")], 5);
        let output = format!("{listing}");

        assert!(output.contains("Showing 1 of 5 restaurants."));
        assert!(output.contains("Load more to see the rest."));
    }

    #[test]
    fn test_listing_footer_when_fully_visible() {
        let listing = Listing::new(vec![create_test_restaurant("r1", "Bumi Bandung")], 1);
        let output = format!("{listing}");

        assert!(output.contains("Showing 1 of 1 restaurants."));
        assert!(!output.contains("Load more"));
    }

    #[test]
    fn test_listing_empty_state() {
        let listing = Listing::new(vec![], 0);
        assert_eq!(
            format!("{listing}"),
            "No restaurants match the current filters.\n"
        );
    }
}
