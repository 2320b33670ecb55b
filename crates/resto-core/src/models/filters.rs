//! Client-side filter state and the pure filter engine.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Restaurant;

/// Price tiers selectable in the catalogue filter.
///
/// The catalogue data carries no real price field, so each tier maps to a
/// star-rating range instead. This is a quirk of the upstream data model and
/// is kept exactly as the service defines it, including the inclusive
/// overlap at ratings 3 and 4 (a rating of exactly 3 satisfies both
/// [`Casual`](PriceTier::Casual) and [`Moderate`](PriceTier::Moderate), and
/// a rating of exactly 4 satisfies both [`Moderate`](PriceTier::Moderate)
/// and [`Upscale`](PriceTier::Upscale)).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    /// `$`: rating at most 1
    Budget,

    /// `$$`: rating between 2 and 3
    Casual,

    /// `$$$`: rating between 3 and 4
    Moderate,

    /// `$$$$`: rating between 4 and 5
    Upscale,

    /// `$$$$$`: rating of at least 5
    Luxury,
}

impl PriceTier {
    /// Inclusive rating bounds for this tier.
    fn rating_bounds(self) -> (f64, f64) {
        match self {
            PriceTier::Budget => (0.0, 1.0),
            PriceTier::Casual => (2.0, 3.0),
            PriceTier::Moderate => (3.0, 4.0),
            PriceTier::Upscale => (4.0, 5.0),
            PriceTier::Luxury => (5.0, 5.0),
        }
    }

    /// Whether a rating falls inside this tier's range.
    ///
    /// Ranges are inclusive on both ends. Note that ratings strictly between
    /// 1 and 2 fall in the gap between `Budget` and `Casual` and match no
    /// tier at all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resto_core::models::PriceTier;
    ///
    /// assert!(PriceTier::Casual.matches(3.0));
    /// assert!(PriceTier::Moderate.matches(3.0));
    /// assert!(!PriceTier::Budget.matches(1.5));
    /// ```
    pub fn matches(self, rating: f64) -> bool {
        let (min, max) = self.rating_bounds();
        rating >= min && rating <= max
    }

    /// Dollar-sign representation of the tier (`$` through `$$$$$`).
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Budget => "$",
            PriceTier::Casual => "$$",
            PriceTier::Moderate => "$$$",
            PriceTier::Upscale => "$$$$",
            PriceTier::Luxury => "$$$$$",
        }
    }
}

impl FromStr for PriceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "$" => Ok(PriceTier::Budget),
            "$$" => Ok(PriceTier::Casual),
            "$$$" => Ok(PriceTier::Moderate),
            "$$$$" => Ok(PriceTier::Upscale),
            "$$$$$" => Ok(PriceTier::Luxury),
            _ => Err(format!("Invalid price tier: {s}")),
        }
    }
}

/// The full client-side filter selection.
///
/// The default state is all-inclusive: nothing is filtered out. Filters
/// compose by logical AND and are always evaluated against the full
/// catalogue, never against a previously filtered subset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Retain only restaurants that are currently open
    pub open_now: bool,

    /// Retain only restaurants whose rating falls in the tier's range
    pub price: Option<PriceTier>,

    /// Retain only restaurants in this city (exact, case-sensitive match)
    pub city: Option<String>,
}

impl FilterState {
    /// Whether any filter is active.
    pub fn is_active(&self) -> bool {
        self.open_now || self.price.is_some() || self.city.is_some()
    }

    /// Whether a single restaurant passes every active filter.
    pub fn retains(&self, restaurant: &Restaurant) -> bool {
        if self.open_now && !restaurant.open_now {
            return false;
        }
        if let Some(tier) = self.price {
            if !tier.matches(restaurant.rating) {
                return false;
            }
        }
        if let Some(city) = &self.city {
            if restaurant.city != *city {
                return false;
            }
        }
        true
    }

    /// Apply the filters to the full catalogue.
    ///
    /// Pure and side-effect free: the result is always a subset of
    /// `catalogue` in the catalogue's original order. No re-sorting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resto_core::models::{FilterState, Restaurant};
    ///
    /// let catalogue = vec![Restaurant {
    ///     id: "r1".to_string(),
    ///     name: "Warung Sederhana".to_string(),
    ///     city: "Bandung".to_string(),
    ///     rating: 4.2,
    ///     open_now: true,
    ///     picture_id: "12".to_string(),
    /// }];
    ///
    /// let filters = FilterState {
    ///     open_now: true,
    ///     ..Default::default()
    /// };
    /// assert_eq!(filters.apply(&catalogue).len(), 1);
    ///
    /// let filters = FilterState {
    ///     city: Some("Medan".to_string()),
    ///     ..Default::default()
    /// };
    /// assert!(filters.apply(&catalogue).is_empty());
    /// ```
    pub fn apply(&self, catalogue: &[Restaurant]) -> Vec<Restaurant> {
        catalogue
            .iter()
            .filter(|restaurant| self.retains(restaurant))
            .cloned()
            .collect()
    }
}
