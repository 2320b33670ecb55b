//! Parameter structures for browser operations
//!
//! Shared parameter structures that can be used across different interfaces
//! (CLI today, other frontends later) without framework-specific derives.
//! Interface layers define their own wrapper structs with the
//! framework-specific attributes (clap derives, value enums) and convert
//! into these via `From`/`Into`, keeping the core free of UI concerns.

use serde::{Deserialize, Serialize};

use crate::models::{FilterState, PriceTier};

/// Parameters for a catalogue listing query.
///
/// Mirrors the user-facing filter controls: the open-now toggle, the price
/// tier selector, and the city selector. Converts into a [`FilterState`]
/// for the filter engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Retain only restaurants that are currently open
    #[serde(default)]
    pub open_now: bool,
    /// Optional price tier to filter by
    pub price: Option<PriceTier>,
    /// Optional city to filter by (exact match)
    pub city: Option<String>,
}

impl From<&ListingQuery> for FilterState {
    /// Convert listing parameters into filter state for the engine.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resto_core::{models::FilterState, params::ListingQuery};
    ///
    /// let query = ListingQuery {
    ///     open_now: true,
    ///     price: None,
    ///     city: Some("Bandung".to_string()),
    /// };
    /// let filters: FilterState = (&query).into();
    /// assert!(filters.open_now);
    /// assert_eq!(filters.city.as_deref(), Some("Bandung"));
    /// ```
    fn from(query: &ListingQuery) -> Self {
        FilterState {
            open_now: query.open_now,
            price: query.price,
            city: query.city.clone(),
        }
    }
}

/// Parameters for fetching one restaurant's detail record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailRequest {
    /// The ID of the restaurant to fetch
    pub id: String,
}
