//! Data models for restaurants, details, and filters.
//!
//! This module contains the core domain models of the catalogue browser.
//! Display implementations for these models live in
//! [`crate::display::models`] to keep data structures separate from
//! presentation logic.
//!
//! Two kinds of types live here:
//!
//! 1. **Wire models** ([`Restaurant`], [`RestaurantDetail`], [`Review`]):
//!    deserialized straight from the API payloads, with serde renames for
//!    the camelCase fields the API uses.
//! 2. **Filter state** ([`FilterState`], [`PriceTier`]): the client-side
//!    filter selection, applied as a pure function over the full catalogue.
//!
//! The filter engine never mutates the catalogue and never filters a
//! previously filtered subset. Every application starts from the full
//! collection, so filter changes compose instead of accumulating.

pub mod detail;
pub mod filters;
pub mod restaurant;


// Re-export all public types at the models level
pub use detail::{RestaurantDetail, Review};
pub use filters::{FilterState, PriceTier};
pub use restaurant::Restaurant;
