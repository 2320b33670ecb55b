//! Display formatting for catalogue output.
//!
//! This module renders domain models as markdown for the terminal. Direct
//! [`std::fmt::Display`] implementations on the models live in
//! [`models`]; newtype wrappers for collections and the paged listing live
//! in [`collections`]; the star/price glyph rows live in [`stars`].
//!
//! The same separation as the data layer applies here: models know their
//! own card/detail formats, wrappers add the surrounding structure (empty
//! states, "Showing X of Y" footers) without duplicating any model
//! formatting.

pub mod collections;
pub mod models;
pub mod stars;

// Re-export commonly used types for convenience
pub use collections::{Cards, Listing};
pub use stars::{PriceTag, Stars};
