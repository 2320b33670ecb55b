//! The fetch boundary to the remote restaurant API.
//!
//! Everything the browser knows about the network lives behind the
//! [`RestaurantSource`] trait: one call to fetch the full catalogue, one
//! call to fetch a single restaurant's detail record. The default
//! implementation, [`RestaurantApi`], talks HTTP via reqwest; tests inject
//! an in-memory source instead.
//!
//! Payload validation happens here, at the boundary. Responses that are
//! missing expected fields are rejected with
//! [`BrowseError::MalformedResponse`](crate::error::BrowseError) rather than
//! letting half-typed data leak into the rest of the crate.

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{Restaurant, RestaurantDetail},
};

pub mod client;
pub mod images;

pub use client::RestaurantApi;

/// Base URL of the hosted restaurant catalogue API.
pub const DEFAULT_API_BASE: &str = "https://restaurant-api.dicoding.dev";

/// A source of restaurant data.
///
/// The two fetches are independent, fire-and-forget requests with no
/// caching, retry, or cancellation. Failures propagate to the caller.
#[async_trait]
pub trait RestaurantSource: Send + Sync {
    /// Fetch the full restaurant catalogue, in the source's order.
    async fn list(&self) -> Result<Vec<Restaurant>>;

    /// Fetch the extended record for a single restaurant by ID.
    async fn detail(&self, id: &str) -> Result<RestaurantDetail>;
}
