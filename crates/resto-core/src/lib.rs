//! Core library for the resto restaurant catalogue browser.
//!
//! This crate provides the browsing logic over a hosted restaurant
//! catalogue API: fetching the catalogue, client-side filtering and
//! pagination, on-demand detail records, and markdown formatting.
//!
//! # Architecture
//!
//! - **Domain Models** ([`models`]): restaurant summaries, detail records,
//!   and the filter state, deserialized and validated at the fetch boundary
//! - **Fetch Boundary** ([`api`]): the [`RestaurantSource`] trait and its
//!   HTTP implementation
//! - **Browser** ([`browser`]): the state machine tying filters,
//!   pagination, and detail fetches together
//! - **Display** ([`display`]): markdown formatting via Display impls and
//!   collection wrappers
//!
//! Filtering and pagination are pure: the catalogue is fetched once and
//! every visible page is re-derived from it. Only the two fetches touch
//! the network.
//!
//! # Quick Start
//!
//! ```rust
//! use resto_core::{models::PriceTier, BrowserBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a browser against the hosted catalogue
//! let mut browser = BrowserBuilder::new().build()?;
//! browser.load().await?;
//!
//! // Narrow the listing down and page through it
//! browser.set_open_now(true);
//! browser.set_price(Some(PriceTier::Upscale));
//! for restaurant in browser.visible() {
//!     println!("{}", restaurant.name);
//! }
//! browser.load_more();
//!
//! // Open one restaurant's detail view
//! let detail = browser.open_detail("rqdv5juczeskfw1e3").await?;
//! println!("{}", detail.description);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod browser;
pub mod display;
pub mod error;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use api::{RestaurantApi, RestaurantSource, DEFAULT_API_BASE};
pub use browser::{BrowserBuilder, RestaurantBrowser, INITIAL_PAGE_SIZE, LOAD_MORE_STEP};
pub use display::{Cards, Listing, PriceTag, Stars};
pub use error::{BrowseError, Result};
pub use models::{FilterState, PriceTier, Restaurant, RestaurantDetail, Review};
pub use params::{DetailRequest, ListingQuery};
