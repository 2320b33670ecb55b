//! High-level browser API over the restaurant catalogue.
//!
//! This module provides the main [`RestaurantBrowser`] interface. The
//! browser is the central coordinator between the fetch boundary and the
//! pure filter/pagination logic:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ RestaurantBrowser│──▶│  FilterState +  │    │ RestaurantSource │
//! │  (this module)   │    │  DisplayState   │    │  (via api/)      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     State machine        Pure derivation        Network fetches
//! ```
//!
//! The catalogue is fetched once with [`RestaurantBrowser::load`] and never
//! mutated afterwards. Every filter change re-derives the visible subset
//! from that full catalogue and resets pagination to the first page; "load
//! more" widens the visible window in fixed steps. Detail records are
//! fetched on demand and shown in a modal-style view until dismissed.
//!
//! All mutation happens on whatever single task owns the browser; there is
//! no interior locking and no concurrent fetch coordination. If a caller
//! issues a second detail fetch before the first resolves, the last
//! response to arrive wins.

pub mod builder;
pub mod pagination;

#[cfg(test)]
mod tests;

pub use builder::BrowserBuilder;
pub use pagination::{DisplayState, INITIAL_PAGE_SIZE, LOAD_MORE_STEP};

use crate::{
    api::RestaurantSource,
    display::Listing,
    error::Result,
    models::{FilterState, PriceTier, Restaurant, RestaurantDetail},
};

/// Main browser interface over the restaurant catalogue.
///
/// Construct via [`BrowserBuilder`], then call [`load`](Self::load) once
/// before anything else; the other operations work purely on the loaded
/// state, except [`open_detail`](Self::open_detail) which fetches on
/// demand.
pub struct RestaurantBrowser {
    source: Box<dyn RestaurantSource>,
    catalogue: Vec<Restaurant>,
    filters: FilterState,
    filtered: Vec<Restaurant>,
    display: DisplayState,
    detail: Option<RestaurantDetail>,
    modal_open: bool,
}

impl RestaurantBrowser {
    /// Creates a new browser over the given source.
    pub(crate) fn new(source: Box<dyn RestaurantSource>) -> Self {
        Self {
            source,
            catalogue: Vec::new(),
            filters: FilterState::default(),
            filtered: Vec::new(),
            display: DisplayState::default(),
            detail: None,
            modal_open: false,
        }
    }

    /// Fetch the full catalogue and derive the first page.
    ///
    /// Returns the catalogue size. Meant to be called once at startup; the
    /// loaded collection is never mutated afterwards.
    pub async fn load(&mut self) -> Result<usize> {
        self.catalogue = self.source.list().await?;
        self.refresh();
        Ok(self.catalogue.len())
    }

    /// Re-derive the filtered list from the full catalogue and reset
    /// pagination to the first page.
    fn refresh(&mut self) {
        self.filtered = self.filters.apply(&self.catalogue);
        self.display.reset(self.filtered.len());
    }

    /// The currently active filters.
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Replace the whole filter selection.
    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.refresh();
    }

    /// Toggle or set the open-now filter.
    pub fn set_open_now(&mut self, open_now: bool) {
        self.filters.open_now = open_now;
        self.refresh();
    }

    /// Select or clear the price tier filter.
    pub fn set_price(&mut self, price: Option<PriceTier>) {
        self.filters.price = price;
        self.refresh();
    }

    /// Select or clear the city filter.
    pub fn set_city(&mut self, city: Option<String>) {
        self.filters.city = city;
        self.refresh();
    }

    /// Clear every filter and return to the first page of the catalogue.
    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        self.refresh();
    }

    /// Reveal the next page of the filtered list.
    ///
    /// Returns the new visible count. A no-op once every filtered entry is
    /// visible, and on an empty filtered list.
    pub fn load_more(&mut self) -> usize {
        self.display.load_more(self.filtered.len())
    }

    /// The currently visible slice of the filtered list.
    pub fn visible(&self) -> &[Restaurant] {
        &self.filtered[..self.display.visible()]
    }

    /// Number of currently visible entries.
    pub fn visible_count(&self) -> usize {
        self.display.visible()
    }

    /// Size of the filtered list.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Size of the full catalogue.
    pub fn catalogue_len(&self) -> usize {
        self.catalogue.len()
    }

    /// Listing wrapper over the visible slice, for display.
    pub fn listing(&self) -> Listing {
        Listing::new(self.visible().to_vec(), self.filtered.len())
    }

    /// Fetch a restaurant's detail record and open the modal view.
    ///
    /// No caching: requesting the same ID twice re-fetches. On failure the
    /// previous detail record and the modal flag are left untouched.
    pub async fn open_detail(&mut self, id: &str) -> Result<&RestaurantDetail> {
        let detail = self.source.detail(id).await?;
        self.modal_open = true;
        Ok(self.detail.insert(detail))
    }

    /// Dismiss the modal view.
    ///
    /// Only the visibility flag is cleared; the detail record is retained
    /// until the next fetch overwrites it.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Whether the modal view is currently open.
    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    /// The most recently fetched detail record, if any.
    pub fn detail(&self) -> Option<&RestaurantDetail> {
        self.detail.as_ref()
    }
}
