//! Builder for creating and configuring browser instances.

use super::RestaurantBrowser;
use crate::{
    api::{RestaurantApi, RestaurantSource, DEFAULT_API_BASE},
    error::{BrowseError, Result},
};

/// Builder for creating and configuring [`RestaurantBrowser`] instances.
#[derive(Default)]
pub struct BrowserBuilder {
    base_url: Option<String>,
    source: Option<Box<dyn RestaurantSource>>,
}

impl BrowserBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            source: None,
        }
    }

    /// Sets a custom API base URL.
    ///
    /// If not specified, uses the hosted catalogue at
    /// [`DEFAULT_API_BASE`].
    pub fn with_base_url<S: Into<String>>(mut self, url: Option<S>) -> Self {
        if let Some(url) = url {
            self.base_url = Some(url.into());
        }
        self
    }

    /// Replaces the HTTP client with a custom source.
    ///
    /// Takes precedence over [`with_base_url`](Self::with_base_url). Used
    /// to inject in-memory sources in tests.
    pub fn with_source(mut self, source: Box<dyn RestaurantSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Builds the configured browser instance.
    ///
    /// No network traffic happens here; the catalogue is fetched by
    /// [`RestaurantBrowser::load`].
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::InvalidInput` if the base URL is blank.
    pub fn build(self) -> Result<RestaurantBrowser> {
        if let Some(source) = self.source {
            return Ok(RestaurantBrowser::new(source));
        }

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        if base_url.trim().is_empty() {
            return Err(BrowseError::invalid_input("base_url")
                .with_reason("API base URL must not be blank"));
        }

        Ok(RestaurantBrowser::new(Box::new(RestaurantApi::new(
            &base_url,
        ))))
    }
}
