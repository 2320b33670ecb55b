//! Error types for the browser library.

use thiserror::Error;

/// Comprehensive error type for all browser operations.
#[derive(Error, Debug)]
pub enum BrowseError {
    /// Network/transport errors while talking to the restaurant API
    #[error("Request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The API answered, but the payload is not the shape we expect
    #[error("Malformed response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },
    /// The API reported an application-level error in its envelope
    #[error("API error: {message}")]
    Api { message: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

/// Builder for creating fetch errors with their transport source.
pub struct FetchErrorBuilder {
    url: String,
}

impl FetchErrorBuilder {
    /// Create a new fetch error builder for a request URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Build the error with the given transport source.
    pub fn with_source(self, source: reqwest::Error) -> BrowseError {
        BrowseError::Fetch {
            url: self.url,
            source,
        }
    }
}

/// Builder for creating malformed-response errors.
pub struct MalformedResponseBuilder {
    endpoint: String,
}

impl MalformedResponseBuilder {
    /// Create a new malformed-response builder for an endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BrowseError {
        BrowseError::MalformedResponse {
            endpoint: self.endpoint,
            reason: reason.into(),
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BrowseError {
        BrowseError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BrowseError {
    /// Creates a builder for fetch errors.
    pub fn fetch(url: impl Into<String>) -> FetchErrorBuilder {
        FetchErrorBuilder::new(url)
    }

    /// Creates a builder for malformed-response errors.
    pub fn malformed(endpoint: impl Into<String>) -> MalformedResponseBuilder {
        MalformedResponseBuilder::new(endpoint)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Specialized extension trait for transport-related Results.
pub trait FetchResultExt<T> {
    /// Map transport errors, recording the URL that failed.
    fn fetch_context(self, url: &str) -> Result<T>;
}

/// Specialized extension trait for payload decoding Results.
pub trait DecodeResultExt<T> {
    /// Map decode errors, recording the endpoint whose payload was bad.
    fn decode_context(self, endpoint: &str) -> Result<T>;
}

impl<T> FetchResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn fetch_context(self, url: &str) -> Result<T> {
        self.map_err(|e| BrowseError::fetch(url).with_source(e))
    }
}

impl<T> DecodeResultExt<T> for std::result::Result<T, serde_json::Error> {
    fn decode_context(self, endpoint: &str) -> Result<T> {
        self.map_err(|e| BrowseError::malformed(endpoint).with_reason(e.to_string()))
    }
}

/// Result type alias for browser operations
pub type Result<T> = std::result::Result<T, BrowseError>;
