//! HTTP implementation of the restaurant source.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::RestaurantSource;
use crate::{
    error::{BrowseError, DecodeResultExt, FetchResultExt, Result},
    models::{Restaurant, RestaurantDetail},
};

/// Direct HTTP client for the restaurant catalogue API.
///
/// Thin wrapper over a shared [`reqwest::Client`]: one GET per operation,
/// no retries, no caching. The body is read as text first and decoded
/// separately so transport failures and malformed payloads surface as
/// distinct errors.
pub struct RestaurantApi {
    http: Client,
    base_url: String,
}

impl RestaurantApi {
    /// Create a client against the given API base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET a URL and return the response body, checking the HTTP status.
    async fn get_text(&self, url: &str) -> Result<String> {
        let resp = self.http.get(url).send().await.fetch_context(url)?;

        let status = resp.status();
        let text = resp.text().await.fetch_context(url)?;

        if !status.is_success() {
            return Err(BrowseError::Api {
                message: format!("{url} returned {status}: {}", snippet(&text)),
            });
        }

        Ok(text)
    }
}

#[async_trait]
impl RestaurantSource for RestaurantApi {
    async fn list(&self) -> Result<Vec<Restaurant>> {
        let url = format!("{}/list", self.base_url);
        let text = self.get_text(&url).await?;
        decode_list(&text)
    }

    async fn detail(&self, id: &str) -> Result<RestaurantDetail> {
        let url = format!("{}/detail/{id}", self.base_url);
        let text = self.get_text(&url).await?;
        decode_detail(&text)
    }
}

/// Envelope around the list payload.
///
/// The API wraps every response in `{error, message, ...}`. The data field
/// stays optional here so an `error: true` envelope (which omits it) is
/// reported as an API error, not a decode failure.
#[derive(Debug, Deserialize)]
struct ListEnvelope {
    #[serde(default)]
    error: bool,
    #[serde(default)]
    message: String,
    restaurants: Option<Vec<Restaurant>>,
}

/// Envelope around the detail payload.
#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    #[serde(default)]
    error: bool,
    #[serde(default)]
    message: String,
    restaurant: Option<RestaurantDetail>,
}

fn decode_list(text: &str) -> Result<Vec<Restaurant>> {
    let envelope: ListEnvelope = serde_json::from_str(text).decode_context("list")?;

    if envelope.error {
        return Err(BrowseError::Api {
            message: api_message(envelope.message),
        });
    }

    envelope
        .restaurants
        .ok_or_else(|| BrowseError::malformed("list").with_reason("missing `restaurants` field"))
}

fn decode_detail(text: &str) -> Result<RestaurantDetail> {
    let envelope: DetailEnvelope = serde_json::from_str(text).decode_context("detail")?;

    if envelope.error {
        return Err(BrowseError::Api {
            message: api_message(envelope.message),
        });
    }

    envelope
        .restaurant
        .ok_or_else(|| BrowseError::malformed("detail").with_reason("missing `restaurant` field"))
}

fn api_message(message: String) -> String {
    if message.is_empty() {
        "unspecified error".to_string()
    } else {
        message
    }
}

fn snippet(text: &str) -> &str {
    match text.char_indices().nth(200) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
