//! Tests for the browser module.

use std::collections::HashMap;

use async_trait::async_trait;

use super::*;
use crate::{
    api::RestaurantSource,
    error::{BrowseError, Result},
    models::{PriceTier, Restaurant, RestaurantDetail, Review},
};

/// In-memory source standing in for the HTTP API.
struct FakeSource {
    restaurants: Vec<Restaurant>,
    details: HashMap<String, RestaurantDetail>,
}

#[async_trait]
impl RestaurantSource for FakeSource {
    async fn list(&self) -> Result<Vec<Restaurant>> {
        Ok(self.restaurants.clone())
    }

    async fn detail(&self, id: &str) -> Result<RestaurantDetail> {
        self.details
            .get(id)
            .cloned()
            .ok_or_else(|| BrowseError::Api {
                message: format!("restaurant {id} not found"),
            })
    }
}

fn restaurant(id: &str, name: &str, city: &str, rating: f64, open_now: bool) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        rating,
        open_now,
        picture_id: "14".to_string(),
    }
}

/// Ten restaurants, three of them open, cities spread across the fixed set.
fn sample_catalogue() -> Vec<Restaurant> {
    vec![
        restaurant("r01", "Melting Pot", "Medan", 4.2, true),
        restaurant("r02", "Kafe Kita", "Gorontalo", 4.0, false),
        restaurant("r03", "Bring Your Phone", "Surabaya", 3.0, false),
        restaurant("r04", "Kafein", "Aceh", 1.0, false),
        restaurant("r05", "Istana Emas", "Balikpapan", 4.5, true),
        restaurant("r06", "Bumi Bandung", "Bandung", 5.0, false),
        restaurant("r07", "Saya Suka", "Bandung", 2.2, false),
        restaurant("r08", "Gigitan Cepat", "Medan", 3.8, false),
        restaurant("r09", "Drama Koffie", "Surabaya", 4.7, true),
        restaurant("r10", "Fairy Cafe", "Bandung", 2.9, false),
    ]
}

fn sample_detail() -> RestaurantDetail {
    RestaurantDetail {
        id: "rqdv5juczeskfw1e3".to_string(),
        name: "Melting Pot".to_string(),
        city: "Medan".to_string(),
        rating: 4.2,
        open_now: true,
        picture_id: "14".to_string(),
        description: "Quisque rutrum. Aenean imperdiet.".to_string(),
        reviews: vec![
            Review {
                name: "Ahmad".to_string(),
                review: "Tidak rekomendasi untuk pelajar!".to_string(),
            },
            Review {
                name: "Gilang".to_string(),
                review: "Harganya murah sekali!".to_string(),
            },
            Review {
                name: "Arif".to_string(),
                review: "Saya sangat suka menu malamnya!".to_string(),
            },
        ],
    }
}

/// Helper to build a browser over the sample catalogue, already loaded.
async fn create_test_browser() -> RestaurantBrowser {
    let mut details = HashMap::new();
    details.insert("rqdv5juczeskfw1e3".to_string(), sample_detail());

    let source = FakeSource {
        restaurants: sample_catalogue(),
        details,
    };
    let mut browser = BrowserBuilder::new()
        .with_source(Box::new(source))
        .build()
        .expect("Failed to build browser");
    browser.load().await.expect("Failed to load catalogue");
    browser
}

#[tokio::test]
async fn test_load_shows_first_page() {
    let browser = create_test_browser().await;

    assert_eq!(browser.catalogue_len(), 10);
    assert_eq!(browser.filtered_len(), 10);
    assert_eq!(browser.visible_count(), 8);
    assert_eq!(browser.visible()[0].id, "r01");
    assert_eq!(browser.visible()[7].id, "r08");
}

#[tokio::test]
async fn test_load_more_reveals_rest_and_caps() {
    let mut browser = create_test_browser().await;

    assert_eq!(browser.load_more(), 10);
    // Idempotent once everything is visible
    assert_eq!(browser.load_more(), 10);
    assert_eq!(browser.load_more(), 10);
    assert_eq!(browser.visible().len(), 10);
}

#[tokio::test]
async fn test_open_now_filter_keeps_original_order() {
    let mut browser = create_test_browser().await;

    browser.set_open_now(true);

    let ids: Vec<&str> = browser.visible().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r01", "r05", "r09"]);
}

#[tokio::test]
async fn test_filter_change_resets_pagination() {
    let mut browser = create_test_browser().await;

    browser.load_more();
    assert_eq!(browser.visible_count(), 10);

    // Any filter change snaps back to the first page of the new list
    browser.set_city(Some("Bandung".to_string()));
    assert_eq!(browser.filtered_len(), 3);
    assert_eq!(browser.visible_count(), 3);

    browser.set_city(None);
    assert_eq!(browser.visible_count(), 8);
}

#[tokio::test]
async fn test_filters_derive_from_full_catalogue() {
    let mut browser = create_test_browser().await;

    // Narrow down to a single open restaurant, then switch the city;
    // the result must come from the full catalogue, not the narrow subset.
    browser.set_open_now(true);
    browser.set_city(Some("Medan".to_string()));
    assert_eq!(browser.filtered_len(), 1);

    browser.set_open_now(false);
    let ids: Vec<&str> = browser.visible().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r01", "r08"]);
}

#[tokio::test]
async fn test_city_filter_ignores_other_prior_state() {
    let mut browser = create_test_browser().await;

    browser.set_price(Some(PriceTier::Upscale));
    browser.load_more();
    browser.set_price(None);
    browser.set_city(Some("Bandung".to_string()));

    assert!(browser.visible().iter().all(|r| r.city == "Bandung"));
    assert_eq!(browser.filtered_len(), 3);
}

#[tokio::test]
async fn test_overlapping_tier_boundary_through_browser() {
    let mut browser = create_test_browser().await;

    // r03 has rating exactly 3 and must appear in both adjacent tiers
    browser.set_price(Some(PriceTier::Casual));
    assert!(browser.visible().iter().any(|r| r.id == "r03"));

    browser.set_price(Some(PriceTier::Moderate));
    assert!(browser.visible().iter().any(|r| r.id == "r03"));
}

#[tokio::test]
async fn test_empty_filtered_list() {
    let mut browser = create_test_browser().await;

    browser.set_city(Some("Jakarta".to_string()));

    assert_eq!(browser.filtered_len(), 0);
    assert_eq!(browser.visible_count(), 0);
    assert!(browser.visible().is_empty());
    assert_eq!(browser.load_more(), 0);
}

#[tokio::test]
async fn test_clear_filters_restores_first_page() {
    let mut browser = create_test_browser().await;

    browser.set_open_now(true);
    browser.set_price(Some(PriceTier::Upscale));
    browser.set_city(Some("Medan".to_string()));
    browser.clear_filters();

    assert!(!browser.filters().is_active());
    assert_eq!(browser.filtered_len(), 10);
    assert_eq!(browser.visible_count(), 8);
}

#[tokio::test]
async fn test_open_detail_raises_modal_with_ordered_reviews() {
    let mut browser = create_test_browser().await;

    let detail = browser
        .open_detail("rqdv5juczeskfw1e3")
        .await
        .expect("Failed to fetch detail");

    let reviewers: Vec<&str> = detail.reviews.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(reviewers, vec!["Ahmad", "Gilang", "Arif"]);
    assert!(browser.modal_open());
}

#[tokio::test]
async fn test_close_modal_retains_detail_record() {
    let mut browser = create_test_browser().await;

    browser
        .open_detail("rqdv5juczeskfw1e3")
        .await
        .expect("Failed to fetch detail");
    browser.close_modal();

    assert!(!browser.modal_open());
    // The record stays around until the next fetch overwrites it
    assert!(browser.detail().is_some());
}

#[tokio::test]
async fn test_open_detail_failure_leaves_modal_closed() {
    let mut browser = create_test_browser().await;

    let result = browser.open_detail("missing-id").await;

    assert!(matches!(result, Err(BrowseError::Api { .. })));
    assert!(!browser.modal_open());
    assert!(browser.detail().is_none());
}

#[tokio::test]
async fn test_listing_reports_visible_and_total() {
    let mut browser = create_test_browser().await;

    browser.set_open_now(true);
    let listing = browser.listing();

    let output = format!("{listing}");
    assert!(output.contains("Melting Pot"));
    assert!(output.contains("Showing 3 of 3 restaurants."));
}
