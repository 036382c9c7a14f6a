//! Overlay content requests.

use contracts::shared::lookup::{FilterPanel, ListingPage};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Listing rendered in the overlay.
pub async fn fetch_listing(href: &str) -> Result<ListingPage, String> {
    get_json(href).await
}

/// Filter panel of a listing.
pub async fn fetch_filters(href: &str) -> Result<FilterPanel, String> {
    get_json(href).await
}

async fn get_json<T: DeserializeOwned>(href: &str) -> Result<T, String> {
    let response = Request::get(href)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {} for {}", response.status(), href));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}
