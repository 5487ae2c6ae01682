//! Shoppable listing types for `POST /search-products`.

use serde::{Deserialize, Serialize};

use super::schema::{SchemaError, loose_count, loose_f64, non_blank, price};

/// Body of `POST /search-products`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub product_name: &'a str,
    pub max_results: u32,
}

#[derive(Deserialize)]
struct SearchResponse {
    success: bool,
    search_term: String,
    total_results: u32,
    products: Vec<ListingWire>,
}

#[derive(Deserialize)]
struct ListingWire {
    title: String,
    #[serde(deserialize_with = "price")]
    price: f64,
    #[serde(default)]
    currency: Option<String>,
    url: String,
    #[serde(default)]
    image: Option<String>,
    platform: String,
    #[serde(default, deserialize_with = "loose_f64")]
    rating: Option<f64>,
    #[serde(default, deserialize_with = "non_blank")]
    condition: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    source: Option<String>,
    #[serde(default, deserialize_with = "loose_count")]
    reviews: Option<u64>,
}

/// One listing from one shopping platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    pub price: f64,
    /// ISO currency code, `"USD"` when the platform gave none.
    pub currency: String,
    pub url: String,
    /// Thumbnail URL; empty when the platform gave none.
    pub image: String,
    /// Platform name ("eBay", "Amazon", "Google Shopping", ...).
    pub platform: String,
    pub rating: Option<f64>,
    pub condition: Option<String>,
    /// Merchant behind an aggregator listing.
    pub source: Option<String>,
    pub reviews: Option<u64>,
}

/// Shoppable listings for one product name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub search_term: String,
    pub total_count: u32,
    pub items: Vec<Listing>,
}

/// Outcome of parsing a `/search-products` body.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(SearchResult),
    /// The backend answered 2xx but reported `success: false`.
    Unsuccessful,
}

impl SearchResult {
    /// Parse and shape-check a `/search-products` response body.
    pub fn from_json(body: &str) -> Result<SearchOutcome, SchemaError> {
        let wire: SearchResponse = serde_json::from_str(body)?;
        if !wire.success {
            return Ok(SearchOutcome::Unsuccessful);
        }

        let items = wire
            .products
            .into_iter()
            .map(|l| Listing {
                title: l.title,
                price: l.price,
                currency: l
                    .currency
                    .filter(|c| !c.trim().is_empty())
                    .unwrap_or_else(|| "USD".to_string()),
                url: l.url,
                image: l.image.unwrap_or_default(),
                platform: l.platform,
                rating: l.rating,
                condition: l.condition,
                source: l.source,
                reviews: l.reviews,
            })
            .collect();

        Ok(SearchOutcome::Found(SearchResult {
            search_term: wire.search_term,
            total_count: wire.total_results,
            items,
        }))
    }
}
