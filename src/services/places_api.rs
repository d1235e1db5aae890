// src/services/places_api.rs
// DOCUMENTATION: Boundary between the search adapter and the remote Places service
// PURPOSE: Raw response envelopes plus the trait every transport implements

use crate::errors::SearchError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope of a text search response
/// DOCUMENTATION: `results` entries stay untyped until PlaceSearchClient parses them
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TextSearchResponse {
    /// Service-level status (OK, ZERO_RESULTS, REQUEST_DENIED, ...)
    pub status: String,
    /// Raw result objects in service order
    #[serde(default)]
    pub results: Vec<Value>,
    /// Explanation supplied by the service alongside a bad status
    pub error_message: Option<String>,
    /// Continuation token for the next result page
    pub next_page_token: Option<String>,
}

/// Envelope of a place details response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlaceDetailsResponse {
    pub status: String,
    /// Raw result object, absent on most error statuses
    pub result: Option<Value>,
    pub error_message: Option<String>,
}

/// Remote Places service operations the adapter relies on
/// DOCUMENTATION: Implemented by GooglePlacesClient; tests substitute fakes here
#[async_trait]
pub trait PlacesApi: Send + Sync {
    /// Free-text place search
    async fn text_search(&self, query: &str) -> Result<TextSearchResponse, SearchError>;

    /// Detail lookup for one place id
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetailsResponse, SearchError>;
}
