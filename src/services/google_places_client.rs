// src/services/google_places_client.rs
// DOCUMENTATION: Google Places API client
// PURPOSE: Handle communication with Google Places API (text search and place details)

use crate::errors::SearchError;
use crate::services::places_api::{PlaceDetailsResponse, PlacesApi, TextSearchResponse};
use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::time::Duration;

/// Fields requested from the details endpoint (only what enrichment consumes)
pub const DETAILS_FIELDS: &str = "website,formatted_phone_number,url";

/// Transport settings for GooglePlacesClient
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    /// Root of the Places endpoints, without trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Requests allowed per second
    pub queries_per_second: u32,
    /// Retries for transient failures
    pub max_retries: u32,
    /// Base backoff, doubled on each retry
    pub retry_delay: Duration,
}

impl ClientSettings {
    pub const DEFAULT_BASE_URL: &'static str = "https://maps.googleapis.com/maps/api/place";
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            queries_per_second: 60,
            max_retries: 3,
            retry_delay: Duration::from_millis(500),
        }
    }
}

/// Google Places API client
/// DOCUMENTATION: Handles authentication, rate limiting, retries and JSON decoding.
/// Service-level status strings are passed through untouched.
pub struct GooglePlacesClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Places API key
    api_key: String,
    /// Base URL for Google Places API
    base_url: String,
    /// Gate applied before every outgoing request
    limiter: DefaultDirectRateLimiter,
    max_retries: u32,
    retry_delay: Duration,
}

impl GooglePlacesClient {
    /// Create new Google Places API client with default settings
    pub fn new(api_key: String) -> Result<Self, SearchError> {
        Self::with_settings(api_key, ClientSettings::default())
    }

    /// Create a client with explicit transport settings
    /// DOCUMENTATION: A zero QPS setting is treated as one request per second
    pub fn with_settings(api_key: String, settings: ClientSettings) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| SearchError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        let qps = NonZeroU32::new(settings.queries_per_second).unwrap_or(NonZeroU32::MIN);

        Ok(Self {
            client,
            api_key,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            limiter: RateLimiter::direct(Quota::per_second(qps)),
            max_retries: settings.max_retries,
            retry_delay: settings.retry_delay,
        })
    }

    /// Get API key
    pub fn get_api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Backoff before retry number `attempt` (0-based)
    fn backoff(&self, attempt: u32) -> Duration {
        self.retry_delay
            .saturating_mul(2u32.saturating_pow(attempt))
    }

    /// GET `{base_url}/{endpoint}` with `params` plus the key, decoding the JSON body
    /// DOCUMENTATION: Retries 500/503/504 and connect/timeout errors up to max_retries.
    /// Errors are stripped of the request URL so the key never reaches logs.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, SearchError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let mut attempt = 0;

        loop {
            self.limiter.until_ready().await;

            let result = self
                .client
                .get(&url)
                .query(params)
                .query(&[("key", self.api_key.as_str())])
                .send()
                .await;

            match result {
                Ok(response) if response.status().is_success() => {
                    return response.json::<T>().await.map_err(|e| {
                        let e = e.without_url();
                        log::error!("Failed to parse Google Places response: {}", e);
                        SearchError::Parse(e.to_string())
                    });
                }
                Ok(response) => {
                    let status = response.status();
                    if is_retriable(status) && attempt < self.max_retries {
                        let delay = self.backoff(attempt);
                        log::warn!(
                            "Google Places {} returned {}, retrying in {:?} ({}/{})",
                            endpoint,
                            status,
                            delay,
                            attempt + 1,
                            self.max_retries
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    let body = response.text().await.unwrap_or_default();
                    log::error!("Google Places API error {}: {}", status, body);
                    return Err(SearchError::Http {
                        status: status.as_u16(),
                        body,
                    });
                }
                Err(e) => {
                    let e = e.without_url();
                    if (e.is_timeout() || e.is_connect()) && attempt < self.max_retries {
                        let delay = self.backoff(attempt);
                        log::warn!(
                            "Google Places {} request failed: {}, retrying in {:?}",
                            endpoint,
                            e,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    log::error!("Google Places API request failed: {}", e);
                    return Err(SearchError::Transport(e.to_string()));
                }
            }
        }
    }
}

fn is_retriable(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    )
}

#[async_trait]
impl PlacesApi for GooglePlacesClient {
    /// Perform text search for places
    async fn text_search(&self, query: &str) -> Result<TextSearchResponse, SearchError> {
        log::debug!("Google Places text search: query={}", query);

        let response: TextSearchResponse = self
            .get_json("textsearch/json", &[("query", query)])
            .await?;

        log::debug!(
            "Google Places text search status={} results={}",
            response.status,
            response.results.len()
        );
        Ok(response)
    }

    /// Get details for a specific place
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetailsResponse, SearchError> {
        log::debug!("Google Places details lookup: place_id={}", place_id);

        self.get_json(
            "details/json",
            &[("place_id", place_id), ("fields", DETAILS_FIELDS)],
        )
        .await
    }
}
