// src/services/place_search.rs
// DOCUMENTATION: Place search adapter
// PURPOSE: Run a text search, validate the service status, map raw results into
// Place values and optionally enrich each one with a details lookup

use crate::config::{ApiKey, Config};
use crate::errors::SearchError;
use crate::models::{Place, PlaceDetails, PlaceTypes};
use crate::services::google_places_client::{ClientSettings, GooglePlacesClient};
use crate::services::places_api::PlacesApi;
use crate::services::status::{check_status, classify_status};
use serde_json::Value;

/// Search client bound to one query and one resolved API key
/// DOCUMENTATION: The key is resolved once at construction. All remote calls run
/// strictly one after another; enrichment issues details calls in result order.
pub struct PlaceSearchClient<A = GooglePlacesClient> {
    api: A,
    api_key: String,
    query: String,
}

impl PlaceSearchClient<GooglePlacesClient> {
    /// Create a client backed by the Google Places web service
    /// DOCUMENTATION: `key` is a literal string or an `ApiKey::provider` closure
    pub fn new(query: impl Into<String>, key: impl Into<ApiKey>) -> Result<Self, SearchError> {
        Self::with_api(query, key, |api_key| {
            GooglePlacesClient::with_settings(api_key.to_string(), ClientSettings::default())
        })
    }

    /// Create a client whose key and transport settings come from Config
    pub fn from_config(query: impl Into<String>, config: &Config) -> Result<Self, SearchError> {
        let settings = config.client_settings();
        Self::with_api(query, config.google_places_api_key.clone(), move |api_key| {
            GooglePlacesClient::with_settings(api_key.to_string(), settings)
        })
    }
}

impl<A: PlacesApi> PlaceSearchClient<A> {
    /// Create a client over any PlacesApi implementation
    /// DOCUMENTATION: Resolves `key`, rejects an empty result, then hands the key
    /// to `build` so the transport is bound to it
    pub fn with_api<F>(
        query: impl Into<String>,
        key: impl Into<ApiKey>,
        build: F,
    ) -> Result<Self, SearchError>
    where
        F: FnOnce(&str) -> Result<A, SearchError>,
    {
        let api_key = key.into().resolve();
        if api_key.trim().is_empty() {
            return Err(SearchError::InvalidInput(
                "API key must not be empty".to_string(),
            ));
        }

        let api = build(&api_key)?;

        Ok(Self {
            api,
            api_key,
            query: query.into(),
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Run the text search for the stored query
    /// DOCUMENTATION: Returns one Place per raw result in service order. With
    /// `fetch_additional`, every place is enriched before returning; the first
    /// failing details call aborts the whole search.
    pub async fn search(&self, fetch_additional: bool) -> Result<Vec<Place>, SearchError> {
        log::debug!("Place search: query={}", self.query);

        let response = self.api.text_search(&self.query).await?;
        log_bad_status("text search", &response.status, response.error_message.as_deref());
        check_status(&response.status, true)?;

        let mut places = parse_places(&response.results)?;
        log::info!(
            "Place search for '{}' returned {} results",
            self.query,
            places.len()
        );

        if fetch_additional {
            self.update_details(&mut places).await?;
        }

        Ok(places)
    }

    /// Fetch website, phone and listing URL for one place
    pub async fn fetch_details(&self, place_id: &str) -> Result<PlaceDetails, SearchError> {
        if place_id.is_empty() {
            return Err(SearchError::InvalidInput(
                "place_id must not be empty".to_string(),
            ));
        }

        let response = self.api.place_details(place_id).await?;
        log_bad_status("details", &response.status, response.error_message.as_deref());
        check_status(&response.status, true)?;

        let result = response
            .result
            .ok_or_else(|| SearchError::MissingField("result".to_string()))?;

        parse_details(&result)
    }

    /// Enrich places in order with their details
    /// DOCUMENTATION: Stops at the first failure; places before it stay enriched,
    /// places after it are left untouched
    pub async fn update_details(&self, places: &mut [Place]) -> Result<(), SearchError> {
        for place in places.iter_mut() {
            let details = self.fetch_details(&place.place_id).await?;
            place.apply_details(details);
        }

        log::debug!("Enriched {} places with details", places.len());
        Ok(())
    }
}

fn log_bad_status(endpoint: &str, status: &str, error_message: Option<&str>) {
    if let Err(category) = classify_status(status) {
        log::error!(
            "Places {} returned {} ({}): {}",
            endpoint,
            status,
            category,
            error_message.unwrap_or("no error message")
        );
    }
}

/// Map raw search results into places, preserving order
pub fn parse_places(results: &[Value]) -> Result<Vec<Place>, SearchError> {
    results.iter().map(parse_place).collect()
}

/// Map one raw search result into a Place with empty enrichment fields
pub fn parse_place(result: &Value) -> Result<Place, SearchError> {
    let place_id = required_str(result, "place_id")?;
    if place_id.is_empty() {
        return Err(invalid_field("place_id", "must not be empty"));
    }

    Ok(Place {
        name: required_str(result, "name")?,
        website: None,
        address: optional_str(result, "formatted_address")?,
        phone: None,
        rating: required(result, "rating")?
            .as_f64()
            .ok_or_else(|| invalid_field("rating", "expected a number"))?,
        ratings_count: required(result, "user_ratings_total")?
            .as_u64()
            .ok_or_else(|| invalid_field("user_ratings_total", "expected a non-negative integer"))?,
        place_id,
        types: optional_types(result)?,
        google_url: None,
        status: required_str(result, "business_status")?,
    })
}

/// Map a raw details result; every field is optional
pub fn parse_details(result: &Value) -> Result<PlaceDetails, SearchError> {
    Ok(PlaceDetails {
        website: optional_str(result, "website")?,
        phone: optional_str(result, "formatted_phone_number")?,
        google_url: optional_str(result, "url")?,
    })
}

fn required<'a>(result: &'a Value, field: &str) -> Result<&'a Value, SearchError> {
    match result.get(field) {
        None | Some(Value::Null) => Err(SearchError::MissingField(field.to_string())),
        Some(value) => Ok(value),
    }
}

fn required_str(result: &Value, field: &str) -> Result<String, SearchError> {
    required(result, field)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid_field(field, "expected a string"))
}

fn optional_str(result: &Value, field: &str) -> Result<Option<String>, SearchError> {
    match result.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(invalid_field(field, "expected a string")),
    }
}

fn optional_types(result: &Value) -> Result<Option<PlaceTypes>, SearchError> {
    match result.get("types") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|_| invalid_field("types", "expected a string or an array of strings")),
    }
}

fn invalid_field(field: &str, reason: &str) -> SearchError {
    SearchError::InvalidField {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
