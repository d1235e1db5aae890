// src/lib.rs
// DOCUMENTATION: Library root
// PURPOSE: Google Places text search adapter with optional per-place enrichment

pub mod config;
pub mod errors;
pub mod models;
pub mod services;

pub use config::{ApiKey, Config};
pub use errors::{SearchError, StatusCategory};
pub use models::{Place, PlaceDetails, PlaceTypes};
pub use services::{
    check_status, classify_status, ClientSettings, GooglePlacesClient, PlaceDetailsResponse,
    PlaceSearchClient, PlacesApi, TextSearchResponse,
};
