// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod google_places_client;
pub mod place_search;
pub mod places_api;
pub mod status;

pub use google_places_client::*;
pub use place_search::*;
pub use places_api::*;
pub use status::*;
