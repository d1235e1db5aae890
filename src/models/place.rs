// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Typed records produced from Places service search and details payloads

use serde::{Deserialize, Serialize};

/// Category tags reported for a place
/// DOCUMENTATION: The service normally returns an array, but a bare string is accepted too
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaceTypes {
    Single(String),
    Many(Vec<String>),
}

impl PlaceTypes {
    /// Tags as a slice-like iterator regardless of shape
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let tags: &[String] = match self {
            PlaceTypes::Single(tag) => std::slice::from_ref(tag),
            PlaceTypes::Many(tags) => tags,
        };
        tags.iter().map(String::as_str)
    }
}

/// One place returned by a text search
/// DOCUMENTATION: Built from a single raw search result; only the three
/// enrichment fields (website, phone, google_url) change afterwards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Place name
    pub name: String,

    /// Website URL (filled by enrichment)
    pub website: Option<String>,

    /// Formatted address
    pub address: Option<String>,

    /// Local phone number (filled by enrichment)
    pub phone: Option<String>,

    /// Average rating at search time
    pub rating: f64,

    /// Number of user ratings at search time
    pub ratings_count: u64,

    /// Google's unique place identifier, key for the details lookup
    pub place_id: String,

    /// Category tags (e.g., ["cafe", "food", "point_of_interest"])
    pub types: Option<PlaceTypes>,

    /// Google Maps listing URL (filled by enrichment)
    pub google_url: Option<String>,

    /// Business status (OPERATIONAL, CLOSED_TEMPORARILY, etc.)
    pub status: String,
}

impl Place {
    /// Overwrite the enrichment fields with a details lookup result
    /// DOCUMENTATION: Absent values overwrite with absent; search-time fields are untouched
    pub fn apply_details(&mut self, details: PlaceDetails) {
        self.website = details.website;
        self.phone = details.phone;
        self.google_url = details.google_url;
    }

    /// Whether any enrichment field holds a value
    /// DOCUMENTATION: Also false after a details lookup that returned nothing
    pub fn has_enrichment_data(&self) -> bool {
        self.website.is_some() || self.phone.is_some() || self.google_url.is_some()
    }
}

/// Fields fetched per place from the details endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub website: Option<String>,
    /// From `formatted_phone_number`
    pub phone: Option<String>,
    /// From `url`
    pub google_url: Option<String>,
}
