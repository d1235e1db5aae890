// src/errors.rs
// DOCUMENTATION: Custom error types for the places search adapter
// PURPOSE: Centralized error handling for the entire crate

use std::fmt;
use thiserror::Error;

/// Category of a non-acceptable status string reported by the Places service
/// DOCUMENTATION: Lets callers branch on the failure kind without parsing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    /// OVER_QUERY_LIMIT: billing disabled or QPS exceeded
    OverQueryLimit,
    /// INVALID_REQUEST: malformed request
    InvalidRequest,
    /// REQUEST_DENIED: bad API key or client information
    RequestDenied,
    /// UNKNOWN_ERROR: generic service-side failure
    Unknown,
    /// Any status the service is not documented to return
    Unclassified,
}

impl StatusCategory {
    /// Human-readable hint appended after "<STATUS> error from service"
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            StatusCategory::OverQueryLimit => Some(
                "Billing might not be enabled in your account or you might have exceeded QPS limit",
            ),
            StatusCategory::InvalidRequest => Some("The API request is likely malformed"),
            StatusCategory::RequestDenied => {
                Some("Your API key or client information might be invalid")
            }
            StatusCategory::Unknown => None,
            StatusCategory::Unclassified => Some("Something is really wrong"),
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusCategory::OverQueryLimit => "over query limit",
            StatusCategory::InvalidRequest => "invalid request",
            StatusCategory::RequestDenied => "request denied",
            StatusCategory::Unknown => "unknown error",
            StatusCategory::Unclassified => "unclassified",
        };
        f.write_str(name)
    }
}

/// Application-specific error types
/// DOCUMENTATION: Every failure the search adapter and its transport can surface
#[derive(Error, Debug)]
pub enum SearchError {
    /// The service answered, but its own status code was not OK / ZERO_RESULTS
    #[error("{}", bad_response_message(.status, .category))]
    BadResponse {
        status: String,
        category: StatusCategory,
    },

    #[error("Missing field in service payload: {0}")]
    MissingField(String),

    #[error("Invalid field '{field}' in service payload: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("API error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl SearchError {
    /// Status category for `BadResponse`, `None` for every other variant
    pub fn category(&self) -> Option<StatusCategory> {
        match self {
            SearchError::BadResponse { category, .. } => Some(*category),
            _ => None,
        }
    }
}

fn bad_response_message(status: &str, category: &StatusCategory) -> String {
    match category.hint() {
        Some(hint) => format!("{} error from service. {}", status, hint),
        None => format!("{} error from service", status),
    }
}
