// src/services/status.rs
// DOCUMENTATION: Places service status protocol
// PURPOSE: Interpret the status string both endpoints return inside the JSON body

use crate::errors::{SearchError, StatusCategory};

/// Classify a service status string
/// DOCUMENTATION: Ok for OK / ZERO_RESULTS, the failure category otherwise
pub fn classify_status(status: &str) -> Result<(), StatusCategory> {
    match status {
        "OK" | "ZERO_RESULTS" => Ok(()),
        "OVER_QUERY_LIMIT" => Err(StatusCategory::OverQueryLimit),
        "INVALID_REQUEST" => Err(StatusCategory::InvalidRequest),
        "REQUEST_DENIED" => Err(StatusCategory::RequestDenied),
        "UNKNOWN_ERROR" => Err(StatusCategory::Unknown),
        _ => Err(StatusCategory::Unclassified),
    }
}

/// Check a service status string
/// DOCUMENTATION: Acceptable statuses yield `Ok(true)`. A bad status yields
/// `Err(SearchError::BadResponse)` when `raise_on_bad` is set, `Ok(false)` otherwise.
pub fn check_status(status: &str, raise_on_bad: bool) -> Result<bool, SearchError> {
    match classify_status(status) {
        Ok(()) => Ok(true),
        Err(category) if raise_on_bad => Err(SearchError::BadResponse {
            status: status.to_string(),
            category,
        }),
        Err(_) => Ok(false),
    }
}
