//! Server state and response bodies.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::geoip::{GeoLookup, ATTRIBUTION};

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Lookup service backing `/api/ip`
    pub geo: Arc<dyn GeoLookup>,
}

impl AppState {
    /// Wraps a lookup service for use by the router.
    pub fn new(geo: Arc<dyn GeoLookup>) -> Self {
        Self { geo }
    }
}

/// JSON body for failed `/api/ip` requests
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Data attribution, always present
    pub attribution: &'static str,
}

impl ErrorResponse {
    /// Creates an error body with the standard attribution.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            attribution: ATTRIBUTION,
        }
    }
}

/// JSON response for `/api/features`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesResponse {
    /// Whether reverse DNS lookups are enabled
    pub online_features: bool,
}

/// JSON response for `/health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok`
    pub status: &'static str,
}

/// JSON response for `/api/debug`
///
/// Proxy header fields are empty strings when the header is missing.
#[derive(Debug, Serialize)]
#[allow(missing_docs)]
pub struct DebugResponse {
    #[serde(rename = "remoteAddr")]
    pub remote_addr: String,
    pub host: String,
    #[serde(rename = "requestURI")]
    pub request_uri: String,
    /// First value of every request header
    pub headers: BTreeMap<String, String>,
    #[serde(rename = "xForwardedFor")]
    pub x_forwarded_for: String,
    #[serde(rename = "xRealIP")]
    pub x_real_ip: String,
    #[serde(rename = "xAzureClientIP")]
    pub x_azure_client_ip: String,
    #[serde(rename = "xOriginalHost")]
    pub x_original_host: String,
    #[serde(rename = "xClientIP")]
    pub x_client_ip: String,
    #[serde(rename = "cfConnectingIP")]
    pub cf_connecting_ip: String,
    #[serde(rename = "trueClientIP")]
    pub true_client_ip: String,
    #[serde(rename = "forwardedHeader")]
    pub forwarded_header: String,
    #[serde(rename = "detectedClientIP")]
    pub detected_client_ip: String,
}
