//! GeoIP data structures.
//!
//! This module defines the lookup record returned to clients and the metadata
//! kept about each loaded database.

use std::net::IpAddr;
use std::time::SystemTime;

use serde::Serialize;

/// Attribution required by the DB-IP Lite license; included in every response.
pub const ATTRIBUTION: &str = "IP Geolocation by DB-IP (https://db-ip.com)";

/// Metadata about a loaded GeoIP database
#[derive(Debug, Clone, Serialize)]
pub struct GeoIpMetadata {
    /// Source path
    pub source: String,
    /// Database type as declared by the file (e.g. `DBIP-City-Lite`)
    pub database_type: String,
    /// Database build version (`build_<epoch>`)
    pub version: String,
    /// When the database was loaded
    pub loaded_at: SystemTime,
}

impl GeoIpMetadata {
    /// Load time as an RFC 3339 UTC timestamp, e.g. `2023-11-14T22:13:20Z`.
    pub fn loaded_at_rfc3339(&self) -> String {
        chrono::DateTime::<chrono::Utc>::from(self.loaded_at)
            .to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    }
}

/// Geolocation and network ownership of one IP address.
///
/// Built fresh for every lookup. Fields the databases have no value for are
/// left empty and omitted from the serialized JSON, except `ip` and
/// `attribution` which are always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IpInfo {
    /// Queried address in canonical text form
    pub ip: String,
    /// Reverse DNS name (online features only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Country name (English)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso_code: Option<String>,
    /// Whether the country is an EU member; omitted when false
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub in_eu: bool,
    /// City name (English)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// First subdivision name (English), e.g. a state or province
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Latitude; set only together with `longitude`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude; set only together with `latitude`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// IANA time zone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Autonomous system number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asn: Option<u32>,
    /// Autonomous system organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Data attribution, always [`ATTRIBUTION`]
    pub attribution: String,
}

impl IpInfo {
    /// Creates an empty record for `ip`: only the address and attribution are set.
    pub fn new(ip: IpAddr) -> Self {
        Self {
            ip: ip.to_string(),
            hostname: None,
            country: None,
            iso_code: None,
            in_eu: false,
            city: None,
            region: None,
            latitude: None,
            longitude: None,
            timezone: None,
            asn: None,
            organization: None,
            attribution: ATTRIBUTION.to_string(),
        }
    }
}
