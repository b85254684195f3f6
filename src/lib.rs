//! ipwhere library: IP geolocation and ASN lookup over DB-IP databases
//!
//! This library opens a city database and an ASN database (MMDB format) and
//! merges both into one [`IpInfo`] record per address. An axum server exposes
//! the lookup over HTTP along with a small map frontend.
//!
//! # Example
//!
//! ```no_run
//! use ipwhere::{GeoLookup, GeoReader};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = GeoReader::open("data/dbip-city-lite.mmdb", "data/dbip-asn-lite.mmdb", false)?;
//!
//! let info = reader.lookup_str("8.8.8.8").await?;
//! println!("{} is in {:?}", info.ip, info.country);
//!
//! // Only keep the fields a client asked for
//! let projected = info.filter_fields(&["country", "asn"]);
//! println!("{}", serde_json::Value::Object(projected));
//!
//! reader.close().await;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Lookups are async so reverse DNS can
//! run without blocking a worker thread.

#![warn(missing_docs)]

pub mod config;
mod dns;
mod error_handling;
mod geoip;
pub mod initialization;
pub mod server;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{GeoError, InitializationError};
pub use geoip::{Field, GeoIpMetadata, GeoLookup, GeoReader, IpInfo, ATTRIBUTION};
