//! Error type definitions.
//!
//! Only configuration problems are fatal. Per-lookup anomalies (no match, a
//! failed reverse DNS lookup) never surface as errors; they leave fields unset.

use std::path::PathBuf;

use log::SetLoggerError;
use maxminddb::MaxMindDbError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors raised by the geo lookup service.
#[derive(Error, Debug)]
pub enum GeoError {
    /// The city/location database could not be opened or parsed.
    #[error("failed to open city database {}: {source}", .path.display())]
    OpenCityDatabase {
        /// Path that was opened
        path: PathBuf,
        /// Underlying reader error
        #[source]
        source: MaxMindDbError,
    },

    /// The ASN/organization database could not be opened or parsed.
    #[error("failed to open ASN database {}: {source}", .path.display())]
    OpenAsnDatabase {
        /// Path that was opened
        path: PathBuf,
        /// Underlying reader error
        #[source]
        source: MaxMindDbError,
    },

    /// The input is not an IPv4 or IPv6 address.
    #[error("invalid IP address: {0:?}")]
    InvalidIp(String),

    /// The databases were released by `close()`.
    #[error("geo databases are closed")]
    Closed,
}

impl GeoError {
    /// Returns `true` when the caller sent bad input rather than the service failing.
    pub fn is_client_error(&self) -> bool {
        matches!(self, GeoError::InvalidIp(_))
    }
}
