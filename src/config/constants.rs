//! Configuration constants.
//!
//! Defaults, timeouts, and database discovery locations used throughout the service.

use std::time::Duration;

/// Default listen address. A bare `:PORT` binds every interface.
pub const DEFAULT_LISTEN_ADDR: &str = ":8080";

/// Host used when the listen address only names a port.
pub const DEFAULT_LISTEN_HOST: &str = "0.0.0.0";

// Network operation timeouts
/// DNS query timeout in seconds (per attempt, enforced by the resolver)
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Number of attempts the resolver makes before giving up
pub const DNS_ATTEMPTS: usize = 2;
/// Upper bound for a whole reverse DNS lookup, across all attempts.
/// The host resolver can hang, so the lookup is abandoned after this.
pub const REVERSE_DNS_TIMEOUT: Duration = Duration::from_secs(5);

/// Per-request timeout applied by the HTTP layer
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
/// How long browsers may cache a CORS preflight response
pub const CORS_MAX_AGE: Duration = Duration::from_secs(300);

// Database discovery
/// File name of the city/location database
pub const CITY_DB_FILE: &str = "dbip-city-lite.mmdb";
/// File name of the ASN/organization database
pub const ASN_DB_FILE: &str = "dbip-asn-lite.mmdb";
/// Data directory inside the container image
pub const CONTAINER_DATA_DIR: &str = "/app/data";
/// Data directory relative to the working directory (or the executable)
pub const LOCAL_DATA_DIR: &str = "data";
