//! Lookup abstraction used by the HTTP layer.

use std::net::IpAddr;

use async_trait::async_trait;

use super::types::IpInfo;
use crate::error_handling::GeoError;

/// Something that can resolve an IP address to an [`IpInfo`].
///
/// Implemented by [`GeoReader`](super::GeoReader); handlers depend on this
/// trait so they can be exercised against an in-memory implementation.
#[async_trait]
pub trait GeoLookup: Send + Sync {
    /// Looks up `ip` in every configured source.
    ///
    /// A missing record is not an error: the returned info simply has fewer
    /// fields set.
    async fn lookup(&self, ip: IpAddr) -> Result<IpInfo, GeoError>;

    /// Whether lookups perform network requests (reverse DNS).
    fn online_features_enabled(&self) -> bool;

    /// Parses `ip` and looks it up.
    ///
    /// # Errors
    ///
    /// Returns `GeoError::InvalidIp` if `ip` is not an IPv4 or IPv6 address.
    async fn lookup_str(&self, ip: &str) -> Result<IpInfo, GeoError> {
        let addr: IpAddr = ip
            .parse()
            .map_err(|_| GeoError::InvalidIp(ip.to_string()))?;
        self.lookup(addr.to_canonical()).await
    }
}
