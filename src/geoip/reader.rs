//! Geo lookup service backed by the city and ASN databases.

use std::net::IpAddr;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;
use maxminddb::{geoip2, Reader};
use tokio::sync::RwLock;

use super::lookup::GeoLookup;
use super::metadata::extract_metadata;
use super::records::{apply_asn, apply_city};
use super::types::{GeoIpMetadata, IpInfo};
use crate::config::REVERSE_DNS_TIMEOUT;
use crate::dns::reverse_dns_lookup;
use crate::error_handling::GeoError;
use crate::initialization::init_resolver;

struct Databases {
    city: Reader<Vec<u8>>,
    asn: Reader<Vec<u8>>,
}

/// Read-only lookup service over a city database and an ASN database.
///
/// Safe to share between tasks. Lookups hold a read lock on the databases
/// only while querying them, so any number can run at once; [`close`]
/// waits for those to finish and then releases the files.
///
/// [`close`]: GeoReader::close
pub struct GeoReader {
    databases: RwLock<Option<Databases>>,
    city_metadata: GeoIpMetadata,
    asn_metadata: GeoIpMetadata,
    resolver: Option<Arc<TokioAsyncResolver>>,
}

impl GeoReader {
    /// Opens both databases.
    ///
    /// With `enable_online_features`, lookups also resolve the reverse DNS
    /// name of each address.
    ///
    /// # Errors
    ///
    /// Returns `GeoError::OpenCityDatabase` or `GeoError::OpenAsnDatabase`
    /// naming the file that is missing or not a valid database. Nothing is
    /// left open on failure.
    pub fn open(
        city_path: impl AsRef<Path>,
        asn_path: impl AsRef<Path>,
        enable_online_features: bool,
    ) -> Result<Self, GeoError> {
        let city_path = city_path.as_ref();
        let asn_path = asn_path.as_ref();

        log::info!("Loading city database from: {}", city_path.display());
        let city = Reader::open_readfile(city_path).map_err(|source| {
            GeoError::OpenCityDatabase {
                path: city_path.to_path_buf(),
                source,
            }
        })?;

        log::info!("Loading ASN database from: {}", asn_path.display());
        let asn = Reader::open_readfile(asn_path).map_err(|source| GeoError::OpenAsnDatabase {
            path: asn_path.to_path_buf(),
            source,
        })?;

        let city_metadata = extract_metadata(&city, &city_path.to_string_lossy());
        let asn_metadata = extract_metadata(&asn, &asn_path.to_string_lossy());

        let resolver = if enable_online_features {
            log::info!("Online features enabled: reverse DNS lookups are on");
            Some(init_resolver())
        } else {
            None
        };

        Ok(Self {
            databases: RwLock::new(Some(Databases { city, asn })),
            city_metadata,
            asn_metadata,
            resolver,
        })
    }

    /// Metadata of the city database.
    pub fn city_metadata(&self) -> &GeoIpMetadata {
        &self.city_metadata
    }

    /// Metadata of the ASN database.
    pub fn asn_metadata(&self) -> &GeoIpMetadata {
        &self.asn_metadata
    }

    /// Releases both databases.
    ///
    /// Waits for lookups already reading the databases; lookups started after
    /// this returns fail with `GeoError::Closed`. Calling it again is a no-op.
    pub async fn close(&self) {
        let mut databases = self.databases.write().await;
        if databases.take().is_some() {
            log::info!("Geo databases closed");
        }
    }

    /// Returns `true` once [`close`](GeoReader::close) has run.
    pub async fn is_closed(&self) -> bool {
        self.databases.read().await.is_none()
    }

    async fn lookup_offline(&self, ip: IpAddr) -> Result<IpInfo, GeoError> {
        let guard = self.databases.read().await;
        let databases = guard.as_ref().ok_or(GeoError::Closed)?;

        let mut info = IpInfo::new(ip);

        match databases.city.lookup(ip) {
            Ok(result) if result.has_data() => match result.decode::<geoip2::City>() {
                Ok(Some(city)) => apply_city(&mut info, &city),
                Ok(None) => {}
                Err(e) => log::debug!("Failed to decode city record for {}: {}", ip, e),
            },
            Ok(_) => {}
            Err(e) => log::debug!("City lookup failed for {}: {}", ip, e),
        }

        match databases.asn.lookup(ip) {
            Ok(result) if result.has_data() => match result.decode::<geoip2::Asn>() {
                Ok(Some(asn)) => apply_asn(&mut info, &asn),
                Ok(None) => {}
                Err(e) => log::debug!("Failed to decode ASN record for {}: {}", ip, e),
            },
            Ok(_) => {}
            Err(e) => log::debug!("ASN lookup failed for {}: {}", ip, e),
        }

        Ok(info)
    }
}

#[async_trait]
impl GeoLookup for GeoReader {
    async fn lookup(&self, ip: IpAddr) -> Result<IpInfo, GeoError> {
        // IPv4-mapped IPv6 addresses live in the IPv4 part of the tree
        let ip = ip.to_canonical();

        // The read lock is released before reverse DNS so a slow name server
        // never delays close().
        let mut info = self.lookup_offline(ip).await?;

        if let Some(resolver) = &self.resolver {
            info.hostname = reverse_dns_lookup(ip, resolver, REVERSE_DNS_TIMEOUT).await;
        }

        Ok(info)
    }

    fn online_features_enabled(&self) -> bool {
        self.resolver.is_some()
    }
}
