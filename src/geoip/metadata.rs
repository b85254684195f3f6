//! Metadata extraction for GeoIP databases.

use std::time::SystemTime;

use maxminddb::Reader;

use super::types::GeoIpMetadata;

/// Extracts metadata from a GeoIP database
pub(crate) fn extract_metadata<T: AsRef<[u8]>>(reader: &Reader<T>, source: &str) -> GeoIpMetadata {
    // MMDB files carry their build time as a unix epoch in the metadata section
    let version = format!("build_{}", reader.metadata.build_epoch);

    GeoIpMetadata {
        source: source.to_string(),
        database_type: reader.metadata.database_type.clone(),
        version,
        loaded_at: SystemTime::now(),
    }
}
