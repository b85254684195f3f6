//! IP geolocation and network ownership lookup.
//!
//! Two read-only MMDB databases are consulted for every address: a city
//! database (country, city, region, coordinates, time zone) and an ASN
//! database (autonomous system number and organization). With online
//! features enabled a reverse DNS name is added as well.
//!
//! Results can be projected down to a caller-chosen set of [`Field`]s.

mod fields;
mod lookup;
mod metadata;
mod reader;
mod records;
mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export public API
pub use fields::Field;
pub use lookup::GeoLookup;
pub use reader::GeoReader;
pub use types::{GeoIpMetadata, IpInfo, ATTRIBUTION};
