//! Mapping of decoded database records onto [`IpInfo`].

use maxminddb::geoip2;

use super::types::IpInfo;

/// Copies location data from a city record.
pub(crate) fn apply_city(info: &mut IpInfo, city: &geoip2::City<'_>) {
    info.country = city.country.names.english.map(str::to_string);
    info.iso_code = city.country.iso_code.map(str::to_string);
    info.in_eu = city.country.is_in_european_union.unwrap_or(false);
    info.city = city.city.names.english.map(str::to_string);
    info.region = city
        .subdivisions
        .first()
        .and_then(|subdivision| subdivision.names.english)
        .map(str::to_string);

    if let Some((latitude, longitude)) =
        coordinates(city.location.latitude, city.location.longitude)
    {
        info.latitude = Some(latitude);
        info.longitude = Some(longitude);
    }

    info.timezone = city.location.time_zone.map(str::to_string);
}

/// Copies network ownership from an ASN record.
pub(crate) fn apply_asn(info: &mut IpInfo, asn: &geoip2::Asn<'_>) {
    info.asn = asn.autonomous_system_number;
    info.organization = asn.autonomous_system_organization.map(str::to_string);
}

/// Pairs up a coordinate, keeping it only when both halves are known.
///
/// `(0.0, 0.0)` is treated as missing: existing clients rely on databases that
/// store it for "no location".
pub(crate) fn coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Option<(f64, f64)> {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) if lat != 0.0 || lon != 0.0 => Some((lat, lon)),
        _ => None,
    }
}
