//! Field projection.
//!
//! Clients may ask for a subset of the record with repeated `return=<field>`
//! parameters. Names are matched case-insensitively; unknown names are ignored.

use std::str::FromStr;

use serde_json::{Map, Value};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use super::types::IpInfo;

/// A field that can be selected for projection.
///
/// `ip` and `attribution` are not listed: they are part of every projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Field {
    /// `hostname`
    Hostname,
    /// `country`
    Country,
    /// `iso_code`
    IsoCode,
    /// `in_eu`
    InEu,
    /// `city`
    City,
    /// `region`
    Region,
    /// `latitude`
    Latitude,
    /// `longitude`
    Longitude,
    /// `timezone`
    Timezone,
    /// `asn`
    Asn,
    /// `organization`
    Organization,
}

impl Field {
    /// Parses a client-supplied field name, ignoring case. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        Field::from_str(name).ok()
    }

    /// JSON key for this field.
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Current value of this field in `info`; absent values become `null`.
    pub fn value(self, info: &IpInfo) -> Value {
        match self {
            Field::Hostname => Value::from(info.hostname.clone()),
            Field::Country => Value::from(info.country.clone()),
            Field::IsoCode => Value::from(info.iso_code.clone()),
            Field::InEu => Value::Bool(info.in_eu),
            Field::City => Value::from(info.city.clone()),
            Field::Region => Value::from(info.region.clone()),
            Field::Latitude => Value::from(info.latitude),
            Field::Longitude => Value::from(info.longitude),
            Field::Timezone => Value::from(info.timezone.clone()),
            Field::Asn => Value::from(info.asn),
            Field::Organization => Value::from(info.organization.clone()),
        }
    }
}

impl IpInfo {
    /// Returns a reduced view holding `ip`, `attribution`, and each requested field.
    ///
    /// A requested field is included even when it has no value (as `null`), so
    /// clients can tell "asked for, but unknown" from "not asked for".
    pub fn filter_fields<S: AsRef<str>>(&self, fields: &[S]) -> Map<String, Value> {
        let mut result = Map::new();
        result.insert("ip".to_string(), Value::String(self.ip.clone()));
        result.insert(
            "attribution".to_string(),
            Value::String(self.attribution.clone()),
        );

        for field in fields.iter().filter_map(|name| Field::parse(name.as_ref())) {
            result.insert(field.key().to_string(), field.value(self));
        }

        result
    }
}
