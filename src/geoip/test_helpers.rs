//! Shared test helpers for geoip module tests.
//!
//! Builds small in-memory MMDB databases so lookups can be exercised without
//! shipping real database files. Only IPv4 trees with 24-bit records are
//! produced, which is all the tests need.

use std::net::Ipv4Addr;
use std::path::PathBuf;

use tempfile::TempDir;

const METADATA_MARKER: &[u8] = b"\xAB\xCD\xEFMaxMind.com";
const DATA_SECTION_SEPARATOR: usize = 16;

/// A value in the MMDB data section format.
#[derive(Debug, Clone)]
pub enum MmdbValue {
    Str(&'static str),
    Double(f64),
    U16(u16),
    U32(u32),
    U64(u64),
    Bool(bool),
    Array(Vec<MmdbValue>),
    Map(Vec<(&'static str, MmdbValue)>),
}

impl MmdbValue {
    fn encode(&self, out: &mut Vec<u8>) {
        match self {
            MmdbValue::Str(s) => {
                write_control(out, 2, s.len());
                out.extend_from_slice(s.as_bytes());
            }
            MmdbValue::Double(v) => {
                write_control(out, 3, 8);
                out.extend_from_slice(&v.to_be_bytes());
            }
            MmdbValue::U16(v) => write_uint(out, 5, u64::from(*v)),
            MmdbValue::U32(v) => write_uint(out, 6, u64::from(*v)),
            MmdbValue::U64(v) => write_uint(out, 9, *v),
            MmdbValue::Bool(v) => write_control(out, 14, usize::from(*v)),
            MmdbValue::Array(items) => {
                write_control(out, 11, items.len());
                for item in items {
                    item.encode(out);
                }
            }
            MmdbValue::Map(entries) => {
                write_control(out, 7, entries.len());
                for (key, value) in entries {
                    MmdbValue::Str(key).encode(out);
                    value.encode(out);
                }
            }
        }
    }
}

fn write_control(out: &mut Vec<u8>, type_id: u8, size: usize) {
    let (size_bits, extra): (u8, Vec<u8>) = if size < 29 {
        (size as u8, Vec::new())
    } else if size < 29 + 256 {
        (29, vec![(size - 29) as u8])
    } else {
        panic!("test values are kept short");
    };

    if type_id <= 7 {
        out.push((type_id << 5) | size_bits);
    } else {
        out.push(size_bits);
        out.push(type_id - 7);
    }
    out.extend_from_slice(&extra);
}

fn write_uint(out: &mut Vec<u8>, type_id: u8, value: u64) {
    let bytes = value.to_be_bytes();
    let skip = bytes.iter().take_while(|b| **b == 0).count();
    write_control(out, type_id, bytes.len() - skip);
    out.extend_from_slice(&bytes[skip..]);
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Empty,
    Node(usize),
    Data(usize),
}

/// Builds an IPv4 MMDB file from non-overlapping networks.
pub struct MmdbBuilder {
    database_type: &'static str,
    networks: Vec<(Ipv4Addr, u8, MmdbValue)>,
}

impl MmdbBuilder {
    pub fn new(database_type: &'static str) -> Self {
        Self {
            database_type,
            networks: Vec::new(),
        }
    }

    /// Maps `network/prefix_len` to `record`.
    pub fn insert(mut self, network: &str, prefix_len: u8, record: MmdbValue) -> Self {
        assert!((1..=32).contains(&prefix_len));
        let network = network.parse().expect("valid IPv4 network");
        self.networks.push((network, prefix_len, record));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut nodes: Vec<[Slot; 2]> = vec![[Slot::Empty, Slot::Empty]];
        for (index, (network, prefix_len, _)) in self.networks.iter().enumerate() {
            let bits = u32::from(*network);
            let mut node = 0;
            for depth in 0..*prefix_len {
                let bit = ((bits >> (31 - depth)) & 1) as usize;
                if depth + 1 == *prefix_len {
                    nodes[node][bit] = Slot::Data(index);
                } else {
                    node = match nodes[node][bit] {
                        Slot::Node(next) => next,
                        Slot::Empty => {
                            nodes.push([Slot::Empty, Slot::Empty]);
                            let next = nodes.len() - 1;
                            nodes[node][bit] = Slot::Node(next);
                            next
                        }
                        Slot::Data(_) => panic!("overlapping test networks"),
                    };
                }
            }
        }

        let mut data = Vec::new();
        let mut offsets = Vec::with_capacity(self.networks.len());
        for (_, _, record) in &self.networks {
            offsets.push(data.len());
            record.encode(&mut data);
        }

        let node_count = nodes.len();
        let mut out = Vec::new();
        for node in &nodes {
            for slot in node {
                let value = match *slot {
                    Slot::Empty => node_count,
                    Slot::Node(next) => next,
                    Slot::Data(index) => node_count + DATA_SECTION_SEPARATOR + offsets[index],
                };
                out.extend_from_slice(&(value as u32).to_be_bytes()[1..]);
            }
        }
        out.extend_from_slice(&[0u8; DATA_SECTION_SEPARATOR]);
        out.extend_from_slice(&data);
        out.extend_from_slice(METADATA_MARKER);

        MmdbValue::Map(vec![
            ("binary_format_major_version", MmdbValue::U16(2)),
            ("binary_format_minor_version", MmdbValue::U16(0)),
            ("build_epoch", MmdbValue::U64(1_700_000_000)),
            ("database_type", MmdbValue::Str(self.database_type)),
            (
                "description",
                MmdbValue::Map(vec![("en", MmdbValue::Str("ipwhere test database"))]),
            ),
            ("ip_version", MmdbValue::U16(4)),
            ("languages", MmdbValue::Array(vec![MmdbValue::Str("en")])),
            ("node_count", MmdbValue::U32(node_count as u32)),
            ("record_size", MmdbValue::U16(24)),
        ])
        .encode(&mut out);

        out
    }
}

/// A Mountain View city record in the shape DB-IP and GeoLite2 use.
pub fn us_city_record() -> MmdbValue {
    MmdbValue::Map(vec![
        (
            "city",
            MmdbValue::Map(vec![(
                "names",
                MmdbValue::Map(vec![("en", MmdbValue::Str("Mountain View"))]),
            )]),
        ),
        (
            "country",
            MmdbValue::Map(vec![
                ("iso_code", MmdbValue::Str("US")),
                ("is_in_european_union", MmdbValue::Bool(false)),
                (
                    "names",
                    MmdbValue::Map(vec![("en", MmdbValue::Str("United States"))]),
                ),
            ]),
        ),
        (
            "location",
            MmdbValue::Map(vec![
                ("latitude", MmdbValue::Double(37.4056)),
                ("longitude", MmdbValue::Double(-122.0775)),
                ("time_zone", MmdbValue::Str("America/Los_Angeles")),
            ]),
        ),
        (
            "subdivisions",
            MmdbValue::Array(vec![
                MmdbValue::Map(vec![(
                    "names",
                    MmdbValue::Map(vec![("en", MmdbValue::Str("California"))]),
                )]),
                MmdbValue::Map(vec![(
                    "names",
                    MmdbValue::Map(vec![("en", MmdbValue::Str("Santa Clara County"))]),
                )]),
            ]),
        ),
    ])
}

/// A German city record with the EU flag set and a zero coordinate sentinel.
pub fn eu_city_record_without_location() -> MmdbValue {
    MmdbValue::Map(vec![
        (
            "country",
            MmdbValue::Map(vec![
                ("iso_code", MmdbValue::Str("DE")),
                ("is_in_european_union", MmdbValue::Bool(true)),
                (
                    "names",
                    MmdbValue::Map(vec![("en", MmdbValue::Str("Germany"))]),
                ),
            ]),
        ),
        (
            "location",
            MmdbValue::Map(vec![
                ("latitude", MmdbValue::Double(0.0)),
                ("longitude", MmdbValue::Double(0.0)),
            ]),
        ),
    ])
}

pub fn asn_record(number: u32, organization: &'static str) -> MmdbValue {
    MmdbValue::Map(vec![
        ("autonomous_system_number", MmdbValue::U32(number)),
        (
            "autonomous_system_organization",
            MmdbValue::Str(organization),
        ),
    ])
}

/// Database files written to a temporary directory.
///
/// Layout:
/// - `8.0.0.0/8`: US city and AS15169 (both datasets match)
/// - `100.64.0.0/10`: US city only
/// - `1.0.0.0/8`: AS13335 only
/// - `5.0.0.0/8`: German city (EU) with the zero-coordinate sentinel, no ASN
/// - everything else, including private ranges: no match
pub struct TestDatabases {
    _dir: TempDir,
    pub city: PathBuf,
    pub asn: PathBuf,
}

impl TestDatabases {
    pub fn create() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");

        let city_db = MmdbBuilder::new("DBIP-City-Lite")
            .insert("8.0.0.0", 8, us_city_record())
            .insert("100.64.0.0", 10, us_city_record())
            .insert("5.0.0.0", 8, eu_city_record_without_location())
            .build();
        let asn_db = MmdbBuilder::new("DBIP-ASN-Lite")
            .insert("8.0.0.0", 8, asn_record(15169, "Google LLC"))
            .insert("1.0.0.0", 8, asn_record(13335, "Cloudflare, Inc."))
            .build();

        let city = dir.path().join("dbip-city-lite.mmdb");
        let asn = dir.path().join("dbip-asn-lite.mmdb");
        std::fs::write(&city, city_db).expect("write city database");
        std::fs::write(&asn, asn_db).expect("write ASN database");

        Self {
            _dir: dir,
            city,
            asn,
        }
    }
}
