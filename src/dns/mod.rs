//! DNS helpers.
//!
//! Only reverse lookups are needed: resolving a queried IP back to its hostname
//! when online features are enabled.

mod resolution;

// Re-export public API
pub use resolution::reverse_dns_lookup;
