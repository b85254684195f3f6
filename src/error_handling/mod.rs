//! Error handling.
//!
//! Error types are categorized into:
//! - **Initialization errors**: logger or resolver setup failed at startup
//! - **Geo errors**: a database could not be opened, input was not an IP,
//!   or the service was already closed

mod types;

// Re-export public API
pub use types::{GeoError, InitializationError};
