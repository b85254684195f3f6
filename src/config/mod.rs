//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, default paths, etc.)
//! - CLI option types and parsing (flags with environment fallbacks)
//! - Database path discovery

mod constants;
mod discovery;
mod types;

// Re-export all constants
pub use constants::*;
pub use discovery::{database_search_dirs, find_database};
pub use types::{Config, LogFormat, LogLevel};
