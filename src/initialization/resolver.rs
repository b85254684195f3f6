//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver used for reverse (PTR) lookups.
///
/// Uses the system resolver configuration when it can be read, falling back to
/// the library default (Google DNS) otherwise. Timeouts are kept short so a slow
/// or unresponsive DNS server cannot hold up a lookup request.
pub fn init_resolver() -> Arc<TokioAsyncResolver> {
    let (config, opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok((config, opts)) if !config.name_servers().is_empty() => (config, opts),
        Ok(_) => {
            log::debug!("System resolver lists no name servers, using defaults");
            (ResolverConfig::default(), ResolverOpts::default())
        }
        Err(e) => {
            log::debug!("Falling back to default resolver configuration: {}", e);
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    Arc::new(TokioAsyncResolver::tokio(config, with_lookup_limits(opts)))
}

fn with_lookup_limits(mut opts: ResolverOpts) -> ResolverOpts {
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS;
    // PTR names are always fully qualified; never append search domains
    opts.ndots = 0;
    opts
}
