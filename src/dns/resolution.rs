//! Reverse DNS lookup.
//!
//! Resolves an IP address back to a hostname via its PTR record. Lookups are
//! best-effort: any failure, including a timeout, yields `None`.

use std::net::IpAddr;
use std::time::Duration;

use hickory_resolver::TokioAsyncResolver;

/// Performs a reverse DNS lookup (PTR record) for an IP address.
///
/// Returns the first name in the answer with its trailing root dot removed, or
/// `None` if the lookup fails, times out, or returns an empty name.
pub async fn reverse_dns_lookup(
    ip: IpAddr,
    resolver: &TokioAsyncResolver,
    timeout: Duration,
) -> Option<String> {
    match tokio::time::timeout(timeout, resolver.reverse_lookup(ip)).await {
        Ok(Ok(response)) => first_hostname(response.iter().map(|name| name.to_utf8())),
        Ok(Err(e)) => {
            log::debug!("Reverse DNS lookup failed for {ip}: {e}");
            None
        }
        Err(_) => {
            log::debug!("Reverse DNS lookup for {ip} timed out after {timeout:?}");
            None
        }
    }
}

/// Picks the hostname from the names of a PTR answer.
///
/// Only the first name is considered; later ones are aliases.
pub(crate) fn first_hostname<I, S>(names: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .next()
        .and_then(|name| clean_hostname(name.as_ref()))
}

/// Strips a single trailing `.` from a fully qualified name.
///
/// Returns `None` for names that are empty once the dot is removed.
pub fn clean_hostname(name: &str) -> Option<String> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
