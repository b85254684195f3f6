//! Client IP detection behind reverse proxies.

use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderMap;

/// Determines the address of the client that made a request.
///
/// Checked in order:
/// 1. the first entry of `X-Forwarded-For`
/// 2. `X-Real-IP`
/// 3. the socket peer
///
/// A header value that is not an IP address is skipped. IPv4-mapped IPv6
/// addresses are returned in their IPv4 form.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<IpAddr> {
    if let Some(ip) = header_str(headers, "x-forwarded-for")
        .and_then(|value| value.split(',').next())
        .and_then(parse_ip)
    {
        return Some(ip);
    }

    if let Some(ip) = header_str(headers, "x-real-ip").and_then(parse_ip) {
        return Some(ip);
    }

    peer.map(|addr| addr.ip().to_canonical())
}

/// Returns the first value of `name` if it is valid UTF-8.
pub(crate) fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn parse_ip(value: &str) -> Option<IpAddr> {
    value.trim().parse::<IpAddr>().ok().map(|ip| ip.to_canonical())
}
