//! Request echo for diagnosing proxy setups.

use std::collections::BTreeMap;
use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::http::{header, Extensions, HeaderMap, Uri};
use axum::Json;

use super::super::client_ip::{client_ip, header_str};
use super::super::types::DebugResponse;

/// Echoes what the server saw of the request: peer address, headers, and the
/// client IP it would look up.
pub async fn debug_handler(
    uri: Uri,
    headers: HeaderMap,
    extensions: Extensions,
) -> Json<DebugResponse> {
    let peer = extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    let mut all_headers = BTreeMap::new();
    for name in headers.keys() {
        if let Some(value) = header_str(&headers, name.as_str()) {
            all_headers.insert(name.to_string(), value.to_string());
        }
    }

    let host = header_str(&headers, header::HOST.as_str())
        .map(str::to_string)
        .or_else(|| uri.authority().map(|authority| authority.to_string()))
        .unwrap_or_default();

    let request_uri = uri
        .path_and_query()
        .map(|pq| pq.to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let field = |name: &str| header_str(&headers, name).unwrap_or_default().to_string();

    Json(DebugResponse {
        remote_addr: peer.map(|addr| addr.to_string()).unwrap_or_default(),
        host,
        request_uri,
        headers: all_headers,
        x_forwarded_for: field("x-forwarded-for"),
        x_real_ip: field("x-real-ip"),
        x_azure_client_ip: field("x-azure-clientip"),
        x_original_host: field("x-original-host"),
        x_client_ip: field("x-client-ip"),
        cf_connecting_ip: field("cf-connecting-ip"),
        true_client_ip: field("true-client-ip"),
        forwarded_header: field("forwarded"),
        detected_client_ip: client_ip(&headers, peer)
            .map(|ip| ip.to_string())
            .unwrap_or_default(),
    })
}
