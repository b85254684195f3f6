//! IP lookup handler.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, RawQuery, State};
use axum::http::{Extensions, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use url::form_urlencoded;

use super::super::client_ip::client_ip;
use super::super::types::{AppState, ErrorResponse};
use crate::error_handling::GeoError;

/// Query parameters of `/api/ip`.
///
/// `return` may repeat, so the raw query string is parsed instead of using
/// `Query<T>`.
#[derive(Debug, Default, PartialEq)]
struct LookupParams {
    /// Address to look up; `None` means the caller's own address
    ip: Option<String>,
    /// Requested projection, in request order
    fields: Vec<String>,
}

impl LookupParams {
    fn from_query(query: Option<&str>) -> Self {
        let mut params = Self::default();
        let Some(query) = query else {
            return params;
        };

        // Only the first `ip` counts, even when it is empty
        let mut ip_seen = false;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "ip" if !ip_seen => {
                    ip_seen = true;
                    if !value.is_empty() {
                        params.ip = Some(value.into_owned());
                    }
                }
                "return" => params.fields.push(value.into_owned()),
                _ => {}
            }
        }

        params
    }
}

/// Looks up `ip` (or the caller) and returns the record, projected when
/// `return` fields were given.
pub async fn lookup_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    extensions: Extensions,
) -> Response {
    let params = LookupParams::from_query(query.as_deref());

    let result = match params.ip {
        Some(ip) => state.geo.lookup_str(&ip).await,
        None => {
            let peer = extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| *addr);
            match client_ip(&headers, peer) {
                Some(addr) => state.geo.lookup(addr).await,
                None => Err(GeoError::InvalidIp(String::new())),
            }
        }
    };

    match result {
        Ok(info) if params.fields.is_empty() => Json(info).into_response(),
        Ok(info) => Json(info.filter_fields(&params.fields)).into_response(),
        Err(e) if e.is_client_error() => {
            log::debug!("Rejected lookup: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Invalid IP address")),
            )
                .into_response()
        }
        Err(e) => {
            log::error!("Lookup failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to lookup IP")),
            )
                .into_response()
        }
    }
}
