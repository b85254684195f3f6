//! Shared test helpers for server module tests.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::error_handling::GeoError;
use crate::geoip::{GeoLookup, IpInfo};
use crate::server::{build_router, AppState};

/// In-memory lookup: `8.8.8.8` is fully populated, other addresses have no data.
#[derive(Default)]
pub struct MockLookup {
    pub online: bool,
    pub closed: bool,
}

#[async_trait]
impl GeoLookup for MockLookup {
    async fn lookup(&self, ip: IpAddr) -> Result<IpInfo, GeoError> {
        if self.closed {
            return Err(GeoError::Closed);
        }

        let mut info = IpInfo::new(ip);
        if ip.to_string() == "8.8.8.8" {
            info.country = Some("United States".to_string());
            info.iso_code = Some("US".to_string());
            info.city = Some("Mountain View".to_string());
            info.region = Some("California".to_string());
            info.latitude = Some(37.4056);
            info.longitude = Some(-122.0775);
            info.timezone = Some("America/Los_Angeles".to_string());
            info.asn = Some(15169);
            info.organization = Some("Google LLC".to_string());
        }
        Ok(info)
    }

    fn online_features_enabled(&self) -> bool {
        self.online
    }
}

pub fn router_with(mock: MockLookup, headless: bool) -> Router {
    build_router(AppState::new(Arc::new(mock)), headless)
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .extension(ConnectInfo(peer_addr()))
        .body(Body::empty())
        .expect("valid request")
}

pub fn peer_addr() -> SocketAddr {
    "192.0.2.10:54321".parse().expect("valid socket address")
}

pub async fn send(router: Router, request: Request<Body>) -> Response<Body> {
    router.oneshot(request).await.expect("router is infallible")
}

pub async fn json_body(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let json = serde_json::from_slice(&bytes).expect("JSON body");
    (status, json)
}
