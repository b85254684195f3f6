//! Feature flags exposed to the frontend.

use axum::extract::State;
use axum::Json;

use super::super::types::{AppState, FeaturesResponse};

/// Reports whether online features (reverse DNS) are enabled.
pub async fn features_handler(State(state): State<AppState>) -> Json<FeaturesResponse> {
    Json(FeaturesResponse {
        online_features: state.geo.online_features_enabled(),
    })
}
