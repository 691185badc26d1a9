// Admin and liveness endpoints

use axum::{extract::State, http::StatusCode};
use tracing::{info, warn};

use crate::AppState;

/// Handler for POST /enable
/// Starts answering orders
#[utoipa::path(
    post,
    path = "/enable",
    responses(
        (status = 200, description = "Order taking enabled")
    ),
    tag = "admin"
)]
pub async fn enable_order_taking(State(state): State<AppState>) -> StatusCode {
    info!("Accepting order requests");
    state.availability.enable();
    StatusCode::OK
}

/// Handler for POST /disable
/// Stops answering orders; they get a 404 until re-enabled
#[utoipa::path(
    post,
    path = "/disable",
    responses(
        (status = 200, description = "Order taking disabled")
    ),
    tag = "admin"
)]
pub async fn disable_order_taking(State(state): State<AppState>) -> StatusCode {
    warn!("Ignoring order requests");
    state.availability.disable();
    StatusCode::OK
}

/// Handler for GET /ping
#[utoipa::path(
    get,
    path = "/ping",
    responses(
        (status = 200, description = "Service is alive", body = String, example = json!("pong"))
    ),
    tag = "admin"
)]
pub async fn ping() -> &'static str {
    info!("ping received");
    "pong"
}
