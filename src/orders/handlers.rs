// HTTP handlers for order endpoints

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::orders::{FeedbackMessage, Order, Quote};
use crate::AppState;

/// Handler for POST /order
/// Quotes the amount payable for an order
#[utoipa::path(
    post,
    path = "/order",
    request_body = Order,
    responses(
        (status = 200, description = "Order quoted", body = Quote),
        (status = 400, description = "Malformed order"),
        (status = 404, description = "Order not answered")
    ),
    tag = "orders"
)]
pub async fn answer_quote(
    State(state): State<AppState>,
    payload: Result<Json<Option<Order>>, JsonRejection>,
) -> Result<Json<Quote>, ApiError> {
    let Json(order) = payload.map_err(|rejection| {
        warn!("Order rejected: undecodable body ({})", rejection.body_text());
        ApiError::from(rejection)
    })?;

    let Some(order) = order else {
        warn!("Order rejected: empty order");
        return Err(ApiError::MalformedBody("order is null".to_string()));
    };

    info!("Order received: {:?}", order);

    let order = order.into_validated().map_err(|errors| {
        warn!("Order rejected: {:?}", errors);
        ApiError::MalformedOrder(errors)
    })?;

    if !state.availability.is_taking_orders() || !state.engine.accepts(&order) {
        warn!("Order ignored: {:?}", order);
        return Err(ApiError::NotAccepted);
    }

    let quote = state.engine.quote(&order);
    info!("Order answered with value: {}", quote.total);
    Ok(Json(quote))
}

/// Handler for POST /feedback
/// Logs whatever the order issuer sends back
#[utoipa::path(
    post,
    path = "/feedback",
    request_body = FeedbackMessage,
    responses(
        (status = 200, description = "Feedback received")
    ),
    tag = "orders"
)]
pub async fn log_feedback(body: Bytes) -> StatusCode {
    match serde_json::from_slice::<FeedbackMessage>(&body) {
        Ok(FeedbackMessage {
            kind: Some(kind),
            content,
        }) => {
            info!(
                "feedback received: [{}] {}",
                kind,
                content.unwrap_or_default()
            );
        }
        _ => info!("feedback received: {}", String::from_utf8_lossy(&body)),
    }
    StatusCode::OK
}
