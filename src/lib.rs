pub mod admin;
pub mod availability;
pub mod config;
pub mod error;
pub mod orders;
pub mod pricing;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use availability::ServiceAvailability;
use orders::{FeedbackMessage, Order, Quote};
use pricing::{PricingEngine, TaxRegistry};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        orders::handlers::answer_quote,
        orders::handlers::log_feedback,
        admin::enable_order_taking,
        admin::disable_order_taking,
        admin::ping,
    ),
    components(
        schemas(Order, Quote, FeedbackMessage)
    ),
    tags(
        (name = "orders", description = "Order quoting endpoints"),
        (name = "admin", description = "Order taking switch and liveness")
    ),
    info(
        title = "Pricing API",
        version = "1.0.0",
        description = "Quotes the amount payable for an order after country tax and reduction"
    )
)]
pub struct ApiDoc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: PricingEngine,
    pub availability: ServiceAvailability,
}

impl AppState {
    pub fn new(taking_orders: bool) -> Self {
        Self {
            engine: PricingEngine::new(Arc::new(TaxRegistry::default())),
            availability: ServiceAvailability::new(taking_orders),
        }
    }
}

/// Creates and configures the application router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/order", post(orders::answer_quote))
        .route("/feedback", post(orders::log_feedback))
        .route("/enable", post(admin::enable_order_taking))
        .route("/disable", post(admin::disable_order_taking))
        .route("/ping", get(admin::ping))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests;
