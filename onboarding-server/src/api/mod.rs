//! API routes for the onboarding server

pub mod employees;
pub mod health;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, patch};
use http::{HeaderName, HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::intake::MAX_BODY_SIZE;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// CORS: any origin when none are configured, otherwise only the listed ones
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    if allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(origins)
}

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let employee_routes = Router::new()
        .route(
            "/api/employees",
            get(employees::list)
                .post(employees::submit)
                .delete(employees::delete_all),
        )
        .route("/api/employees/{id}", get(employees::get_by_id))
        .route("/api/employees/{id}/status", patch(employees::update_status));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(employee_routes)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(cors_layer(&state.cors_allowed_origins))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
        .with_state(state)
}
