use crate::{AppState, list_dependents};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

pub const DEPENDENTS_PATH: &str = "/api/v1/dependents";

const ALLOWED_HEADERS: &str = "Content-Type, Authorization";
const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// Build the application router.
///
/// Any origin may call the endpoint. OPTIONS requests are answered by the
/// CORS layer with 200 and an empty body before routing, and the allow
/// lists are stamped on every response, not only on preflight.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(DEPENDENTS_PATH, get(list_dependents).post(list_dependents))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
}
