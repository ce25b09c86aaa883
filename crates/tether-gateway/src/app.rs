use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    api_not_found_handler, create_link_handler, health_handler, not_found_handler,
    resolve_handler, stats_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Top-level path segments served by the router itself, which short
    /// codes must not start with.
    pub const RESERVED_PATHS: [&'static str; 2] = ["api", "health"];

    pub fn router(state: AppState) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]);

        Router::new()
            .route("/health", get(health_handler))
            .nest(
                "/api",
                Router::new()
                    .route("/create", post(create_link_handler))
                    .route("/stats/{*short_code}", get(stats_handler))
                    .fallback(api_not_found_handler)
                    .layer(cors),
            )
            .route("/{*short_code}", get(resolve_handler))
            .fallback(not_found_handler)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
