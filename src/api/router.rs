//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the API router with all endpoints under `/api/`.
pub fn api_router(core: Arc<CoreState>) -> Router {
    build_router(ApiContext::new(core))
}

fn build_router(ctx: ApiContext) -> Router {
    // Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/directory", get(endpoints::directory::show))
        .route("/conversations", post(endpoints::conversations::create))
        .route(
            "/conversations/:id",
            axum::routing::delete(endpoints::conversations::close),
        )
        .route(
            "/conversations/:id/messages",
            get(endpoints::conversations::transcript).post(endpoints::conversations::send),
        )
        .route(
            "/conversations/:id/insights",
            post(endpoints::conversations::insights),
        )
        .route(
            "/conversations/:id/status",
            get(endpoints::conversations::status),
        )
        .with_state(ctx);

    Router::new()
        .nest("/api", routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
