// Server module - Router assembly and the HTTP serve loop

use axum::{Json, Router, routing::get};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api;
use crate::api_docs::ApiDoc;
use crate::infrastructure::AppState;

/// Build the full application router: liveness root, `/api` routes, OpenAPI document
pub fn build_router(state: AppState) -> Router {
    let api_router = api::api_router(state);

    // Permissive CORS on every route
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(api::health::root))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .nest("/api", api_router)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Bind `0.0.0.0:port` and serve until the process is stopped
pub async fn serve(state: AppState, port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server running at http://localhost:{}", port);

    axum::serve(listener, build_router(state)).await
}
