use std::path::Path;
use std::sync::Arc;

use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::system;
use crate::system::auth::identity::IdentityProvider;
use crate::system::middleware::request_logger::{request_logger, RequestLogOptions};

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityProvider>,
}

/// Method and path of every API route, for the startup log.
pub const API_ROUTES: &[(&str, &str)] = &[("GET", "/health"), ("POST", "/api/auth/login")];

/// Application routes
///
/// `/api/*` paths without a route get a JSON 404; every other path is a
/// static file, with `index.html` for unknown ones.
pub fn configure_routes(
    state: AppState,
    static_dir: &Path,
    log_options: RequestLogOptions,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let api = Router::new()
        .route("/auth/login", post(system::handlers::auth::login))
        .fallback(system::handlers::not_found::api_not_found);

    let static_files =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api", api)
        .fallback_service(static_files)
        .layer(cors)
        .layer(middleware::from_fn_with_state(log_options, request_logger))
        .with_state(state)
}

pub fn log_routes() {
    for (method, path) in API_ROUTES {
        tracing::info!("Route registered: {:>4} {}", method, path);
    }
}
