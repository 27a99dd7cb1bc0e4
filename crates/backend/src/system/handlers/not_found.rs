use axum::{
    extract::{Json, OriginalUri},
    http::{Method, StatusCode, Uri},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RouteNotFound {
    pub error: String,
    pub method: String,
    pub url: String,
    pub timestamp: String,
    pub debug: String,
}

/// JSON 404 for API paths that match no route. Nested under `/api`, so the
/// full path comes from `OriginalUri`.
pub async fn api_not_found(
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> (StatusCode, Json<RouteNotFound>) {
    tracing::warn!("API route not found: {} {}", method, uri);
    (StatusCode::NOT_FOUND, Json(route_not_found(&method, &uri)))
}

fn route_not_found(method: &Method, uri: &Uri) -> RouteNotFound {
    RouteNotFound {
        error: "Rota não encontrada".to_string(),
        method: method.to_string(),
        url: uri.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        debug: format!("Nenhuma rota registrada para {} {}", method, uri.path()),
    }
}
