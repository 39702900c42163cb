use super::AppState;
use axum::Router;
use tower_http::services::ServeDir;

/// Serves the built front end for every path no API route claims.
pub fn router(assets_dir: &str) -> Router<AppState> {
    Router::new()
        .fallback_service(ServeDir::new(assets_dir).append_index_html_on_directories(true))
}
