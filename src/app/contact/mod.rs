use super::AppState;
use axum::{routing::post, Router};

pub mod route;
pub mod schema;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/contact", post(route::submit_contact))
}
