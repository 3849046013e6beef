//! HTTP route handlers.
//!
//! Each sub-module corresponds to one resource. Handlers take no extractors:
//! headers, query strings and bodies are never read, so every request that
//! reaches a handler gets the same response.

pub mod estudiantes;
pub mod eventos;
pub mod horarios;
pub mod noticias;

use axum::{
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};

/// Body shared by the endpoints that only acknowledge a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub mensaje: &'static str,
}

impl MessageResponse {
    pub const fn new(mensaje: &'static str) -> Self {
        Self { mensaje }
    }
}

/// Route table as `(method, path)`, in registration order.
pub const ROUTES: [(&str, &str); 4] = [
    ("GET", "/noticias"),
    ("POST", "/eventos"),
    ("GET", "/estudiantes"),
    ("PUT", "/horarios"),
];

/// Build the router for the four resources.
///
/// Unknown paths and known paths hit with an unregistered method both land
/// on [`not_found`].
pub fn router() -> Router {
    Router::new()
        .route("/noticias", get(noticias::list_news))
        .route("/eventos", post(eventos::create_event))
        .route("/estudiantes", get(estudiantes::list_students))
        .route("/horarios", put(horarios::update_schedules))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
}

/// Fallback for anything outside the route table: `404 {"detail": "Not Found"}`.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({"detail": "Not Found"})))
}
