//! News endpoint.

use axum::Json;

use super::MessageResponse;

/// Placeholder shown until news are served for real.
pub const NEWS_PLACEHOLDER: &str = "Aquí irán las noticias";

/// `GET /noticias` — news listing placeholder.
pub async fn list_news() -> Json<MessageResponse> {
    Json(MessageResponse::new(NEWS_PLACEHOLDER))
}
