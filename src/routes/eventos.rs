//! Event creation endpoint.

use axum::Json;

use super::MessageResponse;

pub const EVENT_CREATED: &str = "Evento creado";

/// `POST /eventos` — acknowledge an event.
///
/// The request body is not extracted, so empty, malformed or non-JSON
/// payloads are all accepted.
pub async fn create_event() -> Json<MessageResponse> {
    Json(MessageResponse::new(EVENT_CREATED))
}
