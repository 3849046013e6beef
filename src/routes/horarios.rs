//! Schedule update endpoint.

use axum::Json;

use super::MessageResponse;

pub const SCHEDULES_UPDATED: &str = "Horarios actualizados";

/// `PUT /horarios` — acknowledge a schedule update. Body is ignored.
pub async fn update_schedules() -> Json<MessageResponse> {
    Json(MessageResponse::new(SCHEDULES_UPDATED))
}
