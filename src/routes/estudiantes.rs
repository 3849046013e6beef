//! Student listing endpoint.

use axum::Json;
use serde::Serialize;

/// Students returned by `GET /estudiantes`, in response order.
pub const STUDENTS: [&str; 3] = ["Juan", "Ana", "Karla"];

/// Response body for `GET /estudiantes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StudentsResponse {
    pub estudiantes: &'static [&'static str],
}

/// `GET /estudiantes` — fixed student list.
pub async fn list_students() -> Json<StudentsResponse> {
    Json(StudentsResponse {
        estudiantes: &STUDENTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_keeps_order() {
        let Json(body) = list_students().await;
        assert_eq!(body.estudiantes, ["Juan", "Ana", "Karla"]);
    }

    #[test]
    fn test_serializes_under_estudiantes_key() {
        let body = StudentsResponse {
            estudiantes: &STUDENTS,
        };
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"estudiantes": ["Juan", "Ana", "Karla"]})
        );
    }
}
