use axum::{
    extract::{Path, State},
    routing::put,
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::guards::CurrentTeacher;
use crate::api::students::fetch_student;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::repositories;
use crate::schemas::records::{AttendanceResponse, AttendanceUpdate, MarkResponse, MarkUpdate};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/:student_id/marks", put(put_marks))
        .route("/:student_id/attendance", put(put_attendance))
}

async fn put_marks(
    CurrentTeacher(_teacher): CurrentTeacher,
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(payload): Json<MarkUpdate>,
) -> Result<Json<MarkResponse>, ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let student = fetch_student(&state, &student_id).await?;

    let mark = repositories::marks::upsert(
        state.db(),
        repositories::marks::UpsertMark {
            id: &Uuid::new_v4().to_string(),
            student_id: &student.id,
            subject: payload.subject,
            marks_obtained: payload.marks_obtained,
            total_marks: payload.total_marks,
            now: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to save marks"))?;

    Ok(Json(MarkResponse::from_db(mark)))
}

async fn put_attendance(
    CurrentTeacher(_teacher): CurrentTeacher,
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(payload): Json<AttendanceUpdate>,
) -> Result<Json<AttendanceResponse>, ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;
    if !payload.attended_within_total() {
        return Err(ApiError::BadRequest(
            "attended_classes cannot exceed total_classes".to_string(),
        ));
    }

    let student = fetch_student(&state, &student_id).await?;

    let record = repositories::attendance::upsert(
        state.db(),
        repositories::attendance::UpsertAttendance {
            id: &Uuid::new_v4().to_string(),
            student_id: &student.id,
            subject: payload.subject,
            attended_classes: payload.attended_classes,
            total_classes: payload.total_classes,
            now: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to save attendance"))?;

    Ok(Json(AttendanceResponse::from_db(record)))
}
