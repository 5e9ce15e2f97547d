use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::guards::{CurrentTeacher, CurrentUser};
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::repositories;
use crate::schemas::timetable::{TimetableSlotCreate, TimetableSlotResponse};

#[derive(Debug, Deserialize)]
struct TimetableQuery {
    #[serde(alias = "teacherId")]
    teacher_id: Option<String>,
}

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_slots).post(create_slot))
        .route("/:slot_id", delete(delete_slot))
}

async fn list_slots(
    CurrentUser(_user): CurrentUser,
    State(state): State<AppState>,
    Query(query): Query<TimetableQuery>,
) -> Result<Json<Vec<TimetableSlotResponse>>, ApiError> {
    let slots = repositories::timetable::list(state.db(), query.teacher_id.as_deref())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to load timetable"))?;

    Ok(Json(slots.into_iter().map(TimetableSlotResponse::from_db).collect()))
}

async fn create_slot(
    CurrentTeacher(teacher): CurrentTeacher,
    State(state): State<AppState>,
    Json(payload): Json<TimetableSlotCreate>,
) -> Result<(StatusCode, Json<TimetableSlotResponse>), ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    // A slot belongs to the creating teacher unless another owner is named.
    let teacher_id = payload.teacher_id.as_deref().unwrap_or(&teacher.id);

    let slot = repositories::timetable::create(
        state.db(),
        repositories::timetable::CreateSlot {
            id: &Uuid::new_v4().to_string(),
            day_of_week: payload.day_of_week,
            start_time: payload.start_time.trim(),
            end_time: payload.end_time.trim(),
            subject: payload.subject,
            teacher_id: Some(teacher_id),
            room: payload.room.trim(),
            created_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create timetable slot"))?;

    Ok((StatusCode::CREATED, Json(TimetableSlotResponse::from_db(slot))))
}

async fn delete_slot(
    CurrentTeacher(_teacher): CurrentTeacher,
    State(state): State<AppState>,
    Path(slot_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let deleted = repositories::timetable::delete_by_id(state.db(), &slot_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to delete timetable slot"))?;

    if !deleted {
        return Err(ApiError::NotFound("Timetable slot not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
