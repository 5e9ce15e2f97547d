use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::guards::{CurrentTeacher, CurrentUser};
use crate::core::state::AppState;
use crate::core::time::{primitive_now_utc, to_primitive_utc};
use crate::db::types::Subject;
use crate::repositories;
use crate::schemas::classroom::{
    AssignmentCreate, AssignmentResponse, MeetLinkCreate, MeetLinkResponse, ResourceCreate,
    ResourceResponse,
};

#[derive(Debug, Deserialize)]
pub(crate) struct SubjectQuery {
    subject: Option<Subject>,
}

pub(crate) fn assignments_router() -> Router<AppState> {
    Router::new().route("/", get(list_assignments).post(create_assignment))
}

pub(crate) fn resources_router() -> Router<AppState> {
    Router::new().route("/", get(list_resources).post(create_resource))
}

pub(crate) fn meet_links_router() -> Router<AppState> {
    Router::new().route("/", get(list_meet_links).post(create_meet_link))
}

async fn list_assignments(
    CurrentUser(_user): CurrentUser,
    State(state): State<AppState>,
    Query(query): Query<SubjectQuery>,
) -> Result<Json<Vec<AssignmentResponse>>, ApiError> {
    let assignments = repositories::assignments::list(state.db(), query.subject)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to load assignments"))?;

    Ok(Json(assignments.into_iter().map(AssignmentResponse::from_db).collect()))
}

async fn create_assignment(
    CurrentTeacher(teacher): CurrentTeacher,
    State(state): State<AppState>,
    Json(payload): Json<AssignmentCreate>,
) -> Result<(StatusCode, Json<AssignmentResponse>), ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let assignment = repositories::assignments::create(
        state.db(),
        repositories::assignments::CreateAssignment {
            id: &Uuid::new_v4().to_string(),
            title: payload.title.trim(),
            subject: payload.subject,
            due_date: payload.due_date,
            created_by: &teacher.id,
            attachment_name: payload.attachment_name.as_deref(),
            created_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create assignment"))?;

    Ok((StatusCode::CREATED, Json(AssignmentResponse::from_db(assignment))))
}

async fn list_resources(
    CurrentUser(_user): CurrentUser,
    State(state): State<AppState>,
    Query(query): Query<SubjectQuery>,
) -> Result<Json<Vec<ResourceResponse>>, ApiError> {
    let resources = repositories::resources::list(state.db(), query.subject)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to load resources"))?;

    Ok(Json(resources.into_iter().map(ResourceResponse::from_db).collect()))
}

async fn create_resource(
    CurrentTeacher(teacher): CurrentTeacher,
    State(state): State<AppState>,
    Json(payload): Json<ResourceCreate>,
) -> Result<(StatusCode, Json<ResourceResponse>), ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let resource = repositories::resources::create(
        state.db(),
        repositories::resources::CreateResource {
            id: &Uuid::new_v4().to_string(),
            title: payload.title.trim(),
            subject: payload.subject,
            file_name: payload.file_name.as_deref(),
            uploaded_by: &teacher.id,
            created_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create resource"))?;

    Ok((StatusCode::CREATED, Json(ResourceResponse::from_db(resource))))
}

async fn list_meet_links(
    CurrentUser(_user): CurrentUser,
    State(state): State<AppState>,
    Query(query): Query<SubjectQuery>,
) -> Result<Json<Vec<MeetLinkResponse>>, ApiError> {
    let meet_links = repositories::meet_links::list(state.db(), query.subject)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to load meet links"))?;

    Ok(Json(meet_links.into_iter().map(MeetLinkResponse::from_db).collect()))
}

async fn create_meet_link(
    CurrentTeacher(teacher): CurrentTeacher,
    State(state): State<AppState>,
    Json(payload): Json<MeetLinkCreate>,
) -> Result<(StatusCode, Json<MeetLinkResponse>), ApiError> {
    payload.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let meet = repositories::meet_links::create(
        state.db(),
        repositories::meet_links::CreateMeetLink {
            id: &Uuid::new_v4().to_string(),
            subject: payload.subject,
            teacher_id: &teacher.id,
            link: payload.link.trim(),
            scheduled_time: to_primitive_utc(payload.scheduled_time),
            status: payload.status,
            created_at: primitive_now_utc(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create meet link"))?;

    Ok((StatusCode::CREATED, Json(MeetLinkResponse::from_db(meet))))
}
