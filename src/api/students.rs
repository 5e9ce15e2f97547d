use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::guards::{require_student_access, CurrentTeacher, CurrentUser};
use crate::api::records;
use crate::core::security;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::db::models::Student;
use crate::db::types::UserRole;
use crate::repositories;
use crate::schemas::student::{StudentCreate, StudentReport, StudentResponse, StudentSummary};
use crate::services::validation;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route("/:student_id", delete(delete_student))
        .route("/:student_id/report", get(student_report))
        .merge(records::router())
}

async fn list_students(
    CurrentTeacher(_teacher): CurrentTeacher,
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentSummary>>, ApiError> {
    let students = repositories::students::list(state.db())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to load students"))?;

    let mut summaries = Vec::with_capacity(students.len());
    for student in students {
        let (marks, attendance) = tokio::try_join!(
            repositories::marks::list_by_student(state.db(), &student.id),
            repositories::attendance::list_by_student(state.db(), &student.id),
        )
        .map_err(|e| ApiError::internal(e, "Failed to load student records"))?;

        summaries.push(StudentSummary::build(student, &marks, &attendance));
    }

    Ok(Json(summaries))
}

async fn create_student(
    CurrentTeacher(_teacher): CurrentTeacher,
    State(state): State<AppState>,
    Json(payload): Json<StudentCreate>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    if payload.full_name.trim().is_empty() {
        return Err(ApiError::BadRequest("Full name is required".to_string()));
    }
    if !validation::is_valid_login_email(&payload.email) {
        return Err(ApiError::BadRequest("Email must be a gmail.com address".to_string()));
    }
    if !validation::is_valid_password(&payload.password) {
        return Err(ApiError::BadRequest("Password must be at least 6 characters".to_string()));
    }

    let email = validation::normalize_email(&payload.email);

    let existing = repositories::users::exists_by_email(state.db(), &email)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to check existing user"))?;

    if existing.is_some() {
        return Err(ApiError::Conflict("User with this email already exists".to_string()));
    }

    let hashed_password = security::hash_password(&payload.password)
        .map_err(|e| ApiError::internal(e, "Failed to hash password"))?;

    let now = primitive_now_utc();

    let user = repositories::users::create(
        state.db(),
        repositories::users::CreateUser {
            id: &Uuid::new_v4().to_string(),
            email: &email,
            hashed_password,
            full_name: payload.full_name.trim(),
            role: UserRole::Student,
            is_active: true,
            created_at: now,
            updated_at: now,
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create user"))?;

    let student = repositories::students::create(
        state.db(),
        repositories::students::CreateStudent {
            id: &Uuid::new_v4().to_string(),
            user_id: &user.id,
            full_name: &user.full_name,
            email: &user.email,
            created_at: now,
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create student record"))?;

    Ok((StatusCode::CREATED, Json(StudentResponse::from_db(student))))
}

async fn delete_student(
    CurrentTeacher(_teacher): CurrentTeacher,
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let student = fetch_student(&state, &student_id).await?;

    // Removing the backing user cascades to the student row and its marks
    // and attendance.
    let deleted = repositories::users::delete(state.db(), &student.user_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to delete student"))?;

    if !deleted {
        return Err(ApiError::NotFound("Student not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

async fn student_report(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<StudentReport>, ApiError> {
    let student = fetch_student(&state, &student_id).await?;
    require_student_access(&user, &student.user_id)?;

    let (marks, attendance) = tokio::try_join!(
        repositories::marks::list_by_student(state.db(), &student.id),
        repositories::attendance::list_by_student(state.db(), &student.id),
    )
    .map_err(|e| ApiError::internal(e, "Failed to load student records"))?;

    Ok(Json(StudentReport::build(student, &marks, &attendance)))
}

pub(crate) async fn fetch_student(
    state: &AppState,
    student_id: &str,
) -> Result<Student, ApiError> {
    repositories::students::find_by_id(state.db(), student_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to load student"))?
        .ok_or_else(|| ApiError::NotFound("Student not found".to_string()))
}
