use axum::{extract::State, routing::get, Json, Router};

use crate::api::errors::ApiError;
use crate::api::guards::CurrentUser;
use crate::core::state::AppState;
use crate::db::types::UserRole;
use crate::repositories;
use crate::schemas::classroom::{AssignmentResponse, MeetLinkResponse, ResourceResponse};
use crate::schemas::dashboard::{DashboardResponse, StudentDashboard, TeacherDashboard};
use crate::schemas::student::{StudentReport, StudentSummary};
use crate::schemas::timetable::TimetableSlotResponse;

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}

/// One round trip for everything the landing view shows. Collections are
/// fetched concurrently and degrade to empty on error rather than failing
/// the whole response.
async fn dashboard(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, ApiError> {
    match user.role {
        UserRole::Teacher => teacher_dashboard(&state).await.map(Json),
        UserRole::Student => student_dashboard(&state, &user.id).await.map(Json),
    }
}

async fn teacher_dashboard(state: &AppState) -> Result<DashboardResponse, ApiError> {
    let (students, assignments, resources, meet_links, timetable) = tokio::join!(
        repositories::students::list(state.db()),
        repositories::assignments::list(state.db(), None),
        repositories::resources::list(state.db(), None),
        repositories::meet_links::list(state.db(), None),
        repositories::timetable::list(state.db(), None),
    );

    let students = fallback(students, "students");
    let assignment_count = fallback(assignments, "assignments").len();
    let resource_count = fallback(resources, "resources").len();
    let meet_link_count = fallback(meet_links, "meet links").len();
    let timetable_slot_count = fallback(timetable, "timetable").len();

    let mut summaries = Vec::with_capacity(students.len());
    for student in students {
        let (marks, attendance) = tokio::join!(
            repositories::marks::list_by_student(state.db(), &student.id),
            repositories::attendance::list_by_student(state.db(), &student.id),
        );
        summaries.push(StudentSummary::build(
            student,
            &fallback(marks, "marks"),
            &fallback(attendance, "attendance"),
        ));
    }

    Ok(DashboardResponse::Teacher(TeacherDashboard {
        students: summaries,
        assignment_count,
        resource_count,
        meet_link_count,
        timetable_slot_count,
    }))
}

async fn student_dashboard(state: &AppState, user_id: &str) -> Result<DashboardResponse, ApiError> {
    let student = repositories::students::find_by_user_id(state.db(), user_id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to load student"))?
        .ok_or_else(|| ApiError::NotFound("Student record not found".to_string()))?;

    let (marks, attendance, assignments, resources, meet_links, timetable) = tokio::join!(
        repositories::marks::list_by_student(state.db(), &student.id),
        repositories::attendance::list_by_student(state.db(), &student.id),
        repositories::assignments::list(state.db(), None),
        repositories::resources::list(state.db(), None),
        repositories::meet_links::list(state.db(), None),
        repositories::timetable::list(state.db(), None),
    );

    let report = StudentReport::build(
        student,
        &fallback(marks, "marks"),
        &fallback(attendance, "attendance"),
    );

    Ok(DashboardResponse::Student(StudentDashboard {
        report,
        assignments: fallback(assignments, "assignments")
            .into_iter()
            .map(AssignmentResponse::from_db)
            .collect(),
        resources: fallback(resources, "resources")
            .into_iter()
            .map(ResourceResponse::from_db)
            .collect(),
        meet_links: fallback(meet_links, "meet links")
            .into_iter()
            .map(MeetLinkResponse::from_db)
            .collect(),
        timetable: fallback(timetable, "timetable")
            .into_iter()
            .map(TimetableSlotResponse::from_db)
            .collect(),
    }))
}

fn fallback<T>(result: Result<Vec<T>, sqlx::Error>, what: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(error = %err, "Failed to load {what} for dashboard");
            Vec::new()
        }
    }
}
