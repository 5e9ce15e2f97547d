use async_trait::async_trait;
use axum::extract::{FromRequestParts, State};
use axum::http::{header, request::Parts};

use crate::api::errors::ApiError;
use crate::core::{security, state::AppState};
use crate::db::models::User;
use crate::db::types::UserRole;
use crate::repositories;

pub(crate) struct CurrentUser(pub(crate) User);
pub(crate) struct CurrentTeacher(pub(crate) User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let State(app_state) = State::<AppState>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::internal(e, "Failed to access application state"))?;

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthorized("Invalid authentication credentials"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthorized("Invalid authentication credentials"))?;

        let claims = security::verify_token(token, app_state.settings())
            .map_err(|_| ApiError::Unauthorized("Invalid authentication credentials"))?;

        let user = repositories::users::find_by_id(app_state.db(), &claims.sub)
            .await
            .map_err(|e| ApiError::internal(e, "Failed to load user"))?;

        let Some(user) = user else {
            return Err(ApiError::Unauthorized("User not found"));
        };

        if !user.is_active {
            return Err(ApiError::Unauthorized("Invalid authentication credentials"));
        }

        Ok(CurrentUser(user))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentTeacher {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;

        if user.role == UserRole::Teacher {
            Ok(CurrentTeacher(user))
        } else {
            Err(ApiError::Forbidden("Teacher access required"))
        }
    }
}

/// Students may only read records of the student row owned by their own user;
/// teachers may read any. Returns 403 rather than 404 so a student cannot
/// probe which ids exist.
pub(crate) fn require_student_access(user: &User, student_user_id: &str) -> Result<(), ApiError> {
    match user.role {
        UserRole::Teacher => Ok(()),
        UserRole::Student if user.id == student_user_id => Ok(()),
        UserRole::Student => Err(ApiError::Forbidden("Not allowed to view this student")),
    }
}

#[cfg(test)]
mod tests {
    use super::require_student_access;
    use crate::core::time::primitive_now_utc;
    use crate::db::models::User;
    use crate::db::types::UserRole;

    fn user(id: &str, role: UserRole) -> User {
        let now = primitive_now_utc();
        User {
            id: id.to_string(),
            email: format!("{id}@gmail.com"),
            hashed_password: "x".to_string(),
            full_name: "Test".to_string(),
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn teacher_reads_any_student() {
        assert!(require_student_access(&user("t1", UserRole::Teacher), "someone-else").is_ok());
    }

    #[test]
    fn student_reads_only_own_records() {
        assert!(require_student_access(&user("u1", UserRole::Student), "u1").is_ok());
        assert!(require_student_access(&user("u1", UserRole::Student), "u2").is_err());
    }
}
