use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::guards::CurrentUser;
use crate::core::security;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::db::models::User;
use crate::db::types::UserRole;
use crate::repositories;
use crate::schemas::auth::TokenResponse;
use crate::schemas::user::{UserLogin, UserResponse, UserSignup};
use crate::services::validation::{self, SignupForm};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/me", get(me))
}

async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<UserSignup>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    let form = SignupForm {
        role: payload.role,
        full_name: &payload.full_name,
        email: &payload.email,
        password: &payload.password,
        confirm_password: &payload.confirm_password,
    };

    if !validation::can_signup(&form) {
        return Err(ApiError::BadRequest(signup_rejection(&form)));
    }

    if !validation::is_valid_login_email(&payload.email) {
        return Err(ApiError::BadRequest("Email must be a gmail.com address".to_string()));
    }

    let role = payload.role.unwrap_or(UserRole::Student);
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
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create user"))?;

    // Student accounts also get a student row so they show up in the
    // teacher's roster and can carry marks and attendance.
    if role == UserRole::Student {
        repositories::students::create(
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
    }

    let token = security::create_access_token(&user.id, state.settings(), None)
        .map_err(|e| ApiError::internal(e, "Failed to create access token"))?;

    let response = TokenResponse {
        access_token: token,
        token_type: "bearer".to_string(),
        user: UserResponse::from_db(user),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

async fn login(
    State(state): State<AppState>,
    Json(payload): Json<UserLogin>,
) -> Result<Json<TokenResponse>, ApiError> {
    if !validation::is_valid_login_email(&payload.email) {
        return Err(ApiError::BadRequest("Email must be a gmail.com address".to_string()));
    }
    if !validation::is_valid_password(&payload.password) {
        return Err(ApiError::BadRequest("Password must be at least 6 characters".to_string()));
    }

    let email = validation::normalize_email(&payload.email);
    let user = fetch_user_by_email(&state, &email).await?;

    let verified = security::verify_password(&payload.password, &user.hashed_password)
        .map_err(|_| ApiError::Unauthorized("Incorrect email or password"))?;

    if !verified {
        return Err(ApiError::Unauthorized("Incorrect email or password"));
    }

    if !user.is_active {
        return Err(ApiError::BadRequest("Inactive user".to_string()));
    }

    let token = security::create_access_token(&user.id, state.settings(), None)
        .map_err(|e| ApiError::internal(e, "Failed to create access token"))?;

    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "bearer".to_string(),
        user: UserResponse::from_db(user),
    }))
}

async fn me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse::from_db(user))
}

async fn fetch_user_by_email(state: &AppState, email: &str) -> Result<User, ApiError> {
    repositories::users::find_by_email(state.db(), email)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to load user"))?
        .ok_or(ApiError::Unauthorized("Incorrect email or password"))
}

fn signup_rejection(form: &SignupForm<'_>) -> String {
    if form.role.is_none() {
        "Role is required".to_string()
    } else if form.full_name.trim().is_empty() {
        "Full name is required".to_string()
    } else if form.email.trim().is_empty() {
        "Email is required".to_string()
    } else if !validation::is_valid_password(form.password) {
        "Password must be at least 6 characters".to_string()
    } else {
        "Passwords do not match".to_string()
    }
}
