use uuid::Uuid;

use crate::core::security;
use crate::core::state::AppState;
use crate::core::time::primitive_now_utc;
use crate::db::types::UserRole;
use crate::repositories;
use crate::services::validation;

/// Creates the configured default teacher account when it does not exist yet,
/// so a fresh deployment has at least one account that can manage students.
pub(crate) async fn ensure_default_teacher(state: &AppState) -> anyhow::Result<()> {
    let admin = state.settings().admin();
    if admin.first_teacher_password.is_empty() {
        tracing::warn!("FIRST_TEACHER_PASSWORD not configured; skipping default teacher creation");
        return Ok(());
    }

    let email = validation::normalize_email(&admin.first_teacher_email);

    if let Some(user) = repositories::users::find_by_email(state.db(), &email).await? {
        let verified =
            security::verify_password(&admin.first_teacher_password, &user.hashed_password)
                .unwrap_or(false);

        if verified && user.role == UserRole::Teacher && user.is_active {
            tracing::info!("Default teacher already up to date");
            return Ok(());
        }

        let hashed_password = if verified {
            user.hashed_password.clone()
        } else {
            security::hash_password(&admin.first_teacher_password)?
        };

        sqlx::query(
            "UPDATE users
             SET hashed_password = $1, role = $2, is_active = TRUE, updated_at = $3
             WHERE id = $4",
        )
        .bind(hashed_password)
        .bind(UserRole::Teacher)
        .bind(primitive_now_utc())
        .bind(&user.id)
        .execute(state.db())
        .await?;

        tracing::info!(email = %email, "Updated default teacher");
        return Ok(());
    }

    let hashed_password = security::hash_password(&admin.first_teacher_password)?;
    let now = primitive_now_utc();

    repositories::users::create(
        state.db(),
        repositories::users::CreateUser {
            id: &Uuid::new_v4().to_string(),
            email: &email,
            hashed_password,
            full_name: "Default Teacher",
            role: UserRole::Teacher,
            is_active: true,
            created_at: now,
            updated_at: now,
        },
    )
    .await?;

    tracing::info!(email = %email, "Created default teacher");
    Ok(())
}
