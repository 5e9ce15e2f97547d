use sqlx::PgPool;

use crate::db::models::Assignment;
use crate::db::types::Subject;

const COLUMNS: &str = "id, title, subject, due_date, created_by, attachment_name, created_at";

pub(crate) async fn list(
    pool: &PgPool,
    subject: Option<Subject>,
) -> Result<Vec<Assignment>, sqlx::Error> {
    match subject {
        Some(subject) => {
            sqlx::query_as::<_, Assignment>(&format!(
                "SELECT {COLUMNS} FROM assignments WHERE subject = $1 ORDER BY due_date, id"
            ))
            .bind(subject)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, Assignment>(&format!(
                "SELECT {COLUMNS} FROM assignments ORDER BY due_date, id"
            ))
            .fetch_all(pool)
            .await
        }
    }
}

pub(crate) struct CreateAssignment<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub subject: Subject,
    pub due_date: time::Date,
    pub created_by: &'a str,
    pub attachment_name: Option<&'a str>,
    pub created_at: time::PrimitiveDateTime,
}

pub(crate) async fn create(
    pool: &PgPool,
    params: CreateAssignment<'_>,
) -> Result<Assignment, sqlx::Error> {
    sqlx::query_as::<_, Assignment>(&format!(
        "INSERT INTO assignments (id, title, subject, due_date, created_by, attachment_name, created_at)
         VALUES ($1,$2,$3,$4,$5,$6,$7)
         RETURNING {COLUMNS}",
    ))
    .bind(params.id)
    .bind(params.title)
    .bind(params.subject)
    .bind(params.due_date)
    .bind(params.created_by)
    .bind(params.attachment_name)
    .bind(params.created_at)
    .fetch_one(pool)
    .await
}
