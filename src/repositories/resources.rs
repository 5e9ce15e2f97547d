use sqlx::PgPool;

use crate::db::models::Resource;
use crate::db::types::Subject;

const COLUMNS: &str = "id, title, subject, file_name, uploaded_by, created_at";

pub(crate) async fn list(
    pool: &PgPool,
    subject: Option<Subject>,
) -> Result<Vec<Resource>, sqlx::Error> {
    match subject {
        Some(subject) => {
            sqlx::query_as::<_, Resource>(&format!(
                "SELECT {COLUMNS} FROM resources WHERE subject = $1 ORDER BY created_at, id"
            ))
            .bind(subject)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, Resource>(&format!(
                "SELECT {COLUMNS} FROM resources ORDER BY created_at, id"
            ))
            .fetch_all(pool)
            .await
        }
    }
}

pub(crate) struct CreateResource<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub subject: Subject,
    pub file_name: Option<&'a str>,
    pub uploaded_by: &'a str,
    pub created_at: time::PrimitiveDateTime,
}

pub(crate) async fn create(
    pool: &PgPool,
    params: CreateResource<'_>,
) -> Result<Resource, sqlx::Error> {
    sqlx::query_as::<_, Resource>(&format!(
        "INSERT INTO resources (id, title, subject, file_name, uploaded_by, created_at)
         VALUES ($1,$2,$3,$4,$5,$6)
         RETURNING {COLUMNS}",
    ))
    .bind(params.id)
    .bind(params.title)
    .bind(params.subject)
    .bind(params.file_name)
    .bind(params.uploaded_by)
    .bind(params.created_at)
    .fetch_one(pool)
    .await
}
