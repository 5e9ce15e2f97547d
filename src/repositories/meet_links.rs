use sqlx::PgPool;

use crate::db::models::MeetLink;
use crate::db::types::{MeetStatus, Subject};

const COLUMNS: &str = "id, subject, teacher_id, link, scheduled_time, status, created_at";

pub(crate) async fn list(
    pool: &PgPool,
    subject: Option<Subject>,
) -> Result<Vec<MeetLink>, sqlx::Error> {
    match subject {
        Some(subject) => {
            sqlx::query_as::<_, MeetLink>(&format!(
                "SELECT {COLUMNS} FROM meet_links WHERE subject = $1 ORDER BY scheduled_time, id"
            ))
            .bind(subject)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, MeetLink>(&format!(
                "SELECT {COLUMNS} FROM meet_links ORDER BY scheduled_time, id"
            ))
            .fetch_all(pool)
            .await
        }
    }
}

pub(crate) struct CreateMeetLink<'a> {
    pub id: &'a str,
    pub subject: Subject,
    pub teacher_id: &'a str,
    pub link: &'a str,
    pub scheduled_time: time::PrimitiveDateTime,
    pub status: MeetStatus,
    pub created_at: time::PrimitiveDateTime,
}

pub(crate) async fn create(
    pool: &PgPool,
    params: CreateMeetLink<'_>,
) -> Result<MeetLink, sqlx::Error> {
    sqlx::query_as::<_, MeetLink>(&format!(
        "INSERT INTO meet_links (id, subject, teacher_id, link, scheduled_time, status, created_at)
         VALUES ($1,$2,$3,$4,$5,$6,$7)
         RETURNING {COLUMNS}",
    ))
    .bind(params.id)
    .bind(params.subject)
    .bind(params.teacher_id)
    .bind(params.link)
    .bind(params.scheduled_time)
    .bind(params.status)
    .bind(params.created_at)
    .fetch_one(pool)
    .await
}
