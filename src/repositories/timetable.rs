use sqlx::PgPool;

use crate::db::models::TimetableSlot;
use crate::db::types::{Subject, Weekday};

const COLUMNS: &str = "id, day_of_week, start_time, end_time, subject, teacher_id, room, created_at";

pub(crate) async fn list(
    pool: &PgPool,
    teacher_id: Option<&str>,
) -> Result<Vec<TimetableSlot>, sqlx::Error> {
    match teacher_id {
        Some(teacher_id) => {
            sqlx::query_as::<_, TimetableSlot>(&format!(
                "SELECT {COLUMNS} FROM timetable WHERE teacher_id = $1 ORDER BY day_of_week, start_time, id"
            ))
            .bind(teacher_id)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, TimetableSlot>(&format!(
                "SELECT {COLUMNS} FROM timetable ORDER BY day_of_week, start_time, id"
            ))
            .fetch_all(pool)
            .await
        }
    }
}

pub(crate) struct CreateSlot<'a> {
    pub id: &'a str,
    pub day_of_week: Weekday,
    pub start_time: &'a str,
    pub end_time: &'a str,
    pub subject: Subject,
    pub teacher_id: Option<&'a str>,
    pub room: &'a str,
    pub created_at: time::PrimitiveDateTime,
}

pub(crate) async fn create(
    pool: &PgPool,
    params: CreateSlot<'_>,
) -> Result<TimetableSlot, sqlx::Error> {
    sqlx::query_as::<_, TimetableSlot>(&format!(
        "INSERT INTO timetable (id, day_of_week, start_time, end_time, subject, teacher_id, room, created_at)
         VALUES ($1,$2,$3,$4,$5,$6,$7,$8)
         RETURNING {COLUMNS}",
    ))
    .bind(params.id)
    .bind(params.day_of_week)
    .bind(params.start_time)
    .bind(params.end_time)
    .bind(params.subject)
    .bind(params.teacher_id)
    .bind(params.room)
    .bind(params.created_at)
    .fetch_one(pool)
    .await
}

pub(crate) async fn delete_by_id(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM timetable WHERE id = $1").bind(id).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}
