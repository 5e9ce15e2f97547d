use sqlx::PgPool;

use crate::db::models::AttendanceRecord;
use crate::db::types::Subject;

const COLUMNS: &str =
    "id, student_id, subject, attended_classes, total_classes, created_at, updated_at";

pub(crate) async fn list_by_student(
    pool: &PgPool,
    student_id: &str,
) -> Result<Vec<AttendanceRecord>, sqlx::Error> {
    sqlx::query_as::<_, AttendanceRecord>(&format!(
        "SELECT {COLUMNS} FROM attendance WHERE student_id = $1 ORDER BY subject"
    ))
    .bind(student_id)
    .fetch_all(pool)
    .await
}

pub(crate) struct UpsertAttendance<'a> {
    pub id: &'a str,
    pub student_id: &'a str,
    pub subject: Subject,
    pub attended_classes: i32,
    pub total_classes: i32,
    pub now: time::PrimitiveDateTime,
}

/// Same natural-key discipline as marks: one row per (student, subject).
pub(crate) async fn upsert(
    pool: &PgPool,
    params: UpsertAttendance<'_>,
) -> Result<AttendanceRecord, sqlx::Error> {
    sqlx::query_as::<_, AttendanceRecord>(&format!(
        "INSERT INTO attendance (id, student_id, subject, attended_classes, total_classes, created_at, updated_at)
         VALUES ($1,$2,$3,$4,$5,$6,$6)
         ON CONFLICT (student_id, subject)
         DO UPDATE SET attended_classes = EXCLUDED.attended_classes,
                       total_classes = EXCLUDED.total_classes,
                       updated_at = EXCLUDED.updated_at
         RETURNING {COLUMNS}",
    ))
    .bind(params.id)
    .bind(params.student_id)
    .bind(params.subject)
    .bind(params.attended_classes)
    .bind(params.total_classes)
    .bind(params.now)
    .fetch_one(pool)
    .await
}
