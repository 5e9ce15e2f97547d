use sqlx::PgPool;

use crate::db::models::Mark;
use crate::db::types::Subject;

const COLUMNS: &str =
    "id, student_id, subject, marks_obtained, total_marks, created_at, updated_at";

pub(crate) async fn list_by_student(
    pool: &PgPool,
    student_id: &str,
) -> Result<Vec<Mark>, sqlx::Error> {
    sqlx::query_as::<_, Mark>(&format!(
        "SELECT {COLUMNS} FROM marks WHERE student_id = $1 ORDER BY subject"
    ))
    .bind(student_id)
    .fetch_all(pool)
    .await
}

pub(crate) struct UpsertMark<'a> {
    pub id: &'a str,
    pub student_id: &'a str,
    pub subject: Subject,
    pub marks_obtained: i32,
    pub total_marks: i32,
    pub now: time::PrimitiveDateTime,
}

/// Upsert keyed on (student_id, subject): the first write inserts, later
/// writes update the existing row in place and keep its id.
pub(crate) async fn upsert(pool: &PgPool, params: UpsertMark<'_>) -> Result<Mark, sqlx::Error> {
    sqlx::query_as::<_, Mark>(&format!(
        "INSERT INTO marks (id, student_id, subject, marks_obtained, total_marks, created_at, updated_at)
         VALUES ($1,$2,$3,$4,$5,$6,$6)
         ON CONFLICT (student_id, subject)
         DO UPDATE SET marks_obtained = EXCLUDED.marks_obtained,
                       total_marks = EXCLUDED.total_marks,
                       updated_at = EXCLUDED.updated_at
         RETURNING {COLUMNS}",
    ))
    .bind(params.id)
    .bind(params.student_id)
    .bind(params.subject)
    .bind(params.marks_obtained)
    .bind(params.total_marks)
    .bind(params.now)
    .fetch_one(pool)
    .await
}
