use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, PrimitiveDateTime};

use crate::db::types::{MeetStatus, Subject, UserRole, Weekday};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct User {
    pub(crate) id: String,
    pub(crate) email: String,
    pub(crate) hashed_password: String,
    pub(crate) full_name: String,
    pub(crate) role: UserRole,
    pub(crate) is_active: bool,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Student {
    pub(crate) id: String,
    pub(crate) user_id: String,
    pub(crate) full_name: String,
    pub(crate) email: String,
    pub(crate) created_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Mark {
    pub(crate) id: String,
    pub(crate) student_id: String,
    pub(crate) subject: Subject,
    pub(crate) marks_obtained: i32,
    pub(crate) total_marks: i32,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct AttendanceRecord {
    pub(crate) id: String,
    pub(crate) student_id: String,
    pub(crate) subject: Subject,
    pub(crate) attended_classes: i32,
    pub(crate) total_classes: i32,
    pub(crate) created_at: PrimitiveDateTime,
    pub(crate) updated_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Assignment {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) subject: Subject,
    pub(crate) due_date: Date,
    pub(crate) created_by: String,
    pub(crate) attachment_name: Option<String>,
    pub(crate) created_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct Resource {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) subject: Subject,
    pub(crate) file_name: Option<String>,
    pub(crate) uploaded_by: String,
    pub(crate) created_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct MeetLink {
    pub(crate) id: String,
    pub(crate) subject: Subject,
    pub(crate) teacher_id: String,
    pub(crate) link: String,
    pub(crate) scheduled_time: PrimitiveDateTime,
    pub(crate) status: MeetStatus,
    pub(crate) created_at: PrimitiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub(crate) struct TimetableSlot {
    pub(crate) id: String,
    pub(crate) day_of_week: Weekday,
    pub(crate) start_time: String,
    pub(crate) end_time: String,
    pub(crate) subject: Subject,
    pub(crate) teacher_id: Option<String>,
    pub(crate) room: String,
    pub(crate) created_at: PrimitiveDateTime,
}
