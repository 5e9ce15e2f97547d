use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::time::format_primitive;
use crate::db::models::TimetableSlot;
use crate::db::types::{Subject, Weekday};

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct TimetableSlotCreate {
    #[serde(alias = "dayOfWeek")]
    pub(crate) day_of_week: Weekday,
    #[serde(alias = "startTime")]
    #[validate(length(min = 1, message = "start_time must not be empty"))]
    pub(crate) start_time: String,
    #[serde(alias = "endTime")]
    #[validate(length(min = 1, message = "end_time must not be empty"))]
    pub(crate) end_time: String,
    pub(crate) subject: Subject,
    #[serde(default)]
    #[serde(alias = "teacherId")]
    pub(crate) teacher_id: Option<String>,
    #[validate(length(min = 1, message = "room must not be empty"))]
    pub(crate) room: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct TimetableSlotResponse {
    pub(crate) id: String,
    pub(crate) day_of_week: Weekday,
    pub(crate) start_time: String,
    pub(crate) end_time: String,
    pub(crate) subject: Subject,
    pub(crate) teacher_id: Option<String>,
    pub(crate) room: String,
    pub(crate) created_at: String,
}

impl TimetableSlotResponse {
    pub(crate) fn from_db(slot: TimetableSlot) -> Self {
        Self {
            id: slot.id,
            day_of_week: slot.day_of_week,
            start_time: slot.start_time,
            end_time: slot.end_time,
            subject: slot.subject,
            teacher_id: slot.teacher_id,
            room: slot.room,
            created_at: format_primitive(slot.created_at),
        }
    }
}
