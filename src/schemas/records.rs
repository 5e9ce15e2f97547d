use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::time::format_primitive;
use crate::db::models::{AttendanceRecord, Mark};
use crate::db::types::Subject;
use crate::services::reporting::{self, PerformanceBand};

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct MarkUpdate {
    pub(crate) subject: Subject,
    #[serde(alias = "marksObtained")]
    #[validate(range(min = 0, max = 100, message = "marks_obtained must be within 0..=100"))]
    pub(crate) marks_obtained: i32,
    #[serde(default = "default_total_marks")]
    #[serde(alias = "totalMarks")]
    #[validate(range(min = 1, message = "total_marks must be positive"))]
    pub(crate) total_marks: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct AttendanceUpdate {
    pub(crate) subject: Subject,
    #[serde(alias = "attendedClasses")]
    #[validate(range(min = 0, message = "attended_classes must be non-negative"))]
    pub(crate) attended_classes: i32,
    #[serde(alias = "totalClasses")]
    #[validate(range(min = 0, message = "total_classes must be non-negative"))]
    pub(crate) total_classes: i32,
}

impl AttendanceUpdate {
    /// `validator` ranges cover each field alone; the cross-field invariant
    /// lives here.
    pub(crate) fn attended_within_total(&self) -> bool {
        self.attended_classes <= self.total_classes
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct MarkResponse {
    pub(crate) id: String,
    pub(crate) student_id: String,
    pub(crate) subject: Subject,
    pub(crate) marks_obtained: i32,
    pub(crate) total_marks: i32,
    pub(crate) updated_at: String,
}

impl MarkResponse {
    pub(crate) fn from_db(mark: Mark) -> Self {
        Self {
            id: mark.id,
            student_id: mark.student_id,
            subject: mark.subject,
            marks_obtained: mark.marks_obtained,
            total_marks: mark.total_marks,
            updated_at: format_primitive(mark.updated_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AttendanceResponse {
    pub(crate) id: String,
    pub(crate) student_id: String,
    pub(crate) subject: Subject,
    pub(crate) attended_classes: i32,
    pub(crate) total_classes: i32,
    pub(crate) percentage: i32,
    pub(crate) status: PerformanceBand,
    pub(crate) updated_at: String,
}

impl AttendanceResponse {
    pub(crate) fn from_db(record: AttendanceRecord) -> Self {
        let percentage =
            reporting::attendance_percentage(record.attended_classes, record.total_classes);
        Self {
            id: record.id,
            student_id: record.student_id,
            subject: record.subject,
            attended_classes: record.attended_classes,
            total_classes: record.total_classes,
            percentage,
            status: PerformanceBand::for_percentage(percentage),
            updated_at: format_primitive(record.updated_at),
        }
    }
}

fn default_total_marks() -> i32 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_update_range_is_enforced() {
        let payload: MarkUpdate =
            serde_json::from_str(r#"{"subject":"Maths","marks_obtained":101}"#).unwrap();
        assert!(payload.validate().is_err());

        let payload: MarkUpdate =
            serde_json::from_str(r#"{"subject":"Maths","marks_obtained":70}"#).unwrap();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.total_marks, 100);
    }

    #[test]
    fn attendance_update_checks_attended_within_total() {
        let payload: AttendanceUpdate = serde_json::from_str(
            r#"{"subject":"DSA","attended_classes":10,"total_classes":5}"#,
        )
        .unwrap();
        assert!(payload.validate().is_ok());
        assert!(!payload.attended_within_total());
    }
}
