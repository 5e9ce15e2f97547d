use serde::{Deserialize, Serialize};

use crate::core::time::format_primitive;
use crate::db::models::{AttendanceRecord, Mark, Student};
use crate::services::reporting::{self, PerformanceBand, SubjectAttendance, SubjectMarks};

/// Teacher's add-student form.
#[derive(Debug, Deserialize)]
pub(crate) struct StudentCreate {
    #[serde(alias = "fullName")]
    pub(crate) full_name: String,
    pub(crate) email: String,
    pub(crate) password: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct StudentResponse {
    pub(crate) id: String,
    pub(crate) user_id: String,
    pub(crate) full_name: String,
    pub(crate) email: String,
    pub(crate) created_at: String,
}

impl StudentResponse {
    pub(crate) fn from_db(student: Student) -> Self {
        Self {
            id: student.id,
            user_id: student.user_id,
            full_name: student.full_name,
            email: student.email,
            created_at: format_primitive(student.created_at),
        }
    }
}

/// One row of the teacher's student list: the student plus the two derived
/// headline figures.
#[derive(Debug, Serialize)]
pub(crate) struct StudentSummary {
    pub(crate) id: String,
    pub(crate) user_id: String,
    pub(crate) full_name: String,
    pub(crate) email: String,
    pub(crate) average_marks: i32,
    pub(crate) average_attendance: i32,
}

impl StudentSummary {
    pub(crate) fn build(
        student: Student,
        marks: &[Mark],
        attendance: &[AttendanceRecord],
    ) -> Self {
        let marks = reporting::marks_by_subject(marks);
        let attendance = reporting::attendance_by_subject(attendance);
        Self {
            id: student.id,
            user_id: student.user_id,
            full_name: student.full_name,
            email: student.email,
            average_marks: reporting::average_marks(&marks),
            average_attendance: reporting::average_attendance(&attendance),
        }
    }
}

/// Full per-subject report for one student, total over the subject enum.
#[derive(Debug, Serialize)]
pub(crate) struct StudentReport {
    pub(crate) student: StudentResponse,
    pub(crate) marks: Vec<SubjectMarks>,
    pub(crate) attendance: Vec<SubjectAttendance>,
    pub(crate) average_marks: i32,
    pub(crate) average_attendance: i32,
    pub(crate) overall_status: PerformanceBand,
}

impl StudentReport {
    pub(crate) fn build(
        student: Student,
        marks: &[Mark],
        attendance: &[AttendanceRecord],
    ) -> Self {
        let marks = reporting::marks_by_subject(marks);
        let attendance = reporting::attendance_by_subject(attendance);
        let average_marks = reporting::average_marks(&marks);
        let average_attendance = reporting::average_attendance(&attendance);
        Self {
            student: StudentResponse::from_db(student),
            marks,
            attendance,
            average_marks,
            average_attendance,
            overall_status: PerformanceBand::for_percentage(average_attendance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::primitive_now_utc;
    use crate::db::types::Subject;

    fn student() -> Student {
        Student {
            id: "student-1".to_string(),
            user_id: "user-1".to_string(),
            full_name: "Alice".to_string(),
            email: "alice@gmail.com".to_string(),
            created_at: primitive_now_utc(),
        }
    }

    #[test]
    fn report_is_total_over_subjects_with_no_rows() {
        let report = StudentReport::build(student(), &[], &[]);
        assert_eq!(report.marks.len(), 4);
        assert_eq!(report.attendance.len(), 4);
        assert_eq!(report.average_marks, 0);
        assert_eq!(report.average_attendance, 0);
        assert_eq!(report.overall_status, PerformanceBand::Critical);
    }

    #[test]
    fn summary_derives_scenario_averages() {
        let now = primitive_now_utc();
        let marks: Vec<Mark> = [
            (Subject::Maths, 85),
            (Subject::App, 92),
            (Subject::Coa, 78),
            (Subject::Dsa, 88),
        ]
        .into_iter()
        .map(|(subject, obtained)| Mark {
            id: format!("m-{}", subject.as_str()),
            student_id: "student-1".to_string(),
            subject,
            marks_obtained: obtained,
            total_marks: 100,
            created_at: now,
            updated_at: now,
        })
        .collect();

        let summary = StudentSummary::build(student(), &marks, &[]);
        assert_eq!(summary.average_marks, 86);
        assert_eq!(summary.average_attendance, 0);
    }
}
