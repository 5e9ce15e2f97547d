use serde::Serialize;

use crate::db::models::{AttendanceRecord, Mark};
use crate::db::types::Subject;

const GOOD_THRESHOLD: i32 = 75;
const WARNING_THRESHOLD: i32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum PerformanceBand {
    Good,
    Warning,
    Critical,
}

impl PerformanceBand {
    pub(crate) fn for_percentage(percentage: i32) -> Self {
        if percentage >= GOOD_THRESHOLD {
            PerformanceBand::Good
        } else if percentage >= WARNING_THRESHOLD {
            PerformanceBand::Warning
        } else {
            PerformanceBand::Critical
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SubjectMarks {
    pub(crate) subject: Subject,
    pub(crate) marks_obtained: i32,
    pub(crate) total_marks: i32,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SubjectAttendance {
    pub(crate) subject: Subject,
    pub(crate) attended_classes: i32,
    pub(crate) total_classes: i32,
    pub(crate) percentage: i32,
    pub(crate) status: PerformanceBand,
}

/// Materializes one entry per subject in the fixed enum, defaulting to zero
/// marks out of 100 when no row exists for a subject.
pub(crate) fn marks_by_subject(rows: &[Mark]) -> Vec<SubjectMarks> {
    Subject::ALL
        .iter()
        .map(|&subject| {
            let row = rows.iter().find(|row| row.subject == subject);
            SubjectMarks {
                subject,
                marks_obtained: row.map_or(0, |row| row.marks_obtained),
                total_marks: row.map_or(100, |row| row.total_marks),
            }
        })
        .collect()
}

/// Same materialization for attendance; missing subjects count as 0/0, which
/// derives to a 0% entry rather than an absent one.
pub(crate) fn attendance_by_subject(rows: &[AttendanceRecord]) -> Vec<SubjectAttendance> {
    Subject::ALL
        .iter()
        .map(|&subject| {
            let row = rows.iter().find(|row| row.subject == subject);
            let attended = row.map_or(0, |row| row.attended_classes);
            let total = row.map_or(0, |row| row.total_classes);
            let percentage = attendance_percentage(attended, total);
            SubjectAttendance {
                subject,
                attended_classes: attended,
                total_classes: total,
                percentage,
                status: PerformanceBand::for_percentage(percentage),
            }
        })
        .collect()
}

pub(crate) fn average_marks(marks: &[SubjectMarks]) -> i32 {
    if marks.is_empty() {
        return 0;
    }
    let sum: i32 = marks.iter().map(|entry| entry.marks_obtained).sum();
    (f64::from(sum) / marks.len() as f64).round() as i32
}

pub(crate) fn attendance_percentage(attended: i32, total: i32) -> i32 {
    if total <= 0 {
        return 0;
    }
    (100.0 * f64::from(attended) / f64::from(total)).round() as i32
}

/// Mean of the per-subject percentages over the fixed four-subject domain.
/// The divisor stays `Subject::ALL.len()` even when some subjects have no
/// recorded classes; those contribute a 0% entry.
pub(crate) fn average_attendance(entries: &[SubjectAttendance]) -> i32 {
    if entries.is_empty() {
        return 0;
    }
    let sum: i32 = entries.iter().map(|entry| entry.percentage).sum();
    (f64::from(sum) / Subject::ALL.len() as f64).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::primitive_now_utc;

    fn mark(subject: Subject, obtained: i32) -> Mark {
        let now = primitive_now_utc();
        Mark {
            id: format!("m-{}", subject.as_str()),
            student_id: "student-1".to_string(),
            subject,
            marks_obtained: obtained,
            total_marks: 100,
            created_at: now,
            updated_at: now,
        }
    }

    fn attendance(subject: Subject, attended: i32, total: i32) -> AttendanceRecord {
        let now = primitive_now_utc();
        AttendanceRecord {
            id: format!("a-{}", subject.as_str()),
            student_id: "student-1".to_string(),
            subject,
            attended_classes: attended,
            total_classes: total,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn attendance_percentage_guards_divide_by_zero() {
        assert_eq!(attendance_percentage(0, 0), 0);
        assert_eq!(attendance_percentage(5, 0), 0);
    }

    #[test]
    fn attendance_percentage_rounds() {
        assert_eq!(attendance_percentage(40, 45), 89);
        assert_eq!(attendance_percentage(1, 3), 33);
    }

    #[test]
    fn average_marks_empty_is_zero() {
        assert_eq!(average_marks(&[]), 0);
    }

    #[test]
    fn average_marks_rounds_over_all_subjects() {
        let rows = vec![
            mark(Subject::Maths, 85),
            mark(Subject::App, 92),
            mark(Subject::Coa, 78),
            mark(Subject::Dsa, 88),
        ];
        let materialized = marks_by_subject(&rows);
        assert_eq!(average_marks(&materialized), 86);
    }

    #[test]
    fn marks_by_subject_fills_missing_subjects_with_zero() {
        let rows = vec![mark(Subject::Maths, 70)];
        let materialized = marks_by_subject(&rows);
        assert_eq!(materialized.len(), 4);
        assert_eq!(materialized[0].marks_obtained, 70);
        assert_eq!(materialized[1].marks_obtained, 0);
        assert_eq!(materialized[1].total_marks, 100);
    }

    #[test]
    fn average_attendance_uses_fixed_divisor() {
        // Only one subject has data; the other three still divide the mean.
        let rows = vec![attendance(Subject::Maths, 9, 10)];
        let materialized = attendance_by_subject(&rows);
        assert_eq!(average_attendance(&materialized), 23);
    }

    #[test]
    fn attendance_entries_carry_status_band() {
        let rows = vec![
            attendance(Subject::Maths, 75, 100),
            attendance(Subject::App, 60, 100),
            attendance(Subject::Coa, 59, 100),
        ];
        let materialized = attendance_by_subject(&rows);
        assert_eq!(materialized[0].status, PerformanceBand::Good);
        assert_eq!(materialized[1].status, PerformanceBand::Warning);
        assert_eq!(materialized[2].status, PerformanceBand::Critical);
        assert_eq!(materialized[3].status, PerformanceBand::Critical);
    }

    #[test]
    fn band_thresholds_are_inclusive() {
        assert_eq!(PerformanceBand::for_percentage(75), PerformanceBand::Good);
        assert_eq!(PerformanceBand::for_percentage(74), PerformanceBand::Warning);
        assert_eq!(PerformanceBand::for_percentage(60), PerformanceBand::Warning);
        assert_eq!(PerformanceBand::for_percentage(59), PerformanceBand::Critical);
    }
}
