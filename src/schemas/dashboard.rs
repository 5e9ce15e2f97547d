use serde::Serialize;

use crate::schemas::classroom::{AssignmentResponse, MeetLinkResponse, ResourceResponse};
use crate::schemas::student::{StudentReport, StudentSummary};
use crate::schemas::timetable::TimetableSlotResponse;

/// Role-shaped dashboard payload; the variant is fixed by the authenticated
/// role, so a student can never receive (or request) the teacher shape.
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub(crate) enum DashboardResponse {
    Teacher(TeacherDashboard),
    Student(StudentDashboard),
}

#[derive(Debug, Serialize)]
pub(crate) struct TeacherDashboard {
    pub(crate) students: Vec<StudentSummary>,
    pub(crate) assignment_count: usize,
    pub(crate) resource_count: usize,
    pub(crate) meet_link_count: usize,
    pub(crate) timetable_slot_count: usize,
}

#[derive(Debug, Serialize)]
pub(crate) struct StudentDashboard {
    pub(crate) report: StudentReport,
    pub(crate) assignments: Vec<AssignmentResponse>,
    pub(crate) resources: Vec<ResourceResponse>,
    pub(crate) meet_links: Vec<MeetLinkResponse>,
    pub(crate) timetable: Vec<TimetableSlotResponse>,
}
