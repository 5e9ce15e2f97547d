use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime,
};
use validator::Validate;

use crate::core::time::format_primitive;
use crate::db::models::{Assignment, MeetLink, Resource};
use crate::db::types::{MeetStatus, Subject};

const DATE_FORMAT: &[time::format_description::FormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct AssignmentCreate {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub(crate) title: String,
    pub(crate) subject: Subject,
    #[serde(alias = "dueDate", deserialize_with = "deserialize_date")]
    pub(crate) due_date: Date,
    #[serde(default)]
    #[serde(alias = "attachmentName")]
    pub(crate) attachment_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssignmentResponse {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) subject: Subject,
    pub(crate) due_date: String,
    pub(crate) created_by: String,
    pub(crate) attachment_name: Option<String>,
    pub(crate) created_at: String,
}

impl AssignmentResponse {
    pub(crate) fn from_db(assignment: Assignment) -> Self {
        Self {
            id: assignment.id,
            title: assignment.title,
            subject: assignment.subject,
            due_date: format_date(assignment.due_date),
            created_by: assignment.created_by,
            attachment_name: assignment.attachment_name,
            created_at: format_primitive(assignment.created_at),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct ResourceCreate {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub(crate) title: String,
    pub(crate) subject: Subject,
    #[serde(default)]
    #[serde(alias = "fileName")]
    pub(crate) file_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResourceResponse {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) subject: Subject,
    pub(crate) file_name: Option<String>,
    pub(crate) uploaded_by: String,
    pub(crate) created_at: String,
}

impl ResourceResponse {
    pub(crate) fn from_db(resource: Resource) -> Self {
        Self {
            id: resource.id,
            title: resource.title,
            subject: resource.subject,
            file_name: resource.file_name,
            uploaded_by: resource.uploaded_by,
            created_at: format_primitive(resource.created_at),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct MeetLinkCreate {
    pub(crate) subject: Subject,
    #[validate(length(min = 1, message = "link must not be empty"))]
    pub(crate) link: String,
    #[serde(alias = "scheduledTime", deserialize_with = "deserialize_datetime_flexible")]
    pub(crate) scheduled_time: OffsetDateTime,
    #[serde(default = "default_meet_status")]
    pub(crate) status: MeetStatus,
}

#[derive(Debug, Serialize)]
pub(crate) struct MeetLinkResponse {
    pub(crate) id: String,
    pub(crate) subject: Subject,
    pub(crate) teacher_id: String,
    pub(crate) link: String,
    pub(crate) scheduled_time: String,
    pub(crate) status: MeetStatus,
    pub(crate) created_at: String,
}

impl MeetLinkResponse {
    pub(crate) fn from_db(meet: MeetLink) -> Self {
        Self {
            id: meet.id,
            subject: meet.subject,
            teacher_id: meet.teacher_id,
            link: meet.link,
            scheduled_time: format_primitive(meet.scheduled_time),
            status: meet.status,
            created_at: format_primitive(meet.created_at),
        }
    }
}

pub(crate) fn format_date(value: Date) -> String {
    value.format(&DATE_FORMAT).unwrap_or_else(|_| value.to_string())
}

fn default_meet_status() -> MeetStatus {
    MeetStatus::Live
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<Date, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Date::parse(raw.trim(), &DATE_FORMAT)
        .map_err(|_| D::Error::custom(format!("invalid date: {raw}")))
}

fn parse_datetime_flexible(raw: &str) -> Option<OffsetDateTime> {
    if let Ok(value) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(value);
    }

    // datetime-local inputs come without a timezone.
    if let Ok(value) =
        PrimitiveDateTime::parse(raw, &format_description!("[year]-[month]-[day]T[hour]:[minute]"))
    {
        return Some(value.assume_utc());
    }
    if let Ok(value) = PrimitiveDateTime::parse(
        raw,
        &format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    ) {
        return Some(value.assume_utc());
    }

    None
}

fn deserialize_datetime_flexible<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_datetime_flexible(raw.trim())
        .ok_or_else(|| D::Error::custom(format!("invalid datetime: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_create_parses_plain_date() {
        let payload: AssignmentCreate = serde_json::from_str(
            r#"{"title":"Sorting worksheet","subject":"DSA","dueDate":"2025-10-01"}"#,
        )
        .unwrap();
        assert_eq!(format_date(payload.due_date), "2025-10-01");
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn meet_link_accepts_datetime_local_and_rfc3339() {
        let local: MeetLinkCreate = serde_json::from_str(
            r#"{"subject":"Maths","link":"https://meet.example/abc","scheduledTime":"2025-10-01T09:00"}"#,
        )
        .unwrap();
        assert_eq!(local.status, MeetStatus::Live);

        let rfc: MeetLinkCreate = serde_json::from_str(
            r#"{"subject":"Maths","link":"https://meet.example/abc","scheduledTime":"2025-10-01T09:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(rfc.scheduled_time, local.scheduled_time);
    }

    #[test]
    fn invalid_date_is_rejected() {
        let result: Result<AssignmentCreate, _> = serde_json::from_str(
            r#"{"title":"x","subject":"COA","dueDate":"tomorrow"}"#,
        );
        assert!(result.is_err());
    }
}
