use serde::{Deserialize, Serialize};
use sqlx::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "userrole", rename_all = "lowercase")]
pub(crate) enum UserRole {
    Teacher,
    Student,
}

/// The closed set of course identifiers; derivations iterate `Subject::ALL`
/// and must stay total over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[sqlx(type_name = "subject")]
pub(crate) enum Subject {
    #[serde(rename = "Maths")]
    #[sqlx(rename = "Maths")]
    Maths,
    #[serde(rename = "APP")]
    #[sqlx(rename = "APP")]
    App,
    #[serde(rename = "COA")]
    #[sqlx(rename = "COA")]
    Coa,
    #[serde(rename = "DSA")]
    #[sqlx(rename = "DSA")]
    Dsa,
}

impl Subject {
    pub(crate) const ALL: [Subject; 4] = [Subject::Maths, Subject::App, Subject::Coa, Subject::Dsa];

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Subject::Maths => "Maths",
            Subject::App => "APP",
            Subject::Coa => "COA",
            Subject::Dsa => "DSA",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "meetstatus", rename_all = "lowercase")]
pub(crate) enum MeetStatus {
    Live,
    Upcoming,
    Scheduled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "weekday")]
pub(crate) enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_serde_uses_display_names() {
        assert_eq!(serde_json::to_string(&Subject::App).unwrap(), "\"APP\"");
        assert_eq!(serde_json::from_str::<Subject>("\"DSA\"").unwrap(), Subject::Dsa);
    }

    #[test]
    fn subject_all_covers_four_subjects() {
        assert_eq!(Subject::ALL.len(), 4);
        assert_eq!(Subject::ALL[0].as_str(), "Maths");
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Teacher).unwrap(), "\"teacher\"");
    }
}
