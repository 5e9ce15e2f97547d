pub(crate) mod auth;
pub(crate) mod classroom;
pub(crate) mod dashboard;
pub(crate) mod errors;
pub(crate) mod guards;
pub(crate) mod handlers;
pub(crate) mod records;
pub(crate) mod router;
pub(crate) mod students;
pub(crate) mod timetable;
