pub(crate) mod assignments;
pub(crate) mod attendance;
pub(crate) mod marks;
pub(crate) mod meet_links;
pub(crate) mod resources;
pub(crate) mod students;
pub(crate) mod timetable;
pub(crate) mod users;
