pub(crate) mod reporting;
pub(crate) mod validation;
