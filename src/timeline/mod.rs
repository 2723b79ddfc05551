//! Proportional layout of experience date ranges for the resume timeline.

pub(crate) mod layout;
