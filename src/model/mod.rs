pub(crate) mod dataset;
pub(crate) mod profile;
pub(crate) mod project;
pub(crate) mod publishing;
