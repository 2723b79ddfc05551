//! One-time projection of the raw dataset into the runtime data context.

pub(crate) mod context;
