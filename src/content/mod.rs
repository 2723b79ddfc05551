//! Blog post body parsing.

pub(crate) mod blocks;
