//! The single mutable collection: product-viz projects with change notification.

pub(crate) mod feed;
pub(crate) mod store;
