//! Structural asset-path rewriting over untyped JSON values.

pub(crate) mod deep;
