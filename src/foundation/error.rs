/// Convenience result type used across Folio.
pub type FolioResult<T> = Result<T, FolioError>;

/// Top-level error taxonomy used by the loading and configuration APIs.
///
/// The projection core itself never fails: classification and rebasing are total, and registry
/// misses are reported as `None`.
#[derive(thiserror::Error, Debug)]
pub enum FolioError {
    /// Invalid dataset content.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unusable configuration value.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FolioError {
    /// Build a [`FolioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FolioError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FolioError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
