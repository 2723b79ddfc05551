use std::fmt;

use crate::foundation::error::{FolioError, FolioResult};

/// Environment variable holding the deployment base path.
pub const BASE_PATH_ENV: &str = "FOLIO_BASE_PATH";
/// Environment variable selecting the [`ProjectionMode`].
pub const PROJECTION_MODE_ENV: &str = "FOLIO_PROJECTION_MODE";

/// Root URL segment the site is served under, e.g. `/portfolio/`.
///
/// Always starts and ends with exactly one `/`. The root deployment is `/`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BasePath(String);

impl BasePath {
    /// Normalize `raw` into a base path. Blank input falls back to `/`.
    ///
    /// Bases are always absolute: empty, `.` and `..` segments are dropped, so `./` is the root
    /// and `./site` is `/site/`.
    pub fn new(raw: &str) -> Self {
        let segments: Vec<&str> = raw
            .trim()
            .split('/')
            .filter(|seg| !matches!(*seg, "" | "." | ".."))
            .collect();
        if segments.is_empty() {
            return Self::root();
        }
        Self(format!("/{}/", segments.join("/")))
    }

    /// The `/` base path.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Borrow the normalized path.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix `path` with this base, separated by exactly one `/`.
    ///
    /// Paths that already start with the base are returned unchanged.
    pub fn join(&self, path: &str) -> String {
        if path.starts_with(self.0.as_str()) {
            return path.to_string();
        }
        format!("{}{}", self.0, path.trim_start_matches('/'))
    }

    /// Whether `path` already carries this base.
    pub fn is_prefix_of(&self, path: &str) -> bool {
        path.starts_with(self.0.as_str())
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How asset paths are found during projection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    /// Only fields each record declares as asset paths are rebased.
    #[default]
    Declared,
    /// Every string leaf that looks like an asset path is rebased.
    Heuristic,
}

impl ProjectionMode {
    /// Parse a mode name (`declared` / `heuristic`, case-insensitive).
    pub fn parse(raw: &str) -> FolioResult<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "declared" => Ok(Self::Declared),
            "heuristic" => Ok(Self::Heuristic),
            other => Err(FolioError::config(format!(
                "unknown projection mode '{other}'"
            ))),
        }
    }
}

/// Site-wide settings read once at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Deployment base path.
    pub base_path: BasePath,
    /// Asset discovery strategy.
    pub mode: ProjectionMode,
}

impl SiteConfig {
    /// Build a config for `base_path` with the default mode.
    pub fn with_base(base_path: &str) -> Self {
        Self {
            base_path: BasePath::new(base_path),
            mode: ProjectionMode::default(),
        }
    }

    /// Read [`BASE_PATH_ENV`] and [`PROJECTION_MODE_ENV`].
    ///
    /// Missing or unusable values fall back to defaults; this never fails.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_path = lookup(BASE_PATH_ENV)
            .map(|raw| BasePath::new(&raw))
            .unwrap_or_default();

        let mode = match lookup(PROJECTION_MODE_ENV) {
            None => ProjectionMode::default(),
            Some(raw) => ProjectionMode::parse(&raw).unwrap_or_else(|err| {
                tracing::warn!(%err, "falling back to declared projection");
                ProjectionMode::default()
            }),
        };

        Self { base_path, mode }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
