use std::collections::BTreeMap;

use crate::assets::classify::is_external;
use crate::foundation::config::BasePath;

/// Records that know which of their fields hold asset paths.
///
/// Implementations rebase exactly the fields they declare and leave every other field alone.
pub trait RebaseAssets {
    /// Prefix declared asset fields with `base`; returns how many strings changed.
    fn rebase_assets(&mut self, base: &BasePath) -> usize;
}

impl<T: RebaseAssets> RebaseAssets for Vec<T> {
    fn rebase_assets(&mut self, base: &BasePath) -> usize {
        self.iter_mut().map(|item| item.rebase_assets(base)).sum()
    }
}

impl<T: RebaseAssets> RebaseAssets for Option<T> {
    fn rebase_assets(&mut self, base: &BasePath) -> usize {
        self.as_mut().map_or(0, |item| item.rebase_assets(base))
    }
}

/// Rebase one declared asset field in place.
///
/// Empty strings, external references and already-based paths are untouched.
pub fn rebase_path(path: &mut String, base: &BasePath) -> usize {
    if path.is_empty() || is_external(path) || base.is_prefix_of(path) {
        return 0;
    }
    *path = base.join(path);
    1
}

pub(crate) fn rebase_opt_path(path: &mut Option<String>, base: &BasePath) -> usize {
    path.as_mut().map_or(0, |p| rebase_path(p, base))
}

pub(crate) fn rebase_path_map(paths: &mut BTreeMap<String, String>, base: &BasePath) -> usize {
    paths.values_mut().map(|p| rebase_path(p, base)).sum()
}

#[cfg(test)]
#[path = "../../tests/unit/assets/rebase.rs"]
mod tests;
