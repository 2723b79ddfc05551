use std::collections::BTreeMap;

use crate::assets::rebase::{RebaseAssets, rebase_opt_path, rebase_path, rebase_path_map};
use crate::foundation::config::BasePath;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A gallery entry (game prop, archviz scene or product visualization).
pub struct Project {
    /// Identifier, unique within its collection.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Card image path.
    #[serde(default)]
    pub thumbnail: String,
    /// Named views (`rendered`, `wireframe`, `uv`, `exterior`, ...) to image paths.
    #[serde(default)]
    pub images: BTreeMap<String, String>,
    /// Optional binary glTF model path for the 3D viewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glb: Option<String>,
    /// Open set of display attributes (poly count, status, client, year, ...).
    #[serde(default)]
    pub specs: BTreeMap<String, serde_json::Value>,
    /// Tools used, in display order.
    #[serde(default)]
    pub software: Vec<String>,
    /// Gallery category label.
    #[serde(default)]
    pub category: String,
    /// ISO date work started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// ISO date work finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    /// ISO date the entry was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl RebaseAssets for Project {
    fn rebase_assets(&mut self, base: &BasePath) -> usize {
        rebase_path(&mut self.thumbnail, base)
            + rebase_path_map(&mut self.images, base)
            + rebase_opt_path(&mut self.glb, base)
    }
}

/// Partial update for a [`Project`]; `None` fields keep their current value.
///
/// The `id` is not patchable.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New thumbnail path.
    pub thumbnail: Option<String>,
    /// Replacement view map.
    pub images: Option<BTreeMap<String, String>>,
    /// New model path.
    pub glb: Option<String>,
    /// Replacement specs map.
    pub specs: Option<BTreeMap<String, serde_json::Value>>,
    /// Replacement tool list.
    pub software: Option<Vec<String>>,
    /// New category.
    pub category: Option<String>,
    /// New start date.
    pub start_date: Option<String>,
    /// New completion date.
    pub completed_at: Option<String>,
    /// New creation date.
    pub created_at: Option<String>,
}

impl ProjectPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow merge: fields set in the patch replace those of `project`.
    pub fn apply_to(self, project: &Project) -> Project {
        Project {
            id: project.id.clone(),
            title: self.title.unwrap_or_else(|| project.title.clone()),
            description: self
                .description
                .unwrap_or_else(|| project.description.clone()),
            thumbnail: self.thumbnail.unwrap_or_else(|| project.thumbnail.clone()),
            images: self.images.unwrap_or_else(|| project.images.clone()),
            glb: self.glb.or_else(|| project.glb.clone()),
            specs: self.specs.unwrap_or_else(|| project.specs.clone()),
            software: self.software.unwrap_or_else(|| project.software.clone()),
            category: self.category.unwrap_or_else(|| project.category.clone()),
            start_date: self.start_date.or_else(|| project.start_date.clone()),
            completed_at: self.completed_at.or_else(|| project.completed_at.clone()),
            created_at: self.created_at.or_else(|| project.created_at.clone()),
        }
    }
}

impl RebaseAssets for ProjectPatch {
    fn rebase_assets(&mut self, base: &BasePath) -> usize {
        rebase_opt_path(&mut self.thumbnail, base)
            + self
                .images
                .as_mut()
                .map_or(0, |images| rebase_path_map(images, base))
            + rebase_opt_path(&mut self.glb, base)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/project.rs"]
mod tests;
