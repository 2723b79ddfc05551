use crate::assets::classify::is_asset_path;
use crate::assets::rebase::{RebaseAssets, rebase_opt_path, rebase_path};
use crate::foundation::config::BasePath;

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A downloadable tool listed on the plugins page.
pub struct Plugin {
    /// Identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short pitch.
    #[serde(default)]
    pub description: String,
    /// Emoji or icon image path.
    #[serde(default)]
    pub icon: String,
    /// External download link.
    #[serde(default)]
    pub download_url: String,
    /// Grouping label.
    #[serde(default)]
    pub category: String,
}

impl RebaseAssets for Plugin {
    fn rebase_assets(&mut self, base: &BasePath) -> usize {
        // Emoji icons stay as-is.
        if is_asset_path(&self.icon) {
            rebase_path(&mut self.icon, base)
        } else {
            0
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A blog article.
pub struct BlogPost {
    /// Identifier (also the URL slug).
    pub id: String,
    /// Headline.
    pub title: String,
    /// Teaser shown on the index page.
    #[serde(default)]
    pub excerpt: String,
    /// Markdown-like body; see [`crate::parse_blocks`].
    #[serde(default)]
    pub content: String,
    /// Header image path.
    #[serde(default)]
    pub cover_image: String,
    /// Grouping label.
    #[serde(default)]
    pub category: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// ISO publication date.
    #[serde(default)]
    pub published_at: String,
}

impl RebaseAssets for BlogPost {
    fn rebase_assets(&mut self, base: &BasePath) -> usize {
        rebase_path(&mut self.cover_image, base)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A video in the showreel section.
pub struct ShowreelEntry {
    /// Identifier.
    pub id: String,
    /// Video path or URL; `videoUrl` is accepted on input.
    #[serde(alias = "videoUrl")]
    pub video: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Caption.
    #[serde(default)]
    pub description: String,
    /// Poster frame path; `thumbnail` is accepted on input.
    #[serde(default, alias = "thumbnail", skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

impl RebaseAssets for ShowreelEntry {
    fn rebase_assets(&mut self, base: &BasePath) -> usize {
        rebase_path(&mut self.video, base) + rebase_opt_path(&mut self.poster, base)
    }
}
