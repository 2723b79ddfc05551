use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{FolioError, FolioResult};
use crate::model::profile::{AboutData, ContactInfo, MAX_SKILL_LEVEL, ResumeData, Skill};
use crate::model::project::Project;
use crate::model::publishing::{BlogPost, Plugin, ShowreelEntry};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// The full static site dataset as bundled at build time.
///
/// Every section is optional in JSON and defaults to empty.
pub struct Dataset {
    /// Game prop gallery.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// About page.
    #[serde(default)]
    pub about: AboutData,
    /// Resume page.
    #[serde(default)]
    pub resume: ResumeData,
    /// Contact page.
    #[serde(default)]
    pub contact: ContactInfo,
    /// Plugins page.
    #[serde(default)]
    pub plugins: Vec<Plugin>,
    /// Blog.
    #[serde(default)]
    pub posts: Vec<BlogPost>,
    /// Showreel videos.
    #[serde(default)]
    pub showreel: Vec<ShowreelEntry>,
    /// Architectural visualization gallery.
    #[serde(default)]
    pub archviz_projects: Vec<Project>,
    /// Product visualization gallery.
    #[serde(default)]
    pub product_viz_projects: Vec<Project>,
}

impl Dataset {
    /// Parse a dataset from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        serde_json::from_reader(r).map_err(|e| FolioError::serde(format!("parse dataset JSON: {e}")))
    }

    /// Parse a dataset from a JSON file on disk.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> FolioResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open dataset '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Build a dataset from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> FolioResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| FolioError::serde(format!("decode dataset value: {e}")))
    }

    /// Check record-level invariants.
    ///
    /// Ids must be non-empty and skill levels at most [`MAX_SKILL_LEVEL`]. Duplicate ids are
    /// tolerated and only logged.
    pub fn validate(&self) -> FolioResult<()> {
        check_ids("projects", self.projects.iter().map(|p| p.id.as_str()))?;
        check_ids("archvizProjects", self.archviz_projects.iter().map(|p| p.id.as_str()))?;
        check_ids(
            "productVizProjects",
            self.product_viz_projects.iter().map(|p| p.id.as_str()),
        )?;
        check_ids("about.experience", self.about.experience.iter().map(|e| e.id.as_str()))?;
        check_ids("resume.experience", self.resume.experience.iter().map(|e| e.id.as_str()))?;
        check_ids("resume.education", self.resume.education.iter().map(|e| e.id.as_str()))?;
        check_ids("plugins", self.plugins.iter().map(|p| p.id.as_str()))?;
        check_ids("posts", self.posts.iter().map(|p| p.id.as_str()))?;
        check_ids("showreel", self.showreel.iter().map(|s| s.id.as_str()))?;

        check_ids("about.skills", self.about.skills.iter().map(|s| s.id.as_str()))?;
        check_ids("resume.skills", self.resume.skills.iter().map(|s| s.id.as_str()))?;

        check_skills("about.skills", &self.about.skills)?;
        check_skills("resume.skills", &self.resume.skills)?;
        Ok(())
    }
}

fn check_ids<'a>(section: &str, ids: impl Iterator<Item = &'a str>) -> FolioResult<()> {
    let mut seen = HashSet::new();
    for (i, id) in ids.enumerate() {
        if id.trim().is_empty() {
            return Err(FolioError::validation(format!(
                "{section}[{i}] has an empty id"
            )));
        }
        if !seen.insert(id) {
            tracing::warn!(section, id, "duplicate id");
        }
    }
    Ok(())
}

fn check_skills(section: &str, skills: &[Skill]) -> FolioResult<()> {
    for skill in skills {
        if skill.level > MAX_SKILL_LEVEL {
            return Err(FolioError::validation(format!(
                "{section}: skill '{}' has level {} (max {MAX_SKILL_LEVEL})",
                skill.id, skill.level
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/model/dataset.rs"]
mod tests;
