use std::collections::BTreeMap;

use crate::assets::rebase::{RebaseAssets, rebase_path};
use crate::foundation::config::BasePath;

/// Highest valid [`Skill::level`].
pub const MAX_SKILL_LEVEL: u8 = 100;

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// About page content.
pub struct AboutData {
    /// Free-text biography.
    #[serde(default)]
    pub bio: String,
    /// Portrait image path.
    #[serde(default)]
    pub profile_image: String,
    /// Work history, most relevant first.
    #[serde(default)]
    pub experience: Vec<Experience>,
    /// Skill bars.
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl RebaseAssets for AboutData {
    fn rebase_assets(&mut self, base: &BasePath) -> usize {
        rebase_path(&mut self.profile_image, base)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Resume page content.
pub struct ResumeData {
    /// Education history.
    #[serde(default)]
    pub education: Vec<Education>,
    /// Work history.
    #[serde(default)]
    pub experience: Vec<Experience>,
    /// Skill bars.
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Certification names.
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl RebaseAssets for ResumeData {
    fn rebase_assets(&mut self, _base: &BasePath) -> usize {
        0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One position held.
///
/// Dates are display strings; `endDate` may be `"Present"`.
pub struct Experience {
    /// Identifier.
    pub id: String,
    /// Role title.
    pub title: String,
    /// Employer.
    #[serde(default)]
    pub company: String,
    /// Location label.
    #[serde(default)]
    pub location: String,
    /// Start date string.
    #[serde(default)]
    pub start_date: String,
    /// End date string.
    #[serde(default)]
    pub end_date: String,
    /// Summary.
    #[serde(default)]
    pub description: String,
    /// Bullet points.
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One education entry.
pub struct Education {
    /// Identifier.
    pub id: String,
    /// Degree or program name.
    pub degree: String,
    /// School.
    #[serde(default)]
    pub institution: String,
    /// Location label.
    #[serde(default)]
    pub location: String,
    /// Start date string.
    #[serde(default)]
    pub start_date: String,
    /// End date string.
    #[serde(default)]
    pub end_date: String,
    /// Summary.
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Skill grouping.
pub enum SkillCategory {
    /// A software package.
    Software,
    /// A craft skill (modeling, texturing, lighting, ...).
    #[default]
    Skill,
    /// A spoken language.
    Language,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A rated skill.
pub struct Skill {
    /// Identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Proficiency in `0..=100`.
    pub level: u8,
    /// Grouping.
    #[serde(default)]
    pub category: SkillCategory,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Contact page content.
pub struct ContactInfo {
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Location label.
    #[serde(default)]
    pub location: String,
    /// Platform name to profile URL.
    #[serde(default)]
    pub social: BTreeMap<String, String>,
}

impl RebaseAssets for ContactInfo {
    fn rebase_assets(&mut self, _base: &BasePath) -> usize {
        0
    }
}
