use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::assets::rebase::RebaseAssets;
use crate::foundation::config::{ProjectionMode, SiteConfig};
use crate::foundation::error::{FolioError, FolioResult};
use crate::model::dataset::Dataset;
use crate::model::profile::{AboutData, ContactInfo, ResumeData};
use crate::model::project::Project;
use crate::model::publishing::{BlogPost, Plugin, ShowreelEntry};
use crate::normalize::deep::normalize_value_counted;
use crate::registry::store::ProjectRegistry;

/// Runtime-ready site data, built once at startup and handed to every page.
///
/// All collections are read-only except the product-viz registry.
#[derive(Debug)]
pub struct DataContext {
    config: SiteConfig,
    projects: Vec<Project>,
    about: AboutData,
    resume: ResumeData,
    contact: ContactInfo,
    plugins: Vec<Plugin>,
    posts: Vec<BlogPost>,
    showreel: Vec<ShowreelEntry>,
    archviz_projects: Vec<Project>,
    product_viz_projects: Vec<Project>,
    product_viz: ProjectRegistry,
}

impl DataContext {
    /// Project every section of `dataset` onto `config.base_path`.
    ///
    /// The input is not modified. Sections are processed in declaration order.
    #[tracing::instrument(skip(dataset, config), fields(base = %config.base_path, mode = ?config.mode))]
    pub fn project(dataset: &Dataset, config: &SiteConfig) -> FolioResult<Self> {
        let mut rewritten = 0usize;
        let mut stage = |name: &'static str, n: usize| {
            tracing::debug!(section = name, rewritten = n, "projected");
            rewritten += n;
        };

        let (projects, n) = project_section(&dataset.projects, config)?;
        stage("projects", n);
        let (about, n) = project_section(&dataset.about, config)?;
        stage("about", n);
        let (resume, n) = project_section(&dataset.resume, config)?;
        stage("resume", n);
        let (contact, n) = project_section(&dataset.contact, config)?;
        stage("contact", n);
        let (plugins, n) = project_section(&dataset.plugins, config)?;
        stage("plugins", n);
        let (posts, n) = project_section(&dataset.posts, config)?;
        stage("posts", n);
        let (showreel, n) = project_section(&dataset.showreel, config)?;
        stage("showreel", n);
        let (archviz_projects, n) = project_section(&dataset.archviz_projects, config)?;
        stage("archvizProjects", n);
        let (product_viz_projects, n) = project_section(&dataset.product_viz_projects, config)?;
        stage("productVizProjects", n);

        tracing::info!(rewritten, "dataset projected");

        let product_viz =
            ProjectRegistry::new(product_viz_projects.clone(), config.base_path.clone());

        Ok(Self {
            config: config.clone(),
            projects,
            about,
            resume,
            contact,
            plugins,
            posts,
            showreel,
            archviz_projects,
            product_viz_projects,
            product_viz,
        })
    }

    /// Settings the context was built with.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Game prop gallery.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// About page.
    pub fn about(&self) -> &AboutData {
        &self.about
    }

    /// Resume page.
    pub fn resume(&self) -> &ResumeData {
        &self.resume
    }

    /// Contact page.
    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    /// Plugins page.
    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    /// Blog posts in dataset order.
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Showreel videos.
    pub fn showreel(&self) -> &[ShowreelEntry] {
        &self.showreel
    }

    /// Architectural visualization gallery.
    pub fn archviz_projects(&self) -> &[Project] {
        &self.archviz_projects
    }

    /// Product visualization gallery as projected at startup, ignoring later registry updates.
    pub fn product_viz_projects(&self) -> &[Project] {
        &self.product_viz_projects
    }

    /// The live product visualization registry.
    pub fn product_viz(&self) -> &ProjectRegistry {
        &self.product_viz
    }

    /// Mutable access to the product visualization registry.
    pub fn product_viz_mut(&mut self) -> &mut ProjectRegistry {
        &mut self.product_viz
    }

    /// Reassemble the projected sections into a [`Dataset`].
    ///
    /// Product-viz projects come from the registry's current snapshot.
    pub fn to_dataset(&self) -> Dataset {
        Dataset {
            projects: self.projects.clone(),
            about: self.about.clone(),
            resume: self.resume.clone(),
            contact: self.contact.clone(),
            plugins: self.plugins.clone(),
            posts: self.posts.clone(),
            showreel: self.showreel.clone(),
            archviz_projects: self.archviz_projects.clone(),
            product_viz_projects: self.product_viz.snapshot().to_vec(),
        }
    }

    /// Find a project by id across the game prop and archviz galleries.
    pub fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.projects
            .iter()
            .chain(self.archviz_projects.iter())
            .find(|p| p.id == id)
    }

    /// Game prop projects in `category` (case-insensitive).
    pub fn projects_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a Project> + 'a {
        self.projects
            .iter()
            .filter(move |p| p.category.eq_ignore_ascii_case(category))
    }

    /// Find a blog post by id.
    pub fn post(&self, id: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Posts carrying `tag` (case-insensitive).
    pub fn posts_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a BlogPost> + 'a {
        self.posts
            .iter()
            .filter(move |p| p.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
    }

    /// Up to `n` posts, newest `publishedAt` first.
    ///
    /// ISO dates order lexicographically; ties keep dataset order.
    pub fn recent_posts(&self, n: usize) -> Vec<&BlogPost> {
        let mut posts: Vec<&BlogPost> = self.posts.iter().collect();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        posts.truncate(n);
        posts
    }
}

fn project_section<T>(section: &T, config: &SiteConfig) -> FolioResult<(T, usize)>
where
    T: Clone + RebaseAssets + Serialize + DeserializeOwned,
{
    match config.mode {
        ProjectionMode::Declared => {
            let mut out = section.clone();
            let n = out.rebase_assets(&config.base_path);
            Ok((out, n))
        }
        ProjectionMode::Heuristic => {
            let raw = serde_json::to_value(section)
                .map_err(|e| FolioError::serde(format!("encode section: {e}")))?;
            let (normalized, n) = normalize_value_counted(&raw, &config.base_path);
            let out = serde_json::from_value(normalized)
                .map_err(|e| FolioError::serde(format!("decode section: {e}")))?;
            Ok((out, n))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projection/context.rs"]
mod tests;
