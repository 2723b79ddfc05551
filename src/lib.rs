//! Folio turns the bundled dataset of a 3D artist's portfolio site into runtime-ready data.
//!
//! The dataset (projects, about, resume, contact, plugins, blog posts, showreel) is authored with
//! site-relative asset paths. Before any page reads it, every asset path is rebased onto the
//! deployment base path (for example `/portfolio/`) exactly once.
//!
//! # Pipeline overview
//!
//! 1. **Load**: JSON -> [`Dataset`] ([`Dataset::from_path`], [`Dataset::validate`])
//! 2. **Configure**: [`SiteConfig::from_env`] resolves the [`BasePath`] and [`ProjectionMode`]
//! 3. **Project**: [`DataContext::project`] rebases asset paths and owns the read-only results
//! 4. **Observe**: the product-viz [`ProjectRegistry`] accepts point updates and notifies
//!    subscribers
//!
//! Asset paths are found either by declaration ([`RebaseAssets`]) or heuristically
//! ([`is_asset_like`] + [`normalize_value`]).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod content;
mod foundation;
mod model;
mod normalize;
mod projection;
mod registry;
mod timeline;

pub use assets::classify::{
    ASSET_EXTENSIONS, ASSET_KEYWORDS, ASSET_PREFIXES, KEYWORD_MAX_LEN, is_asset_like,
    is_asset_path, is_external,
};
pub use assets::rebase::{RebaseAssets, rebase_path};
pub use content::blocks::{Block, WORDS_PER_MINUTE, parse_blocks, reading_minutes};
pub use foundation::config::{
    BASE_PATH_ENV, BasePath, PROJECTION_MODE_ENV, ProjectionMode, SiteConfig,
};
pub use foundation::error::{FolioError, FolioResult};
pub use model::dataset::Dataset;
pub use model::profile::{
    AboutData, ContactInfo, Education, Experience, MAX_SKILL_LEVEL, ResumeData, Skill,
    SkillCategory,
};
pub use model::project::{Project, ProjectPatch};
pub use model::publishing::{BlogPost, Plugin, ShowreelEntry};
pub use normalize::deep::{normalize_value, normalize_value_counted};
pub use projection::context::DataContext;
pub use registry::feed::ProjectFeed;
pub use registry::store::{ProjectRegistry, Snapshot, Subscription};
pub use timeline::layout::{
    ONGOING_LABELS, TimelineBar, TimelineLayout, is_ongoing, layout as layout_timeline,
    parse_date,
};
