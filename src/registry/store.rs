use std::sync::Arc;

use crate::assets::rebase::RebaseAssets;
use crate::foundation::config::BasePath;
use crate::model::project::{Project, ProjectPatch};

/// Immutable view of the registry contents at one point in time.
pub type Snapshot = Arc<[Project]>;

type Observer = Box<dyn FnMut(&Snapshot) -> bool>;

/// Handle returned by [`ProjectRegistry::subscribe`].
///
/// Every call to `subscribe` yields a distinct handle, even for equivalent observers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// In-memory ordered project list with point updates and synchronous fan-out.
///
/// Updates replace the whole [`Snapshot`], so readers holding an older snapshot never observe a
/// partially applied change. Observers run to completion before `update` returns.
pub struct ProjectRegistry {
    base: BasePath,
    projects: Snapshot,
    observers: Vec<(Subscription, Observer)>,
    next_subscription: u64,
}

impl std::fmt::Debug for ProjectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectRegistry")
            .field("base", &self.base)
            .field("projects", &self.projects.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ProjectRegistry {
    /// Seed the registry. Patched asset paths are rebased onto `base`.
    pub fn new(projects: Vec<Project>, base: BasePath) -> Self {
        Self {
            base,
            projects: projects.into(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current contents.
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.projects)
    }

    /// Look up a project by id.
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Number of projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the registry holds no projects.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Number of live subscriptions.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Merge `patch` into the project with `id` and notify every observer.
    ///
    /// Returns the updated record, or `None` when no project has that id; a miss changes nothing
    /// and notifies nobody.
    pub fn update(&mut self, id: &str, mut patch: ProjectPatch) -> Option<Project> {
        let Some(idx) = self.projects.iter().position(|p| p.id == id) else {
            tracing::debug!(id, "registry update missed");
            return None;
        };

        patch.rebase_assets(&self.base);
        let updated = patch.apply_to(&self.projects[idx]);

        let mut next = self.projects.to_vec();
        next[idx] = updated.clone();
        self.projects = next.into();

        self.notify();
        Some(updated)
    }

    /// Register `observer`; it receives the new snapshot after every successful update.
    pub fn subscribe(&mut self, mut observer: impl FnMut(&Snapshot) + 'static) -> Subscription {
        self.subscribe_while(move |snapshot| {
            observer(snapshot);
            true
        })
    }

    /// Register an observer that stays subscribed for as long as it returns `true`.
    ///
    /// Returning `false` removes the subscription as if [`Self::unsubscribe`] had been called.
    pub fn subscribe_while(
        &mut self,
        observer: impl FnMut(&Snapshot) -> bool + 'static,
    ) -> Subscription {
        let sub = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((sub, Box::new(observer)));
        sub
    }

    /// Remove a subscription. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, sub: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(s, _)| *s != sub);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        tracing::debug!(observers = self.observers.len(), "registry notify");
        let snapshot = Arc::clone(&self.projects);
        self.observers.retain_mut(|(sub, observer)| {
            let keep = observer(&snapshot);
            if !keep {
                tracing::debug!(?sub, "observer released");
            }
            keep
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/store.rs"]
mod tests;
