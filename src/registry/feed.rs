use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::registry::store::{ProjectRegistry, Snapshot, Subscription};

#[derive(Debug)]
struct FeedState {
    latest: Snapshot,
    generation: u64,
}

/// Reactive binding over a [`ProjectRegistry`].
///
/// Holds the most recent snapshot and a generation counter that increases on every
/// notification, so a view can tell whether it needs to re-render.
///
/// Dropping a feed without [`ProjectFeed::detach`] is fine: its subscription is released on the
/// registry's next notification.
#[derive(Debug)]
#[must_use = "a feed only records updates while it is alive"]
pub struct ProjectFeed {
    state: Rc<RefCell<FeedState>>,
    subscription: Subscription,
}

impl ProjectFeed {
    /// Subscribe to `registry`, starting from its current snapshot at generation 0.
    pub fn attach(registry: &mut ProjectRegistry) -> Self {
        let state = Rc::new(RefCell::new(FeedState {
            latest: registry.snapshot(),
            generation: 0,
        }));
        let sink: Weak<RefCell<FeedState>> = Rc::downgrade(&state);
        let subscription = registry.subscribe_while(move |snapshot| {
            let Some(state) = sink.upgrade() else {
                return false;
            };
            let mut s = state.borrow_mut();
            s.latest = Snapshot::clone(snapshot);
            s.generation += 1;
            true
        });
        Self {
            state,
            subscription,
        }
    }

    /// Latest snapshot seen.
    pub fn latest(&self) -> Snapshot {
        Snapshot::clone(&self.state.borrow().latest)
    }

    /// Number of notifications received.
    pub fn generation(&self) -> u64 {
        self.state.borrow().generation
    }

    /// The underlying subscription handle.
    pub fn subscription(&self) -> Subscription {
        self.subscription
    }

    /// Stop receiving updates.
    pub fn detach(self, registry: &mut ProjectRegistry) -> bool {
        registry.unsubscribe(self.subscription)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/feed.rs"]
mod tests;
