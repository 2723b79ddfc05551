use super::*;
use crate::foundation::config::BasePath;
use crate::model::project::{Project, ProjectPatch};

fn registry() -> ProjectRegistry {
    let projects = ["w1", "w2"]
        .into_iter()
        .map(|id| Project {
            id: id.to_string(),
            title: id.to_uppercase(),
            ..Project::default()
        })
        .collect();
    ProjectRegistry::new(projects, BasePath::root())
}

#[test]
fn starts_from_current_snapshot() {
    let mut reg = registry();
    let feed = ProjectFeed::attach(&mut reg);
    assert_eq!(feed.generation(), 0);
    assert_eq!(feed.latest().len(), 2);
}

#[test]
fn tracks_updates() {
    let mut reg = registry();
    let feed = ProjectFeed::attach(&mut reg);

    let patch = ProjectPatch {
        category: Some("Watches".to_string()),
        ..ProjectPatch::default()
    };
    reg.update("w2", patch).unwrap();
    assert_eq!(feed.generation(), 1);
    assert_eq!(feed.latest()[1].category, "Watches");

    reg.update("nope", ProjectPatch::default());
    assert_eq!(feed.generation(), 1);
}

#[test]
fn detach_stops_updates() {
    let mut reg = registry();
    let feed = ProjectFeed::attach(&mut reg);
    let other = ProjectFeed::attach(&mut reg);

    assert!(feed.detach(&mut reg));
    assert_eq!(reg.observer_count(), 1);

    reg.update("w1", ProjectPatch::default()).unwrap();
    assert_eq!(other.generation(), 1);
}

#[test]
fn dropped_feeds_are_released_on_next_update() {
    let mut reg = registry();
    for _ in 0..3 {
        drop(ProjectFeed::attach(&mut reg));
    }
    assert_eq!(reg.observer_count(), 3);

    reg.update("w1", ProjectPatch::default()).unwrap();
    assert_eq!(reg.observer_count(), 0);
}

#[test]
fn live_feed_survives_release_of_dropped_ones() {
    let mut reg = registry();
    let live = ProjectFeed::attach(&mut reg);
    drop(ProjectFeed::attach(&mut reg));

    reg.update("w1", ProjectPatch::default()).unwrap();
    assert_eq!(reg.observer_count(), 1);
    assert_eq!(live.generation(), 1);

    let sub = live.subscription();
    assert!(reg.unsubscribe(sub));
    assert!(!live.detach(&mut reg));
}
