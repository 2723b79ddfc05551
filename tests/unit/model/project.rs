use serde_json::json;

use super::*;

fn chair() -> Project {
    serde_json::from_value(json!({
        "id": "chair",
        "title": "Oak Chair",
        "description": "Game-ready prop",
        "thumbnail": "assets/chair/thumb.jpg",
        "images": { "rendered": "assets/chair/render.png", "uv": "assets/chair/uv.png" },
        "glb": "assets/chair/chair.glb",
        "specs": { "polyCount": 12400, "status": "Completed" },
        "software": ["Blender", "Substance Painter"],
        "category": "Props",
        "completedAt": "2024-02-10"
    }))
    .unwrap()
}

#[test]
fn deserializes_camel_case_with_defaults() {
    let p: Project = serde_json::from_value(json!({ "id": "p1", "title": "A" })).unwrap();
    assert_eq!(p.id, "p1");
    assert!(p.images.is_empty());
    assert!(p.glb.is_none());
    assert!(p.software.is_empty());

    let c = chair();
    assert_eq!(c.completed_at.as_deref(), Some("2024-02-10"));
    assert_eq!(c.specs["polyCount"], json!(12400));
}

#[test]
fn serializes_back_to_camel_case() {
    let v = serde_json::to_value(chair()).unwrap();
    assert_eq!(v["completedAt"], json!("2024-02-10"));
    assert!(v.get("startDate").is_none());
}

#[test]
fn rebase_touches_declared_fields_only() {
    let mut c = chair();
    let base = BasePath::new("/portfolio/");
    assert_eq!(c.rebase_assets(&base), 4);
    assert_eq!(c.thumbnail, "/portfolio/assets/chair/thumb.jpg");
    assert_eq!(c.images["uv"], "/portfolio/assets/chair/uv.png");
    assert_eq!(c.glb.as_deref(), Some("/portfolio/assets/chair/chair.glb"));
    assert_eq!(c.category, "Props");
    assert_eq!(c.title, "Oak Chair");

    assert_eq!(c.rebase_assets(&base), 0);
}

#[test]
fn patch_is_a_shallow_merge() {
    let c = chair();
    let patch = ProjectPatch {
        title: Some("Walnut Chair".to_string()),
        images: Some([("rendered".to_string(), "x.png".to_string())].into()),
        ..ProjectPatch::default()
    };
    let out = patch.apply_to(&c);

    assert_eq!(out.id, "chair");
    assert_eq!(out.title, "Walnut Chair");
    assert_eq!(out.images.len(), 1);
    assert_eq!(out.description, c.description);
    assert_eq!(out.software, c.software);
    assert_eq!(out.glb, c.glb);
}

#[test]
fn patch_deserializes_partially() {
    let patch: ProjectPatch = serde_json::from_value(json!({ "title": "B" })).unwrap();
    assert_eq!(patch.title.as_deref(), Some("B"));
    assert!(patch.thumbnail.is_none());
    assert!(!patch.is_empty());
    assert!(ProjectPatch::default().is_empty());
}
