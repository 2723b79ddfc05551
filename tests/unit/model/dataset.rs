use serde_json::json;

use super::*;
use crate::model::profile::SkillCategory;

#[test]
fn empty_object_is_an_empty_dataset() {
    let ds = Dataset::from_value(json!({})).unwrap();
    assert_eq!(ds, Dataset::default());
    ds.validate().unwrap();
}

#[test]
fn parses_every_section() {
    let ds = Dataset::from_reader(
        json!({
            "projects": [{ "id": "p1", "title": "Crate" }],
            "about": {
                "bio": "3D artist",
                "profileImage": "profile.jpg",
                "skills": [{ "id": "s1", "name": "Blender", "level": 90, "category": "software" }]
            },
            "resume": { "certifications": ["Unreal Authorized"] },
            "contact": { "email": "me@example.com", "social": { "artstation": "https://a.com" } },
            "plugins": [{ "id": "x", "name": "Render Enhancer", "icon": "🎨" }],
            "posts": [{ "id": "b1", "title": "Hello", "tags": ["pbr"] }],
            "showreel": [{ "id": "r1", "videoUrl": "reel.mp4", "thumbnail": "reel-poster.jpg" }],
            "archvizProjects": [{ "id": "a1", "title": "Villa" }],
            "productVizProjects": [{ "id": "v1", "title": "Watch" }]
        })
        .to_string()
        .as_bytes(),
    )
    .unwrap();

    assert_eq!(ds.projects.len(), 1);
    assert_eq!(ds.about.skills[0].category, SkillCategory::Software);
    assert_eq!(ds.resume.certifications, vec!["Unreal Authorized"]);
    assert!(ds.contact.phone.is_none());
    assert_eq!(ds.plugins[0].icon, "🎨");
    assert_eq!(ds.posts[0].tags, vec!["pbr"]);
    assert_eq!(ds.showreel[0].video, "reel.mp4");
    assert_eq!(ds.showreel[0].poster.as_deref(), Some("reel-poster.jpg"));
    assert_eq!(ds.archviz_projects[0].id, "a1");
    assert_eq!(ds.product_viz_projects[0].id, "v1");
    ds.validate().unwrap();
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Dataset::from_reader("{ not json".as_bytes()).unwrap_err();
    assert!(matches!(err, FolioError::Serde(_)));
}

#[test]
fn missing_file_is_reported() {
    let err = Dataset::from_path(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("open dataset"));
}

#[test]
fn validate_rejects_empty_ids() {
    let ds = Dataset::from_value(json!({ "posts": [{ "id": " ", "title": "x" }] })).unwrap();
    let err = ds.validate().unwrap_err();
    assert!(err.to_string().contains("posts[0]"));
}

#[test]
fn validate_rejects_empty_skill_ids() {
    let ds = Dataset::from_value(json!({
        "resume": { "skills": [{ "id": "", "name": "ZBrush", "level": 40 }] }
    }))
    .unwrap();
    let err = ds.validate().unwrap_err();
    assert!(err.to_string().contains("resume.skills[0]"));

    let ds = Dataset::from_value(json!({
        "about": { "skills": [{ "id": "  ", "name": "Maya", "level": 70 }] }
    }))
    .unwrap();
    assert!(matches!(ds.validate(), Err(FolioError::Validation(_))));
}

#[test]
fn validate_rejects_out_of_range_skill_levels() {
    let ds = Dataset::from_value(json!({
        "resume": { "skills": [{ "id": "s1", "name": "ZBrush", "level": 140 }] }
    }))
    .unwrap();
    assert!(matches!(ds.validate(), Err(FolioError::Validation(_))));
}

#[test]
fn validate_tolerates_duplicate_ids() {
    let ds = Dataset::from_value(json!({
        "projects": [{ "id": "p1", "title": "A" }, { "id": "p1", "title": "B" }]
    }))
    .unwrap();
    ds.validate().unwrap();
}
