//! Heuristic recognition of local asset paths inside free-form JSON strings.

use serde_json::Value;

/// File extensions treated as local binary/media assets.
pub const ASSET_EXTENSIONS: &[&str] = &[
    // images
    "png", "jpg", "jpeg", "gif", "webp", "avif", "svg", "bmp", "tif", "tiff", //
    // icons
    "ico", "icns", //
    // video / audio
    "mp4", "webm", "mov", "m4v", "ogv", "mp3", "wav", //
    // 3D models and textures
    "glb", "gltf", "obj", "fbx", "usdz", "hdr", "exr", //
    // documents
    "pdf",
];

/// Path prefixes reserved for bundled local assets.
pub const ASSET_PREFIXES: &[&str] = &["/assets/", "assets/", "./assets/"];

/// Words that mark a short string as an asset reference even without an extension.
pub const ASSET_KEYWORDS: &[&str] = &["poster", "thumb", "cover", "profile", "showreel"];

/// Keyword matches only count for strings shorter than this (in chars).
pub const KEYWORD_MAX_LEN: usize = 64;

const EXTERNAL_SCHEMES: &[&str] = &["http", "mailto:", "data:"];

/// Whether `value` is a string that names a local asset.
///
/// Non-string values are never asset-like.
pub fn is_asset_like(value: &Value) -> bool {
    match value {
        Value::String(s) => is_asset_path(s),
        _ => false,
    }
}

/// Whether `s` names a local asset: not an external reference, and either ends in a known
/// media extension, lives under a reserved assets prefix, or is a short string containing an
/// asset keyword.
pub fn is_asset_path(s: &str) -> bool {
    if is_external(s) {
        return false;
    }
    has_asset_extension(s) || has_asset_prefix(s) || has_asset_keyword(s)
}

/// Protocol-qualified references (`http(s)`, `mailto:`, `data:`) are left alone.
pub fn is_external(s: &str) -> bool {
    EXTERNAL_SCHEMES.iter().any(|scheme| s.starts_with(scheme))
}

fn has_asset_extension(s: &str) -> bool {
    let path = s.split_once('?').map_or(s, |(path, _)| path);
    let Some((stem, ext)) = path.rsplit_once('.') else {
        return false;
    };
    if stem.is_empty() || ext.contains('/') {
        return false;
    }
    ASSET_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ext))
}

fn has_asset_prefix(s: &str) -> bool {
    ASSET_PREFIXES.iter().any(|prefix| s.starts_with(prefix))
}

fn has_asset_keyword(s: &str) -> bool {
    if s.chars().count() >= KEYWORD_MAX_LEN {
        return false;
    }
    let lower = s.to_ascii_lowercase();
    ASSET_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/classify.rs"]
mod tests;
