use serde_json::{Map, Value};

use crate::assets::classify::is_asset_path;
use crate::foundation::config::BasePath;

/// Return a copy of `value` with every asset-like string leaf prefixed by `base`.
///
/// Object keys, array order/length and non-string scalars are preserved. Strings that already
/// carry the base are left as-is, so applying this twice is the same as applying it once.
pub fn normalize_value(value: &Value, base: &BasePath) -> Value {
    normalize_value_counted(value, base).0
}

/// Same as [`normalize_value`], also returning how many strings were rewritten.
pub fn normalize_value_counted(value: &Value, base: &BasePath) -> (Value, usize) {
    let mut rewritten = 0usize;
    let out = walk(value, base, &mut rewritten);
    (out, rewritten)
}

fn walk(value: &Value, base: &BasePath, rewritten: &mut usize) -> Value {
    match value {
        Value::String(s) => Value::String(rebase_str(s, base, rewritten)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| walk(item, base, rewritten))
                .collect(),
        ),
        Value::Object(fields) => {
            let mut out = Map::with_capacity(fields.len());
            for (k, v) in fields {
                out.insert(k.clone(), walk(v, base, rewritten));
            }
            Value::Object(out)
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
    }
}

fn rebase_str(s: &str, base: &BasePath, rewritten: &mut usize) -> String {
    if !is_asset_path(s) || base.is_prefix_of(s) {
        return s.to_string();
    }
    *rewritten += 1;
    base.join(s)
}

#[cfg(test)]
#[path = "../../tests/unit/normalize/deep.rs"]
mod tests;
