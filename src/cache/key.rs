//! Deterministic cache keys for upstream requests.

use serde_json::{Map, Value};
use sha1::{Digest, Sha1};

/// Build a cache key from an endpoint prefix and its filter parameters.
///
/// Equal `(prefix, params)` pairs always produce the same key regardless of
/// the order parameters were inserted in: every mapping is rewritten with
/// lexicographically sorted keys (recursively, through arrays and nested
/// mappings) before serialization. `Null` entries are dropped so that an
/// omitted parameter and an explicitly absent one collapse to one key.
///
/// The output is the lowercase hex SHA-1 of `prefix:normalized`, always 40
/// characters.
pub fn cache_key(prefix: &str, params: &Map<String, Value>) -> String {
    let normalized = sort_value(&Value::Object(params.clone())).to_string();
    let mut hasher = Sha1::new();
    hasher.update(prefix.as_bytes());
    hasher.update(b":");
    hasher.update(normalized.as_bytes());
    hex::encode(hasher.finalize())
}

/// Rebuild a JSON value with all mapping keys sorted, recursing through
/// arrays and nested mappings in both directions. `Null` map entries are
/// omitted.
fn sort_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = Map::new();
            for k in keys {
                if map[k].is_null() {
                    continue;
                }
                sorted.insert(k.clone(), sort_value(&map[k]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_value).collect()),
        scalar => scalar.clone(),
    }
}
