//! Symbol hashes.
//!
//! A symbol hash identifies a symbol by content, so two symbols written with
//! different key orders (or a symbol list in a different order) share cached
//! resources such as rasterized markers.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::strings::hash_code;
use crate::util::is_truthy;

/// The hash of a symbol or a symbol list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum SymbolHash {
    /// Hash of a single symbol. Empty symbols hash to `1`.
    Hash(i32),
    /// Sorted, comma-joined hashes of a symbol list.
    Set(String),
}

impl SymbolHash {
    /// The hash of an empty symbol.
    pub const EMPTY: SymbolHash = SymbolHash::Hash(1);
}

impl fmt::Display for SymbolHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolHash::Hash(hash) => write!(f, "{}", hash),
            SymbolHash::Set(set) => f.write_str(set),
        }
    }
}

/// Hashes a symbol, or each symbol of a list.
///
/// Only properties whose name starts with `prefix` take part; `None` or an
/// empty prefix keeps them all. Key order never affects the result, and for
/// a list neither does element order: the element hashes are sorted before
/// being joined.
///
/// A string is hashed by its characters, as if it were the object
/// `{"0": c0, "1": c1, ...}`. Other truthy scalars hash like `{}`.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use symbol_style::style::{get_symbol_hash, SymbolHash};
///
/// let a = get_symbol_hash(&json!({"markerWidth": 10, "markerFile": "a.png"}), None);
/// let b = get_symbol_hash(&json!({"markerFile": "a.png", "markerWidth": 10}), None);
/// assert_eq!(a, b);
/// assert_eq!(get_symbol_hash(&json!(null), None), SymbolHash::EMPTY);
/// ```
pub fn get_symbol_hash(symbol: &Value, prefix: Option<&str>) -> SymbolHash {
    if !is_truthy(symbol) {
        return SymbolHash::EMPTY;
    }
    if let Value::Array(symbols) = symbol {
        let mut keys: Vec<String> = symbols
            .iter()
            .map(|s| get_symbol_hash(s, prefix).to_string())
            .collect();
        keys.sort();
        return SymbolHash::Set(keys.join(","));
    }

    let prefix = prefix.filter(|p| !p.is_empty());
    let mut fields: Vec<(String, Value)> = own_fields(symbol)
        .into_iter()
        .filter(|(key, _)| prefix.map_or(true, |p| key.starts_with(p)))
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    let sorted_symbol: Map<String, Value> = fields.into_iter().collect();
    SymbolHash::Hash(hash_code(&Value::Object(sorted_symbol).to_string()))
}

/// The enumerable fields of a symbol.
///
/// A string enumerates its characters under their indices (`"0"`, `"1"`,
/// ...). Numbers and booleans have no fields.
fn own_fields(symbol: &Value) -> Map<String, Value> {
    match symbol {
        Value::Object(map) => map.clone(),
        Value::String(s) => s
            .chars()
            .enumerate()
            .map(|(i, c)| (i.to_string(), Value::String(c.to_string())))
            .collect(),
        _ => Map::new(),
    }
}

/// Alias of [`get_symbol_hash`], kept for existing callers.
pub fn get_symbol_stamp(symbol: &Value, prefix: Option<&str>) -> SymbolHash {
    get_symbol_hash(symbol, prefix)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn symbol_fields() -> impl Strategy<Value = Vec<(String, i64)>> {
        prop::collection::btree_map("[a-z]{1,8}", -100i64..100, 1..6)
            .prop_map(|m| m.into_iter().collect())
    }

    fn to_symbol(fields: &[(String, i64)]) -> Value {
        Value::Object(
            fields
                .iter()
                .map(|(k, v)| (k.clone(), Value::from(*v)))
                .collect(),
        )
    }

    fn to_json_text(fields: &[(String, i64)]) -> String {
        let body: Vec<String> = fields
            .iter()
            .map(|(k, v)| format!("{}:{}", Value::from(k.as_str()), v))
            .collect();
        format!("{{{}}}", body.join(","))
    }

    proptest! {
        #[test]
        fn hash_ignores_key_order(fields in symbol_fields()) {
            let mut reversed = fields.clone();
            reversed.reverse();
            let symbol: Value = serde_json::from_str(&to_json_text(&reversed)).unwrap();

            // `fields` comes from a sorted map, so its text is the canonical one.
            prop_assert_eq!(
                get_symbol_hash(&symbol, None),
                SymbolHash::Hash(hash_code(&to_json_text(&fields)))
            );
        }

        #[test]
        fn list_hash_ignores_element_order(
            symbols in prop::collection::vec(symbol_fields(), 1..5),
        ) {
            let forward: Vec<Value> = symbols.iter().map(|f| to_symbol(f)).collect();
            let mut backward = forward.clone();
            backward.reverse();

            prop_assert_eq!(
                get_symbol_hash(&Value::Array(forward), None),
                get_symbol_hash(&Value::Array(backward), None)
            );
        }
    }
}
