//! Deriving new symbols from existing ones.
//!
//! Both operations here leave their inputs untouched and return fresh
//! values, so a symbol shared between geometries can be used as a base.

use serde_json::{Map, Value};

use crate::function::SymbolValue;
use crate::util::{extend, is_nil};

/// Lowers a symbol's opacity by `ratio`.
///
/// A missing (or `null`) `opacity` becomes `ratio`; a numeric one is
/// multiplied by it. Any other opacity value, such as a function definition,
/// is kept as is, and so is the opacity when the result would not be a
/// finite number (a NaN or infinite `ratio`). For a symbol list each element is handled on its own
/// shallow copy.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use symbol_style::style::lower_symbol_opacity;
///
/// let symbol = json!({"opacity": 0.5, "lineColor": "#f00"});
/// let lower = lower_symbol_opacity(&symbol, 0.5);
///
/// assert_eq!(lower, json!({"opacity": 0.25, "lineColor": "#f00"}));
/// assert_eq!(symbol["opacity"], json!(0.5));
/// ```
pub fn lower_symbol_opacity(symbol: &Value, ratio: f64) -> Value {
    match symbol {
        Value::Array(symbols) => Value::Array(
            symbols
                .iter()
                .map(|s| Value::Object(lowered(s, ratio)))
                .collect(),
        ),
        single => Value::Object(lowered(single, ratio)),
    }
}

fn lowered(symbol: &Value, ratio: f64) -> Map<String, Value> {
    let mut lower = Map::new();
    extend(&mut lower, [symbol]);
    let opacity = match lower.get("opacity").map(SymbolValue::classify) {
        None => Some(ratio),
        Some(SymbolValue::Literal(op)) if is_nil(op) => Some(ratio),
        Some(SymbolValue::Literal(op)) => op.as_f64().map(|op| op * ratio),
        Some(_) => None,
    };
    // JSON has no NaN or infinity; such a result would serialize as null.
    if let Some(opacity) = opacity.filter(|op| op.is_finite()) {
        lower.insert("opacity".to_string(), Value::from(opacity));
    }
    lower
}

/// Merges `sources` into a copy of `symbol`.
///
/// For a single symbol the result is `symbol` with each source laid over it
/// in order. For a symbol list, every element is merged on its own:
///
/// - a source that is not a list applies to every element;
/// - a list source applies its `i`-th entry to the `i`-th element;
/// - a list source too short for the element contributes nothing.
///
/// Each source is merged together with the element again, so an element's
/// own fields win over earlier sources. No sources behaves as one empty
/// source.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use symbol_style::style::extend_symbol;
///
/// let symbol = json!([{"a": 1}, {"a": 2}]);
/// let merged = extend_symbol(&symbol, &[json!([{"b": 10}, {"b": 20}])]);
/// assert_eq!(merged, json!([{"a": 1, "b": 10}, {"a": 2, "b": 20}]));
///
/// let broadcast = extend_symbol(&json!([{"a": 1}]), &[json!({"b": 5})]);
/// assert_eq!(broadcast, json!([{"a": 1, "b": 5}]));
/// ```
pub fn extend_symbol(symbol: &Value, sources: &[Value]) -> Value {
    let empty = [Value::Object(Map::new())];
    let sources = if sources.is_empty() { &empty[..] } else { sources };

    match symbol {
        Value::Array(symbols) => Value::Array(
            symbols
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    let mut dest = Map::new();
                    for source in sources {
                        match source {
                            Value::Array(list) => match list.get(i) {
                                Some(entry) if !is_nil(entry) => {
                                    extend(&mut dest, [s, entry]);
                                }
                                _ => {
                                    extend(&mut dest, [s]);
                                }
                            },
                            broadcast => {
                                extend(&mut dest, [s, broadcast]);
                            }
                        }
                    }
                    Value::Object(dest)
                })
                .collect(),
        ),
        single => {
            let mut dest = Map::new();
            extend(&mut dest, std::iter::once(single).chain(sources));
            Value::Object(dest)
        }
    }
}
