//! Function definitions and the tagged view over symbol values.
//!
//! A symbol property is either a literal, a string, a nested symbol, a list,
//! or a *function definition*: a value computed from zoom or feature
//! properties, written as
//!
//! ```json
//! { "default": "a.png", "stops": [[10, "b.png"], [14, "c.png"]] }
//! ```
//!
//! [`SymbolValue::classify`] tags a value once so traversals can `match` on
//! the shape instead of inspecting fields. [`SymbolValueMut`] does the same for
//! traversals that rewrite values in place.

use serde_json::{Map, Value};

use crate::util::is_truthy;

/// Whether the value is a function definition.
///
/// Matches objects with a truthy `stops` field, and identity functions
/// (`{"type": "identity", "property": ...}`).
pub fn is_function_definition(value: &Value) -> bool {
    let Some(map) = value.as_object() else {
        return false;
    };
    if map.get("stops").is_some_and(is_truthy) {
        return true;
    }
    map.get("type").and_then(Value::as_str) == Some("identity")
        && map.get("property").is_some_and(is_truthy)
}

/// Borrowed view of a function definition.
#[derive(Debug, Clone, Copy)]
pub struct StopFunction<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> StopFunction<'a> {
    /// Wraps `value` if it is a function definition.
    pub fn new(value: &'a Value) -> Option<Self> {
        if is_function_definition(value) {
            value.as_object().map(|map| Self { map })
        } else {
            None
        }
    }

    /// The value used when no stop applies.
    pub fn default(&self) -> Option<&'a Value> {
        self.map.get("default")
    }

    /// The stops, as written. Entries are expected to be `[input, output]`.
    pub fn stops(&self) -> &'a [Value] {
        self.map
            .get("stops")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Mutable view of a function definition.
#[derive(Debug)]
pub struct StopFunctionMut<'a> {
    map: &'a mut Map<String, Value>,
}

impl<'a> StopFunctionMut<'a> {
    /// The value used when no stop applies.
    pub fn default_mut(&mut self) -> Option<&mut Value> {
        self.map.get_mut("default")
    }

    /// Iterates the output of each `[input, output]` stop. Entries that are
    /// not lists, or have no output, are skipped.
    pub fn outputs_mut(&mut self) -> impl Iterator<Item = &mut Value> + '_ {
        self.map
            .get_mut("stops")
            .and_then(Value::as_array_mut)
            .into_iter()
            .flatten()
            .filter_map(|stop| match stop {
                Value::Array(pair) => pair.get_mut(1),
                _ => None,
            })
    }
}

/// A symbol property, tagged by shape.
#[derive(Debug, Clone, Copy)]
pub enum SymbolValue<'a> {
    /// Numbers, booleans and `null`.
    Literal(&'a Value),
    /// A string, possibly carrying path placeholders.
    Text(&'a str),
    /// A function definition.
    Function(StopFunction<'a>),
    /// A nested symbol.
    Nested(&'a Map<String, Value>),
    /// A list of values.
    List(&'a [Value]),
}

impl<'a> SymbolValue<'a> {
    /// Tags a value. Function definitions take precedence over plain objects.
    pub fn classify(value: &'a Value) -> Self {
        if let Some(function) = StopFunction::new(value) {
            return SymbolValue::Function(function);
        }
        match value {
            Value::String(s) => SymbolValue::Text(s),
            Value::Object(map) => SymbolValue::Nested(map),
            Value::Array(items) => SymbolValue::List(items),
            other => SymbolValue::Literal(other),
        }
    }

    /// Whether this value is computed rather than literal.
    pub fn is_function(&self) -> bool {
        matches!(self, SymbolValue::Function(_))
    }
}

/// A mutable symbol property, tagged by shape.
///
/// The counterpart of [`SymbolValue`] for traversals that rewrite values.
#[derive(Debug)]
pub enum SymbolValueMut<'a> {
    /// Numbers, booleans and `null`.
    Literal(&'a mut Value),
    /// A string, possibly carrying path placeholders.
    Text(&'a mut String),
    /// A function definition.
    Function(StopFunctionMut<'a>),
    /// A nested symbol.
    Nested(&'a mut Map<String, Value>),
    /// A list of values.
    List(&'a mut Vec<Value>),
}

impl<'a> SymbolValueMut<'a> {
    /// Tags a value. Function definitions take precedence over plain objects.
    pub fn classify(value: &'a mut Value) -> Self {
        let is_function = is_function_definition(value);
        match value {
            Value::Object(map) => {
                if is_function {
                    SymbolValueMut::Function(StopFunctionMut { map })
                } else {
                    SymbolValueMut::Nested(map)
                }
            }
            Value::String(s) => SymbolValueMut::Text(s),
            Value::Array(items) => SymbolValueMut::List(items),
            other => SymbolValueMut::Literal(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stops_definition() {
        assert!(is_function_definition(&json!({"stops": [[1, "a"]]})));
        assert!(is_function_definition(
            &json!({"default": 1, "stops": [], "type": "interval"})
        ));
    }

    #[test]
    fn test_identity_definition() {
        assert!(is_function_definition(
            &json!({"type": "identity", "property": "size"})
        ));
        assert!(!is_function_definition(&json!({"type": "identity"})));
    }

    #[test]
    fn test_not_definitions() {
        assert!(!is_function_definition(&json!({"stops": null})));
        assert!(!is_function_definition(&json!({"markerFile": "a.png"})));
        assert!(!is_function_definition(&json!([[1, 2]])));
        assert!(!is_function_definition(&json!("stops")));
        assert!(!is_function_definition(&Value::Null));
    }

    #[test]
    fn test_stop_function_accessors() {
        let value = json!({"default": "a.png", "stops": [[10, "b.png"], "junk", [14, "c.png"]]});
        let function = StopFunction::new(&value).expect("function definition");

        assert_eq!(function.default(), Some(&json!("a.png")));
        assert_eq!(function.stops().len(), 3);
    }

    #[test]
    fn test_stop_function_mut_outputs() {
        let mut value = json!({"default": "a.png", "stops": [[10, "b.png"], "junk", [12], [14, "c.png"]]});
        let SymbolValueMut::Function(mut function) = SymbolValueMut::classify(&mut value) else {
            panic!("expected a function definition");
        };

        if let Some(default) = function.default_mut() {
            *default = json!("z.png");
        }
        for output in function.outputs_mut() {
            *output = json!("out.png");
        }

        assert_eq!(
            value,
            json!({"default": "z.png", "stops": [[10, "out.png"], "junk", [12], [14, "out.png"]]})
        );
    }

    #[test]
    fn test_classify_mut() {
        let mut nested = json!({"a": 1});
        let mut text = json!("x");
        let mut list = json!([1]);
        let mut number = json!(3);
        let mut function = json!({"type": "identity", "property": "size"});

        assert!(matches!(SymbolValueMut::classify(&mut nested), SymbolValueMut::Nested(_)));
        assert!(matches!(SymbolValueMut::classify(&mut text), SymbolValueMut::Text(_)));
        assert!(matches!(SymbolValueMut::classify(&mut list), SymbolValueMut::List(_)));
        assert!(matches!(SymbolValueMut::classify(&mut number), SymbolValueMut::Literal(_)));
        assert!(matches!(SymbolValueMut::classify(&mut function), SymbolValueMut::Function(_)));
    }

    #[test]
    fn test_classify() {
        let function = json!({"stops": [[1, 2]]});
        let nested = json!({"a": 1});
        let list = json!([1, 2]);
        let text = json!("x");
        let number = json!(3);

        assert!(SymbolValue::classify(&function).is_function());
        assert!(matches!(SymbolValue::classify(&nested), SymbolValue::Nested(_)));
        assert!(matches!(SymbolValue::classify(&list), SymbolValue::List(_)));
        assert!(matches!(SymbolValue::classify(&text), SymbolValue::Text("x")));
        assert!(matches!(SymbolValue::classify(&number), SymbolValue::Literal(_)));
    }
}
