//! Value predicates, shallow merging and angle conversion.
//!
//! Style data is dynamic JSON-shaped data, so these helpers answer the
//! questions the style layer asks about a [`Value`]: what kind it is, whether
//! it is truthy, how it renders when joined into a key.
//!
//! Objects here are plain records. There is no prototype chain, so
//! [`extend`] and [`is_empty`] only ever see a value's own fields.

use serde_json::{Map, Value};

/// Multiplier between degrees and radians.
const PI_OVER_180: f64 = std::f64::consts::PI / 180.0;

/// Whether the value is `null`.
pub fn is_nil(value: &Value) -> bool {
    value.is_null()
}

/// Whether the value is a number and not NaN.
pub fn is_number(value: &Value) -> bool {
    value.as_f64().is_some_and(|n| !n.is_nan())
}

/// Whether `n` survives truncation to a 32-bit integer unchanged.
///
/// Numbers outside the `i32` range are not integers under this definition,
/// even when they have no fractional part.
///
/// # Example
///
/// ```rust
/// use symbol_style::util::is_integer;
///
/// assert!(is_integer(3.0));
/// assert!(!is_integer(3.5));
/// assert!(!is_integer(2f64.powi(31)));
/// ```
pub fn is_integer(n: f64) -> bool {
    n.is_finite() && n.trunc() == n && n >= i32::MIN as f64 && n <= i32::MAX as f64
}

/// Whether the value is an object or an array.
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Whether the value is a string.
pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// Whether the value is callable.
///
/// A [`Value`] cannot hold a closure, so this is always `false`. Function
/// definitions such as `{"stops": [...]}` are plain objects, not callables;
/// use [`is_function_definition`](crate::function::is_function_definition)
/// to recognize them.
pub fn is_function(_value: &Value) -> bool {
    false
}

/// Whether the value is an object that owns `key`.
pub fn has_own(value: &Value, key: &str) -> bool {
    value.as_object().is_some_and(|map| map.contains_key(key))
}

/// Dynamic truthiness: `null`, `false`, `0` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Copies every field of each source into `dest`, later sources winning.
///
/// Sources that are not objects contribute nothing.
///
/// # Example
///
/// ```rust
/// use serde_json::{json, Map};
/// use symbol_style::util::extend;
///
/// let mut dest = Map::new();
/// extend(&mut dest, [&json!({"a": 1}), &json!({"a": 2, "b": 3})]);
/// assert_eq!(serde_json::Value::Object(dest), json!({"a": 2, "b": 3}));
/// ```
pub fn extend<'d, 's, I>(dest: &'d mut Map<String, Value>, sources: I) -> &'d mut Map<String, Value>
where
    I: IntoIterator<Item = &'s Value>,
{
    for source in sources {
        if let Value::Object(fields) = source {
            for (key, value) in fields {
                dest.insert(key.clone(), value.clone());
            }
        }
    }
    dest
}

/// Whether the value has no enumerable entries.
///
/// Scalars and `null` have none.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => true,
    }
}

/// Joins values with `separator`, defaulting to `,`.
///
/// Accepts anything iterable over values, so both `Vec<Value>` and borrowed
/// array-likes such as an object's values can be joined.
pub fn join<'a, I>(items: I, separator: Option<&str>) -> String
where
    I: IntoIterator<Item = &'a Value>,
{
    let separator = match separator {
        Some(sep) if !sep.is_empty() => sep,
        _ => ",",
    };
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&to_display_string(item));
    }
    out
}

/// Renders a value the way a dynamic join does.
pub(crate) fn to_display_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => join(items, None),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Converts degrees to radians.
pub fn to_radian(degrees: f64) -> f64 {
    degrees * PI_OVER_180
}

/// Converts radians to degrees.
pub fn to_degree(radians: f64) -> f64 {
    radians / PI_OVER_180
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_nil() {
        assert!(is_nil(&Value::Null));
        assert!(!is_nil(&json!(0)));
        assert!(!is_nil(&json!("")));
    }

    #[test]
    fn test_is_number() {
        assert!(is_number(&json!(1)));
        assert!(is_number(&json!(-0.5)));
        assert!(!is_number(&json!("1")));
        assert!(!is_number(&Value::Null));
    }

    #[test]
    fn test_is_integer_truncation() {
        assert!(is_integer(3.0));
        assert!(is_integer(-7.0));
        assert!(is_integer(i32::MIN as f64));
        assert!(!is_integer(3.5));
        assert!(!is_integer(2f64.powi(31)));
        assert!(!is_integer(f64::NAN));
        assert!(!is_integer(f64::INFINITY));
    }

    #[test]
    fn test_is_object_includes_arrays() {
        assert!(is_object(&json!({})));
        assert!(is_object(&json!([])));
        assert!(!is_object(&Value::Null));
        assert!(!is_object(&json!("a")));
    }

    #[test]
    fn test_is_string_and_function() {
        assert!(is_string(&json!("a")));
        assert!(!is_string(&Value::Null));
        assert!(!is_function(&json!({"stops": [[1, 2]]})));
        assert!(!is_function(&json!({"type": "identity", "property": "x"})));
        assert!(!is_function(&json!({"markerFile": "a.png"})));
        assert!(!is_function(&json!("function")));
        assert!(!is_function(&Value::Null));
    }

    #[test]
    fn test_has_own() {
        let value = json!({"a": null});
        assert!(has_own(&value, "a"));
        assert!(!has_own(&value, "b"));
        assert!(!has_own(&json!([1]), "0"));
    }

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!("0")));
    }

    #[test]
    fn test_extend_later_sources_win() {
        let mut dest = Map::new();
        extend(&mut dest, [&json!({"a": 1}), &json!({"a": 2, "b": 3})]);
        assert_eq!(Value::Object(dest), json!({"a": 2, "b": 3}));
    }

    #[test]
    fn test_extend_skips_non_objects() {
        let mut dest = Map::new();
        dest.insert("a".into(), json!(1));
        extend(&mut dest, [&Value::Null, &json!(5), &json!("xy")]);
        assert_eq!(Value::Object(dest), json!({"a": 1}));
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty(&json!({})));
        assert!(!is_empty(&json!({"a": 1})));
        assert!(is_empty(&json!([])));
        assert!(is_empty(&Value::Null));
        assert!(is_empty(&json!(3)));
        assert!(!is_empty(&json!("a")));
    }

    #[test]
    fn test_join_default_separator() {
        let items = vec![json!(0), json!("red"), Value::Null, json!(0.5)];
        assert_eq!(join(&items, None), "0,red,,0.5");
        assert_eq!(join(&items, Some("")), "0,red,,0.5");
        assert_eq!(join(&items, Some("|")), "0|red||0.5");
    }

    #[test]
    fn test_join_nested_and_array_like() {
        let items = vec![json!([1, 2]), json!({"a": 1}), json!(true)];
        assert_eq!(join(&items, Some(";")), "1,2;[object Object];true");

        let map = json!({"x": 1, "y": 2});
        let values = map.as_object().map(|m| join(m.values(), None));
        assert_eq!(values.as_deref(), Some("1,2"));
    }

    #[test]
    fn test_integral_float_renders_without_fraction() {
        assert_eq!(to_display_string(&json!(1.0)), "1");
        assert_eq!(to_display_string(&json!(-2)), "-2");
    }

    #[test]
    fn test_angle_conversion() {
        assert!((to_radian(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!((to_degree(std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
        assert!((to_degree(to_radian(37.5)) - 37.5).abs() < 1e-12);
    }
}
