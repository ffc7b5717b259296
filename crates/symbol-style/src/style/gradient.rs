//! Gradient colors and their stamps.

use serde_json::Value;

use crate::util::{is_truthy, to_display_string};

/// Whether the color is a gradient, i.e. carries `colorStops`.
pub fn is_gradient(g: &Value) -> bool {
    is_truthy(g) && g.get("colorStops").is_some_and(is_truthy)
}

/// Builds the cache key of a gradient color.
///
/// The stamp is `type`, the joined `places` (when present) and the color
/// stops joined together with `_`. Color stops are visited from last to
/// first; caches keyed on earlier stamps depend on that order.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use symbol_style::style::get_gradient_stamp;
///
/// let g = json!({
///     "type": "linear",
///     "places": [0, 0, 1, 1],
///     "colorStops": [[0, "red"], [1, "blue"]],
/// });
/// assert_eq!(get_gradient_stamp(&g), "linear_0,0,1,1_1,blue,0,red");
/// ```
pub fn get_gradient_stamp(g: &Value) -> String {
    let mut keys = vec![g.get("type").map(to_display_string).unwrap_or_default()];
    if let Some(places) = g.get("places").filter(|p| is_truthy(p)) {
        keys.push(to_display_string(places));
    }
    if let Some(color_stops) = g.get("colorStops").filter(|c| is_truthy(c)) {
        let stops: Vec<String> = match color_stops {
            Value::Array(stops) => stops.iter().rev().map(to_display_string).collect(),
            _ => Vec::new(),
        };
        keys.push(stops.join(","));
    }
    keys.join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_gradient() {
        assert!(is_gradient(&json!({"colorStops": [[0, "red"]]})));
        assert!(is_gradient(&json!({"type": "radial", "colorStops": []})));
        assert!(!is_gradient(&json!({"type": "linear"})));
        assert!(!is_gradient(&json!("#f00")));
        assert!(!is_gradient(&Value::Null));
    }

    #[test]
    fn test_stamp_reverses_color_stops() {
        let g = json!({
            "type": "linear",
            "colorStops": [[0, "red"], [0.5, "green"], [1, "blue"]],
        });
        assert_eq!(get_gradient_stamp(&g), "linear_1,blue,0.5,green,0,red");
    }

    #[test]
    fn test_stamp_with_places() {
        let g = json!({
            "type": "radial",
            "places": [0.5, 0.5, 1],
            "colorStops": [[0, "#fff"], [1, "#000"]],
        });
        assert_eq!(get_gradient_stamp(&g), "radial_0.5,0.5,1_1,#000,0,#fff");
    }

    #[test]
    fn test_stamp_without_type() {
        let g = json!({"colorStops": [[0, "red"]]});
        assert_eq!(get_gradient_stamp(&g), "_0,red");
    }

    #[test]
    fn test_stamp_order_sensitive() {
        let a = json!({"type": "linear", "colorStops": [[0, "red"], [1, "blue"]]});
        let b = json!({"type": "linear", "colorStops": [[1, "blue"], [0, "red"]]});
        assert_ne!(get_gradient_stamp(&a), get_gradient_stamp(&b));
    }
}
