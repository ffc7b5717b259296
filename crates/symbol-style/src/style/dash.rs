//! Dashed line detection.

use serde_json::Value;

use crate::util::{is_number, is_truthy};

/// Whether any of the symbolizers draws a dashed line.
///
/// Accepts one symbolizer or a list. A symbolizer draws a dashed line when
/// its `style` has a positive numeric `lineWidth` and a non-empty
/// `lineDasharray`. Symbolizers without a `style` are skipped.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use symbol_style::style::is_dash_line;
///
/// assert!(is_dash_line(&json!([{"style": {"lineWidth": 2, "lineDasharray": [1, 2]}}])));
/// assert!(!is_dash_line(&json!([{"style": {"lineWidth": 0, "lineDasharray": [1, 2]}}])));
/// assert!(!is_dash_line(&json!([])));
/// ```
pub fn is_dash_line(symbolizers: &Value) -> bool {
    match symbolizers {
        Value::Array(list) => list.iter().any(draws_dash_line),
        single => draws_dash_line(single),
    }
}

fn draws_dash_line(symbolizer: &Value) -> bool {
    let Some(style) = symbolizer.get("style").filter(|s| is_truthy(s)) else {
        return false;
    };
    let positive_width = style.get("lineWidth").is_some_and(|width| {
        is_truthy(width) && is_number(width) && width.as_f64().is_some_and(|w| w > 0.0)
    });
    let dashed = style
        .get("lineDasharray")
        .and_then(Value::as_array)
        .is_some_and(|dashes| !dashes.is_empty());
    positive_width && dashed
}
