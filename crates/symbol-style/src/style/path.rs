//! Resolution of `{$root}` and `{$iconset}` placeholders.
//!
//! Style sheets can be written relative to a root url and an icon set:
//!
//! ```json
//! {
//!     "$root": "http://example.com/",
//!     "$iconset": "http://example.com/icons",
//!     "style": [
//!         { "filter": true, "symbol": { "markerFile": "{$iconset}/pin.png" } }
//!     ]
//! }
//! ```
//!
//! [`parse_style_root_path`] turns such a sheet into its list of style
//! entries with every placeholder replaced. The lower-level
//! [`convert_style_path`] and [`parse_symbol_path`] rewrite entries and
//! symbols in place with any replacer.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

use crate::function::{StopFunctionMut, SymbolValueMut};
use crate::util::is_truthy;

/// Placeholder for the style sheet's root url.
pub const ROOT_PLACEHOLDER: &str = "{$root}";
/// Placeholder for the style sheet's icon set url.
pub const ICONSET_PLACEHOLDER: &str = "{$iconset}";

/// Property never rewritten: label text is content, not a path.
const TEXT_NAME: &str = "textName";

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\$root\}|\{\$iconset\}").expect("placeholder pattern is valid")
});

/// The urls placeholders resolve to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootPaths {
    /// Replaces `{$root}`.
    pub root: Option<String>,
    /// Replaces `{$iconset}`.
    pub iconset: Option<String>,
}

impl RootPaths {
    /// Creates root paths, trimming one trailing `/` from each.
    pub fn new(root: Option<&str>, iconset: Option<&str>) -> Self {
        Self {
            root: root.map(trim_trailing_slash),
            iconset: iconset.map(trim_trailing_slash),
        }
    }

    /// Reads `$root` and `$iconset` from a style sheet wrapper.
    ///
    /// Empty and non-string values count as absent.
    pub fn from_sheet(sheet: &Value) -> Self {
        Self::new(read_path(sheet, "$root"), read_path(sheet, "$iconset"))
    }

    /// Whether there is anything to resolve.
    pub fn is_empty(&self) -> bool {
        self.root.is_none() && self.iconset.is_none()
    }

    /// Resolves a placeholder token.
    pub fn resolve(&self, token: &str) -> Option<String> {
        match token {
            ROOT_PLACEHOLDER => self.root.clone(),
            ICONSET_PLACEHOLDER => self.iconset.clone(),
            _ => None,
        }
    }
}

fn read_path<'a>(sheet: &'a Value, key: &str) -> Option<&'a str> {
    sheet.get(key).filter(|v| is_truthy(v)).and_then(Value::as_str)
}

fn trim_trailing_slash(path: &str) -> String {
    path.strip_suffix('/').unwrap_or(path).to_string()
}

/// Normalizes a style sheet into its list of style entries.
///
/// - A single entry (an object with a `symbol`) becomes a one-entry list.
/// - A list is returned as is, without resolving placeholders.
/// - A wrapper yields its `style` list; when it declares `$root` or
///   `$iconset`, placeholders in every entry's symbol are resolved first.
///
/// A wrapper without a `style` list yields no entries.
pub fn parse_style_root_path(style: Value) -> Vec<Value> {
    if style.get("symbol").is_some_and(is_truthy) {
        return vec![style];
    }
    let paths = RootPaths::from_sheet(&style);
    let mut sheet = match style {
        Value::Array(entries) => return entries,
        Value::Object(sheet) => sheet,
        other => {
            warn!(kind = value_kind(&other), "style sheet is not an object or a list");
            return Vec::new();
        }
    };

    let mut styles = match sheet.remove("style") {
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            warn!(kind = value_kind(&other), "style sheet 'style' field is not a list");
            return Vec::new();
        }
        None => {
            warn!("style sheet has no 'style' field");
            return Vec::new();
        }
    };

    if !paths.is_empty() {
        debug!(
            root = paths.root.as_deref(),
            iconset = paths.iconset.as_deref(),
            entries = styles.len(),
            "resolving style root paths"
        );
        convert_style_path(&mut styles, &|token| paths.resolve(token));
    }
    styles
}

/// Resolves placeholders in the `symbol` of every style entry, in place.
///
/// A list-valued `symbol` has each of its symbols resolved.
pub fn convert_style_path<R>(styles: &mut [Value], replacer: &R)
where
    R: Fn(&str) -> Option<String>,
{
    for entry in styles.iter_mut() {
        match entry.get_mut("symbol") {
            Some(Value::Object(symbol)) => parse_symbol_path(symbol, replacer),
            Some(Value::Array(symbols)) => {
                for symbol in symbols.iter_mut() {
                    if let Value::Object(symbol) = symbol {
                        parse_symbol_path(symbol, replacer);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Resolves placeholders in a symbol, in place.
///
/// Every property except `textName` is visited:
///
/// - strings longer than two characters have each placeholder replaced;
/// - function definitions have their `default` and stop outputs resolved,
///   including nested function definitions;
/// - nested objects and lists are walked.
///
/// A placeholder the replacer cannot resolve stays in the string.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use symbol_style::style::{parse_symbol_path, RootPaths};
///
/// let paths = RootPaths::new(Some("http://a"), None);
/// let mut symbol = json!({"markerFile": "{$root}/x.png", "textName": "{$root}"});
/// if let Some(map) = symbol.as_object_mut() {
///     parse_symbol_path(map, &|token| paths.resolve(token));
/// }
/// assert_eq!(symbol, json!({"markerFile": "http://a/x.png", "textName": "{$root}"}));
/// ```
pub fn parse_symbol_path<R>(symbol: &mut Map<String, Value>, replacer: &R)
where
    R: Fn(&str) -> Option<String>,
{
    for (key, value) in symbol.iter_mut() {
        if key == TEXT_NAME {
            continue;
        }
        resolve_value(key, value, replacer);
    }
}

fn resolve_value<R>(key: &str, value: &mut Value, replacer: &R)
where
    R: Fn(&str) -> Option<String>,
{
    match SymbolValueMut::classify(value) {
        SymbolValueMut::Function(function) => parse_stops(function, replacer),
        SymbolValueMut::Text(s) if s.chars().count() > 2 => {
            if rewrite(s, replacer) {
                trace!(property = key, value = s.as_str(), "resolved path");
            }
        }
        SymbolValueMut::Nested(nested) => parse_symbol_path(nested, replacer),
        SymbolValueMut::List(items) => {
            for item in items.iter_mut() {
                resolve_value(key, item, replacer);
            }
        }
        SymbolValueMut::Text(_) | SymbolValueMut::Literal(_) => {}
    }
}

fn parse_stops<R>(mut function: StopFunctionMut<'_>, replacer: &R)
where
    R: Fn(&str) -> Option<String>,
{
    if let Some(Value::String(default)) = function.default_mut() {
        rewrite(default, replacer);
    }
    for output in function.outputs_mut() {
        match SymbolValueMut::classify(output) {
            SymbolValueMut::Text(text) => {
                rewrite(text, replacer);
            }
            SymbolValueMut::Function(nested) => parse_stops(nested, replacer),
            _ => {}
        }
    }
}

/// Replaces the placeholders of `s`. Returns whether any were found.
fn rewrite<R>(s: &mut String, replacer: &R) -> bool
where
    R: Fn(&str) -> Option<String>,
{
    let resolved = match replace_placeholders(s.as_str(), replacer) {
        Cow::Owned(resolved) => resolved,
        Cow::Borrowed(_) => return false,
    };
    *s = resolved;
    true
}

fn replace_placeholders<'s, R>(s: &'s str, replacer: &R) -> Cow<'s, str>
where
    R: Fn(&str) -> Option<String>,
{
    URL_PATTERN.replace_all(s, |caps: &Captures| {
        let token = &caps[0];
        replacer(token).unwrap_or_else(|| token.to_string())
    })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
