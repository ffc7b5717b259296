//! Loading style sheets from JSON and YAML.
//!
//! A style sheet file holds one of the shapes [`parse_style_root_path`]
//! understands: a single style entry, a list of entries, or a wrapper with
//! `$root`/`$iconset` and a `style` list. Loading resolves the placeholders,
//! so the entries of a [`StyleSheet`] are ready to hand to a renderer.
//!
//! ```yaml
//! $root: http://example.com/
//! style:
//!   - filter: true
//!     symbol:
//!       markerFile: "{$root}/pin.png"
//! ```

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::dash::is_dash_line;
use super::error::StyleError;
use super::path::parse_style_root_path;
use crate::util::is_truthy;

/// Recognized style sheet file extensions.
pub const STYLE_SHEET_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// A loaded list of style entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    entries: Vec<Value>,
}

impl StyleSheet {
    /// Builds a sheet from an already parsed document.
    pub fn from_value(document: Value) -> Result<Self, StyleError> {
        validate_document(&document)?;
        let entries = parse_style_root_path(document);
        Ok(Self { entries })
    }

    /// Parses a sheet from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, StyleError> {
        let document: Value = serde_json::from_str(json)?;
        Self::from_value(document)
    }

    /// Parses a sheet from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, StyleError> {
        let document: Value = serde_yaml::from_str(yaml)?;
        Self::from_value(document)
    }

    /// Reads a sheet from disk, choosing the format by file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if !STYLE_SHEET_EXTENSIONS.contains(&extension.as_str()) {
            return Err(StyleError::UnsupportedFormat { extension });
        }

        let content = fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let sheet = match extension.as_str() {
            "json" => Self::from_json_str(&content)?,
            _ => Self::from_yaml_str(&content)?,
        };
        debug!(path = %path.display(), entries = sheet.len(), "loaded style sheet");
        Ok(sheet)
    }

    /// The style entries.
    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    /// Consumes the sheet, returning its entries.
    pub fn into_entries(self) -> Vec<Value> {
        self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the sheet has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the `symbol` of each entry that has one.
    pub fn symbols(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().filter_map(|entry| entry.get("symbol"))
    }

    /// Whether any entry draws a dashed line.
    ///
    /// Each entry's symbol (or symbols) is checked as the style of a
    /// symbolizer, see [`is_dash_line`].
    pub fn has_dash_line(&self) -> bool {
        self.symbols().any(|symbol| {
            let symbolizers: Vec<Value> = match symbol {
                Value::Array(symbols) => symbols
                    .iter()
                    .map(|s| serde_json::json!({ "style": s }))
                    .collect(),
                single => vec![serde_json::json!({ "style": single })],
            };
            is_dash_line(&Value::Array(symbolizers))
        })
    }
}

fn validate_document(document: &Value) -> Result<(), StyleError> {
    match document {
        Value::Array(_) => Ok(()),
        Value::Object(map) if map.get("symbol").is_some_and(is_truthy) => Ok(()),
        Value::Object(map) => match map.get("style") {
            Some(Value::Array(_)) => Ok(()),
            Some(_) => Err(StyleError::Invalid("'style' must be a list".to_string())),
            None => Err(StyleError::Invalid(
                "expected a style entry, a list of entries, or a 'style' list".to_string(),
            )),
        },
        _ => Err(StyleError::Invalid(
            "a style sheet must be an object or a list".to_string(),
        )),
    }
}
