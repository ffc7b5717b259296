//! Style processing for symbol objects.
//!
//! This module provides the operations a renderer applies to symbols before
//! drawing them:
//!
//! - [`get_symbol_hash`]: content hash of a symbol or symbol list
//! - [`is_gradient`], [`get_gradient_stamp`]: gradient colors and their cache keys
//! - [`lower_symbol_opacity`], [`extend_symbol`]: deriving new symbols
//! - [`parse_style_root_path`]: resolving `{$root}`/`{$iconset}` placeholders
//! - [`is_dash_line`]: dashed line detection
//! - [`StyleSheet`]: loading style sheets from JSON or YAML files
//!
//! Symbols are `serde_json` objects. Symbol lists are arrays of them, and
//! every operation accepts either form.

mod dash;
mod error;
mod gradient;
mod hash;
mod path;
mod sheet;
mod symbol;

pub use dash::is_dash_line;
pub use error::StyleError;
pub use gradient::{get_gradient_stamp, is_gradient};
pub use hash::{get_symbol_hash, get_symbol_stamp, SymbolHash};
pub use path::{
    convert_style_path, parse_style_root_path, parse_symbol_path, RootPaths, ICONSET_PLACEHOLDER,
    ROOT_PLACEHOLDER,
};
pub use sheet::{StyleSheet, STYLE_SHEET_EXTENSIONS};
pub use symbol::{extend_symbol, lower_symbol_opacity};
