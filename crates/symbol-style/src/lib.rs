//! # Symbol Style - symbol helpers for map rendering
//!
//! Symbol Style holds the low-level routines a map renderer runs over its
//! style data: content hashes for caching, symbol merging, opacity scaling,
//! gradient stamps, dashed line detection, and resolution of the
//! `{$root}`/`{$iconset}` placeholders that let a style sheet refer to its
//! resources relative to a base url.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use symbol_style::{extend_symbol, get_symbol_hash, lower_symbol_opacity, StyleSheet};
//!
//! let sheet = StyleSheet::from_json_str(r#"{
//!     "$root": "http://example.com/",
//!     "style": [
//!         {"filter": true, "symbol": {"markerFile": "{$root}/pin.png", "opacity": 0.8}}
//!     ]
//! }"#).unwrap();
//!
//! let symbol = &sheet.entries()[0]["symbol"];
//! assert_eq!(symbol["markerFile"], json!("http://example.com/pin.png"));
//!
//! // Highlight: a larger marker, at half the opacity.
//! let highlight = extend_symbol(symbol, &[json!({"markerWidth": 40})]);
//! let faded = lower_symbol_opacity(&highlight, 0.5);
//! assert_eq!(faded["opacity"], json!(0.4));
//!
//! // Symbols that differ only in key order share a hash.
//! assert_eq!(
//!     get_symbol_hash(&json!({"a": 1, "b": 2}), None),
//!     get_symbol_hash(&json!({"b": 2, "a": 1}), None),
//! );
//! ```
//!
//! ## Data model
//!
//! Symbols are plain `serde_json` objects, so they round-trip through the
//! JSON and YAML files they are usually written in. Properties may hold
//! *function definitions*, values computed from zoom or feature data:
//!
//! ```json
//! { "markerFile": { "default": "a.png", "stops": [[10, "b.png"]] } }
//! ```
//!
//! The [`function`] module recognizes them and offers [`SymbolValue`] and
//! [`SymbolValueMut`], tagged views used to walk symbols without inspecting
//! their shape by hand.
//!
//! ## Mutation
//!
//! [`extend_symbol`] and [`lower_symbol_opacity`] return new values.
//! [`parse_symbol_path`] and [`convert_style_path`] rewrite their input in
//! place through `&mut`; [`parse_style_root_path`] takes the sheet by value
//! and returns its entries.

pub mod function;
pub mod strings;
pub mod style;
pub mod util;

pub use function::{
    is_function_definition, StopFunction, StopFunctionMut, SymbolValue, SymbolValueMut,
};
pub use strings::hash_code;
pub use style::{
    convert_style_path, extend_symbol, get_gradient_stamp, get_symbol_hash, get_symbol_stamp,
    is_dash_line, is_gradient, lower_symbol_opacity, parse_style_root_path, parse_symbol_path,
    RootPaths, StyleError, StyleSheet, SymbolHash,
};
pub use util::{
    extend, has_own, is_empty, is_function, is_integer, is_nil, is_number, is_object, is_string,
    join, to_degree, to_radian,
};
