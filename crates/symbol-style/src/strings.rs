//! String hashing.

/// Hashes a string into a 32-bit integer.
///
/// A rolling `h * 31 + unit` hash over the UTF-16 code units of `s`, with
/// wrapping arithmetic. The result is stable across runs and platforms, which
/// is what lets it key caches of styled geometry.
///
/// # Example
///
/// ```rust
/// use symbol_style::strings::hash_code;
///
/// assert_eq!(hash_code(""), 0);
/// assert_eq!(hash_code("hello"), 99162322);
/// ```
pub fn hash_code(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}
