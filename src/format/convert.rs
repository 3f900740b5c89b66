//! Thin wrappers over the standard conversion and escaping routines.
//!
//! These exist so callers assembling a buffer never have to leave the
//! push-style API; there is no formatting logic of our own here.

use std::fmt::Write;

/// Append `value` in decimal.
pub fn push_int<T: Into<i64>>(out: &mut String, value: T) {
    let _ = write!(out, "{}", value.into());
}

/// Append `value` in decimal.
pub fn push_uint<T: Into<u64>>(out: &mut String, value: T) {
    let _ = write!(out, "{}", value.into());
}

/// Append `value` as a double-quoted string literal with escapes.
pub fn push_quoted(out: &mut String, value: &str) {
    let _ = write!(out, "{value:?}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_int() {
        let mut out = String::new();
        push_int(&mut out, -42i32);
        push_int(&mut out, 7i8);
        assert_eq!(out, "-427");
    }

    #[test]
    fn test_push_uint() {
        let mut out = String::new();
        push_uint(&mut out, u64::MAX);
        assert_eq!(out, "18446744073709551615");
    }

    #[test]
    fn test_push_quoted() {
        let mut out = String::new();
        push_quoted(&mut out, "a \"b\"\n");
        assert_eq!(out, r#""a \"b\"\n""#);
    }
}
