//! Byte ↔ UTF-16 offset conversion.
//!
//! Rust strings are indexed in UTF-8 bytes, JavaScript strings in UTF-16
//! code units. Every offset crossing the boundary goes through here.

use markview_search::Match;
use serde::Serialize;

/// A match as JavaScript sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JsMatch {
    pub start: usize,
    pub end: usize,
}

/// UTF-16 offset of byte offset `byte` in `text`.
pub fn to_utf16(text: &str, byte: usize) -> usize {
    let byte = byte.min(text.len());
    text[..floor_boundary(text, byte)].encode_utf16().count()
}

/// Byte offset of UTF-16 offset `unit` in `text`. An offset that splits a
/// surrogate pair, or lies past the end, lands on the next char boundary.
pub fn from_utf16(text: &str, unit: usize) -> usize {
    let mut units = 0;
    for (i, c) in text.char_indices() {
        if units >= unit {
            return i;
        }
        units += c.len_utf16();
    }
    text.len()
}

pub fn to_js_match(text: &str, m: Match) -> JsMatch {
    JsMatch {
        start: to_utf16(text, m.start),
        end: to_utf16(text, m.end),
    }
}

fn floor_boundary(text: &str, mut byte: usize) -> usize {
    while !text.is_char_boundary(byte) {
        byte -= 1;
    }
    byte
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ascii_is_identity() {
        assert_eq!(to_utf16("hello", 3), 3);
        assert_eq!(from_utf16("hello", 3), 3);
    }

    #[test]
    fn test_two_byte_char() {
        // 'é' is two UTF-8 bytes but one UTF-16 unit.
        assert_eq!(to_utf16("héllo", 3), 2);
        assert_eq!(from_utf16("héllo", 2), 3);
    }

    #[test]
    fn test_astral_char() {
        // '😀' is four UTF-8 bytes and a UTF-16 surrogate pair.
        let text = "a😀b";
        assert_eq!(to_utf16(text, 5), 3);
        assert_eq!(from_utf16(text, 3), 5);
        // Inside the pair rounds up to the next char.
        assert_eq!(from_utf16(text, 2), 5);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(to_utf16("ab", 10), 2);
        assert_eq!(from_utf16("ab", 10), 2);
    }

    #[test]
    fn test_match_conversion() {
        let text = "crème BRÛLÉE";
        let m = markview_search::search(text, "brûlée")[0];
        assert_eq!(to_js_match(text, m), JsMatch { start: 6, end: 12 });
    }
}
