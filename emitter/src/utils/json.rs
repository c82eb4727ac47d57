//! JSON encoding matching the repository client's own config writer.
//!
//! The client's tooling writes `config.json` with `", "` between entries, `": "`
//! between a key and its value, everything on one line, and every non-ASCII
//! character (plus DEL) escaped as `\uXXXX`. [`SpacedAsciiFormatter`] produces
//! the same bytes through `serde_json`.

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io::{self, Write};

/// Single-line formatter with spaced separators and ASCII-only strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '\u{7f}' {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Serializes `value` with [`SpacedAsciiFormatter`] into `buffer`.
pub fn write_spaced<T>(buffer: &mut Vec<u8>, value: &T) -> serde_json::Result<()>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::with_formatter(buffer, SpacedAsciiFormatter);
    value.serialize(&mut serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;
    use serde_json::json;

    fn encode(value: &serde_json::Value) -> String {
        let mut buffer = Vec::new();
        assert_ok!(write_spaced(&mut buffer, value));
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_separators_have_trailing_space() {
        assert_eq!(encode(&json!({"a": "1"})), r#"{"a": "1"}"#);
        assert_eq!(encode(&json!(["x", "y"])), r#"["x", "y"]"#);
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(encode(&json!({})), "{}");
        assert_eq!(encode(&json!([])), "[]");
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        assert_eq!(encode(&json!("é")), r#""\u00e9""#);
        assert_eq!(encode(&json!("a\u{7f}b")), r#""a\u007fb""#);
        // Outside the BMP: surrogate pair
        assert_eq!(encode(&json!("😀")), r#""\ud83d\ude00""#);
    }

    #[test]
    fn test_control_and_quote_escapes() {
        assert_eq!(encode(&json!("q\"\\\n\u{1}")), r#""q\"\\\n\u0001""#);
    }
}
