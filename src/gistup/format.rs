use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::{Serializer, Value};
use std::io::{self, Write};

/// How JSON input should be re-serialized before upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    /// One element per line, nested `indent` spaces per level.
    Pretty { indent: usize },
    /// No whitespace, non-ASCII escaped as `\uXXXX`.
    Minify,
}

/// Parses `content` as JSON and re-serializes it in `style`.
///
/// Object key order and number literals are kept as written.
pub fn format_json(content: &str, style: JsonStyle) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(content)?;
    match style {
        JsonStyle::Minify => write_with(&value, AsciiFormatter),
        JsonStyle::Pretty { indent } => {
            let indent = " ".repeat(indent);
            write_with(&value, PrettyFormatter::with_indent(indent.as_bytes()))
        }
    }
}

fn write_with<F: Formatter>(value: &Value, formatter: F) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // both formatters only ever write valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Compact output that escapes every non-ASCII character as UTF-16 `\uXXXX` units.
struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}
