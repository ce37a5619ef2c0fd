//! HCL encoder — renders a [`ConfigValue`] tree as `.tfbackend` attribute text.
//!
//! The output is what Terraform's `-backend-config=<file>` loader reads:
//!
//! - **Top level**: one `key = value` assignment per line, source order, no
//!   trailing newline
//! - **Sequences**: always single-line `[a, b, c]`, even when nested or when
//!   they hold mappings
//! - **Mappings**: brace blocks with one `key = value` entry per line, entries
//!   separated by `,`, two spaces of indentation per nesting level
//! - **Strings**: always quoted; backslash, quote, control characters and
//!   template openers (`${`, `%{`) are escaped
//!
//! Encoding is total: every `ConfigValue` has a rendering, so nothing here
//! returns a `Result`.
//!
//! # Example
//! ```
//! use tfbackend_core::{encode_document, ConfigValue};
//! let entries = vec![
//!     ("bucket".to_string(), ConfigValue::from("my-bucket")),
//!     ("encrypt".to_string(), ConfigValue::from(true)),
//! ];
//! assert_eq!(encode_document(&entries), "bucket = \"my-bucket\"\nencrypt = true");
//! ```

use crate::types::ConfigValue;

/// Serialize one value at the given nesting depth.
///
/// `depth` only affects the indentation of mapping blocks: entries are
/// indented `depth + 1` levels and the closing brace `depth` levels.
pub fn serialize(value: &ConfigValue, depth: usize) -> String {
    let mut out = String::new();
    encode_value(value, depth, &mut out);
    out
}

/// Render the entries of a top-level mapping as `key = value` lines joined by
/// newlines. Top-level keys are written verbatim since HCL attribute names
/// cannot be quoted.
pub fn encode_document(entries: &[(String, ConfigValue)]) -> String {
    let mut out = String::new();
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(key);
        out.push_str(" = ");
        encode_value(value, 0, &mut out);
    }
    out
}

fn encode_value(value: &ConfigValue, depth: usize, out: &mut String) {
    match value {
        ConfigValue::Null => out.push_str("null"),
        ConfigValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        ConfigValue::Integer(n) => out.push_str(&n.to_string()),
        ConfigValue::Float(f) => out.push_str(&format_float(*f)),
        ConfigValue::String(s) => encode_string(s, out),
        ConfigValue::Sequence(items) => encode_sequence(items, depth, out),
        ConfigValue::Mapping(entries) => encode_mapping(entries, depth, out),
        ConfigValue::Other(text) => encode_string(text, out),
    }
}

/// `[v1, v2]` on one line. Items keep the caller's depth, so a mapping inside
/// a sequence indents relative to the enclosing block.
fn encode_sequence(items: &[ConfigValue], depth: usize, out: &mut String) {
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        encode_value(item, depth, out);
    }
    out.push(']');
}

fn encode_mapping(entries: &[(String, ConfigValue)], depth: usize, out: &mut String) {
    if entries.is_empty() {
        out.push_str("{}");
        return;
    }
    let inner_indent = make_indent(depth + 1);
    out.push_str("{\n");
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push_str(&inner_indent);
        encode_key(key, out);
        out.push_str(" = ");
        encode_value(value, depth + 1, out);
    }
    out.push('\n');
    out.push_str(&make_indent(depth));
    out.push('}');
}

/// Floats keep a fractional part so they stay floats: `1.0`, not `1`.
fn format_float(f: f64) -> String {
    let s = f.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

/// Quote and escape a string for an HCL template literal.
fn encode_string(s: &str, out: &mut String) {
    out.push('"');
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // `${` and `%{` open template sequences; doubling the sigil escapes them.
            '$' | '%' if chars.peek() == Some(&'{') => {
                out.push(ch);
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out.push('"');
}

/// Nested object keys are bare when they are HCL identifiers, quoted otherwise.
fn encode_key(key: &str, out: &mut String) {
    if is_identifier(key) {
        out.push_str(key);
    } else {
        encode_string(key, out);
    }
}

/// `^[A-Za-z_][A-Za-z0-9_-]*$`
fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Two spaces per nesting level.
fn make_indent(depth: usize) -> String {
    "  ".repeat(depth)
}
