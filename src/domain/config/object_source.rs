//! JavaScript object-literal source text for JSON values.
//!
//! Keys are unquoted when they are valid identifiers, strings use single
//! quotes, nested values are laid out one entry per line with trailing commas.

use serde_json::{Map, Value};

const INDENT: &str = "  ";

/// Format an object literal whose closing brace sits at `depth` indents.
pub fn format_object(map: &Map<String, Value>, depth: usize) -> String {
    if map.is_empty() {
        return "{}".to_string();
    }
    let mut out = String::from("{\n");
    for (key, value) in map {
        out.push_str(&indent(depth + 1));
        out.push_str(&format_key(key));
        out.push_str(": ");
        out.push_str(&format_value(value, depth + 1));
        out.push_str(",\n");
    }
    out.push_str(&indent(depth));
    out.push('}');
    out
}

/// Format the entries of `map` at `depth` indents, without the enclosing braces.
///
/// The caller supplies its own braces; an empty map yields an empty string.
pub fn format_object_for_config(map: &Map<String, Value>, depth: usize) -> String {
    strip_outer_braces(&format_object(map, depth.saturating_sub(1)))
}

/// Format a single value as source text.
pub fn format_value(value: &Value, depth: usize) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => quote(text),
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Array(items) => {
            let mut out = String::from("[\n");
            for item in items {
                out.push_str(&indent(depth + 1));
                out.push_str(&format_value(item, depth + 1));
                out.push_str(",\n");
            }
            out.push_str(&indent(depth));
            out.push(']');
            out
        }
        Value::Object(map) => format_object(map, depth),
    }
}

fn strip_outer_braces(source: &str) -> String {
    let inner = source.strip_prefix('{').unwrap_or(source);
    let inner = inner.strip_suffix('}').unwrap_or(inner);
    inner.trim_start_matches('\n').trim_end().to_string()
}

fn format_key(key: &str) -> String {
    if is_identifier(key) { key.to_string() } else { quote(key) }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Single-quoted JS string literal.
pub(crate) fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}
