//! JS module adapter (`.prettierrc.js`)
//!
//! Emits a CommonJS module exporting the config object. Keys that are valid
//! identifiers are written bare; every value is JSON-encoded, so the reader
//! only has to re-quote keys before handing the object to `serde_json`.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::types::{FormattingPreferences, KitError, Result};

const TYPE_HEADER: &str = r#"/** @type {import("prettier").Config} */"#;
const EXPORT_PREFIX: &str = "module.exports =";
const INDENT: &str = "  ";

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid identifier regex"));

/// A bare object key at the start of a line
static BARE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^(\s*)([A-Za-z_$][A-Za-z0-9_$]*):"#).expect("valid bare key regex")
});

pub fn render(prefs: &FormattingPreferences) -> Result<String> {
    let value = serde_json::to_value(prefs)?;

    let mut out = String::new();
    out.push_str(TYPE_HEADER);
    out.push('\n');
    out.push_str(EXPORT_PREFIX);
    out.push(' ');
    write_value(&mut out, &value, 0)?;
    out.push_str(";\n");
    Ok(out)
}

fn write_value(out: &mut String, value: &Value, depth: usize) -> Result<()> {
    match value {
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Object(map) => {
            out.push_str("{\n");
            let last = map.len() - 1;
            for (i, (key, item)) in map.iter().enumerate() {
                out.push_str(&INDENT.repeat(depth + 1));
                write_key(out, key)?;
                out.push_str(": ");
                write_value(out, item, depth + 1)?;
                if i < last {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(&INDENT.repeat(depth));
            out.push('}');
        }
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Array(items) => {
            out.push_str("[\n");
            let last = items.len() - 1;
            for (i, item) in items.iter().enumerate() {
                out.push_str(&INDENT.repeat(depth + 1));
                write_value(out, item, depth + 1)?;
                if i < last {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(&INDENT.repeat(depth));
            out.push(']');
        }
        scalar => out.push_str(&serde_json::to_string(scalar)?),
    }
    Ok(())
}

fn write_key(out: &mut String, key: &str) -> Result<()> {
    if IDENTIFIER.is_match(key) {
        out.push_str(key);
    } else {
        out.push_str(&serde_json::to_string(key)?);
    }
    Ok(())
}

/// Read back a module in the shape `render` produces.
pub fn parse(text: &str) -> Result<FormattingPreferences> {
    let start = text
        .find(EXPORT_PREFIX)
        .ok_or_else(|| KitError::parse("js", format!("missing '{}'", EXPORT_PREFIX)))?;
    let body = text[start + EXPORT_PREFIX.len()..].trim();
    let body = body.strip_suffix(';').unwrap_or(body).trim_end();

    let quoted = BARE_KEY.replace_all(body, r#"$1"$2":"#);
    serde_json::from_str(&quoted).map_err(|e| KitError::parse("js", e.to_string()))
}
