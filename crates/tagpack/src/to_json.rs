//! Indented JSON-like text projection of a [`Value`].
//!
//! The output is for humans and logs; it is not a lossless JSON mapping
//! (binary becomes base64 text, map keys may be any value). Containers put
//! every child on its own line, two spaces deeper than the line the
//! container starts on:
//!
//! ```text
//! {
//!   "compact": true,
//!   "schema": 0
//! }
//! ```

use std::fmt::{self, Write};

use tagpack_base64::to_base64;

use crate::{Array, Float, Map, Precision, Value};

const INDENT: usize = 2;

/// Renders `value` as indented JSON text. Same output as `value.to_string()`.
pub fn to_json(value: &Value) -> String {
    value.to_string()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, 0)
    }
}

fn write_value<W: Write>(out: &mut W, value: &Value, indent: usize) -> fmt::Result {
    match value {
        Value::Nil => out.write_str("null"),
        Value::Boolean(b) => out.write_str(if *b { "true" } else { "false" }),
        Value::Integer(i) => write!(out, "{i}"),
        Value::Float(f) => write_float(out, *f),
        Value::String(s) => write_str(out, s),
        Value::Binary(b) => write!(out, "\"{}\"", to_base64(b)),
        Value::Array(arr) => write_arr(out, arr, indent),
        Value::Map(map) => write_map(out, map, indent),
    }
}

fn write_float<W: Write>(out: &mut W, float: Float) -> fmt::Result {
    let value = float.value();
    if !value.is_finite() {
        return out.write_str("null");
    }
    match float.precision() {
        Precision::Single => write!(out, "{:?}", value as f32),
        Precision::Double => write!(out, "{value:?}"),
    }
}

fn write_str<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '/' => out.write_str("\\/")?,
            '\u{08}' => out.write_str("\\b")?,
            '\t' => out.write_str("\\t")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            c if c < ' ' => write!(out, "\\u{:04x}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

fn write_arr<W: Write>(out: &mut W, arr: &Array, indent: usize) -> fmt::Result {
    out.write_str("[\n")?;
    let inner = indent + INDENT;
    for (i, item) in arr.iter().enumerate() {
        if i > 0 {
            out.write_str(",\n")?;
        }
        pad(out, inner)?;
        write_value(out, item, inner)?;
    }
    close(out, !arr.is_empty(), indent, ']')
}

fn write_map<W: Write>(out: &mut W, map: &Map, indent: usize) -> fmt::Result {
    out.write_str("{\n")?;
    let inner = indent + INDENT;
    for (i, (key, val)) in map.iter().enumerate() {
        if i > 0 {
            out.write_str(",\n")?;
        }
        pad(out, inner)?;
        write_value(out, key, inner)?;
        out.write_str(": ")?;
        write_value(out, val, inner)?;
    }
    close(out, !map.is_empty(), indent, '}')
}

fn close<W: Write>(out: &mut W, had_items: bool, indent: usize, bracket: char) -> fmt::Result {
    if had_items {
        out.write_char('\n')?;
    }
    pad(out, indent)?;
    out.write_char(bracket)
}

fn pad<W: Write>(out: &mut W, width: usize) -> fmt::Result {
    write!(out, "{:width$}", "")
}
