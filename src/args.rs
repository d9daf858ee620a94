//! Owned argument values.
//!
//! Arguments read from a configuration file or stdin are declared as typed
//! entries, e.g. `{"type": "uint16", "value": 16}`, and kept as [`ArgValue`]s.
//! The engine borrows them as [`FormatArg`]s for one render call.

use std::io::Read;

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::format::FormatArg;

/// A typed argument entry as written in JSON or YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct ArgEntry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// An owned argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Int(i32),
    UInt(u32),
    UInt64(u64),
    UInt16(u16),
    UInt8(u8),
    String(String),
    StrBuf(String),
    Float(f32),
    Double(f64),
    Bool(bool),
    List(Vec<String>),
    Null,
    /// An entry whose type is not known, kept so the engine can report it.
    Unsupported(String),
}

impl ArgValue {
    /// Borrows the value as an argument cell.
    pub fn as_format_arg(&self) -> FormatArg<'_> {
        match self {
            ArgValue::Int(value) => FormatArg::Int(*value),
            ArgValue::UInt(value) => FormatArg::UInt(*value),
            ArgValue::UInt64(value) => FormatArg::UInt64(*value),
            ArgValue::UInt16(value) => FormatArg::UInt16(*value),
            ArgValue::UInt8(value) => FormatArg::UInt8(*value),
            ArgValue::String(value) => FormatArg::Str(value),
            ArgValue::StrBuf(value) => FormatArg::StrBuf(value),
            ArgValue::Float(value) => FormatArg::Float(*value),
            ArgValue::Double(value) => FormatArg::Double(*value),
            ArgValue::Bool(value) => FormatArg::Bool(*value),
            ArgValue::List(items) => FormatArg::List(items),
            ArgValue::Null => FormatArg::Null,
            ArgValue::Unsupported(kind) => FormatArg::Unsupported(kind),
        }
    }
}

impl TryFrom<ArgEntry> for ArgValue {
    type Error = Error;

    /// Converts a typed entry, checking that its value fits the declared type.
    ///
    /// Unknown type names are not an error; they become
    /// [`ArgValue::Unsupported`].
    fn try_from(entry: ArgEntry) -> Result<Self> {
        let ArgEntry { kind, value } = entry;
        let mismatch = || {
            Error::ArgumentError(format!("value {} is not a valid {}", value, kind))
        };

        let arg = match kind.as_str() {
            "int" => ArgValue::Int(
                value
                    .as_i64()
                    .and_then(|v| i32::try_from(v).ok())
                    .ok_or_else(mismatch)?,
            ),
            "uint" => ArgValue::UInt(
                value
                    .as_u64()
                    .and_then(|v| u32::try_from(v).ok())
                    .ok_or_else(mismatch)?,
            ),
            "uint64" => ArgValue::UInt64(value.as_u64().ok_or_else(mismatch)?),
            "uint16" => ArgValue::UInt16(
                value
                    .as_u64()
                    .and_then(|v| u16::try_from(v).ok())
                    .ok_or_else(mismatch)?,
            ),
            "uint8" => ArgValue::UInt8(
                value
                    .as_u64()
                    .and_then(|v| u8::try_from(v).ok())
                    .ok_or_else(mismatch)?,
            ),
            "string" => ArgValue::String(value.as_str().ok_or_else(mismatch)?.to_string()),
            "strbuf" => ArgValue::StrBuf(value.as_str().ok_or_else(mismatch)?.to_string()),
            "float" => {
                let wide = value.as_f64().ok_or_else(mismatch)?;
                let narrow = wide as f32;
                // Finite values too large for f32 would silently become inf.
                if narrow.is_finite() || !wide.is_finite() {
                    ArgValue::Float(narrow)
                } else {
                    return Err(mismatch());
                }
            }
            "double" => ArgValue::Double(value.as_f64().ok_or_else(mismatch)?),
            "bool" => ArgValue::Bool(value.as_bool().ok_or_else(mismatch)?),
            "list" => ArgValue::List(
                value
                    .as_array()
                    .ok_or_else(mismatch)?
                    .iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(mismatch)?,
            ),
            "null" => ArgValue::Null,
            _ => {
                debug!("Keeping argument of unknown type '{}'", kind);
                ArgValue::Unsupported(kind.clone())
            }
        };

        Ok(arg)
    }
}

/// Borrows every value as an argument cell, preserving order.
pub fn as_format_args(values: &[ArgValue]) -> Vec<FormatArg<'_>> {
    values.iter().map(ArgValue::as_format_arg).collect()
}

/// Converts a list of typed entries, failing on the first invalid one.
pub fn from_entries(entries: Vec<ArgEntry>) -> Result<Vec<ArgValue>> {
    entries.into_iter().map(ArgValue::try_from).collect()
}

/// Parses a JSON or YAML list of typed entries.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither a JSON nor a YAML list
/// * `Error::ArgumentError` if an entry's value does not fit its type
pub fn parse_args(content: &str) -> Result<Vec<ArgValue>> {
    let entries: Vec<ArgEntry> = match serde_json::from_str(content) {
        Ok(entries) => entries,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid argument list: {}", e)))?,
    };
    from_entries(entries)
}

/// Reads a list of typed entries from stdin.
pub fn load_from_stdin() -> Result<Vec<ArgValue>> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    let content = buffer.trim();
    if content.is_empty() {
        return Ok(Vec::new());
    }
    parse_args(content)
}
