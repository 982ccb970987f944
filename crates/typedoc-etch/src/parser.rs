//! Type metadata loading
//!
//! Reads the JSON emitted by the extraction pass. Two layouts are
//! accepted: a bare array of type nodes, or a project object whose
//! `children` array holds them. A project also lists variables, functions,
//! classes and enums; only its type aliases are kept.

use crate::diagnostics::{EtchError, EtchResult};
use crate::model::TypeGeneralData;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// `kindString` of a type alias reflection
pub const TYPE_ALIAS_KIND_STRING: &str = "Type alias";

/// Numeric `kind` of a type alias reflection
pub const TYPE_ALIAS_KIND: u64 = 4194304;

/// Parse type nodes from JSON text
pub fn parse_types(json: &str) -> EtchResult<Vec<TypeGeneralData>> {
    let value: Value = serde_json::from_str(json)?;
    from_value(value)
}

/// Load type nodes from a JSON file
pub fn load_types(path: impl AsRef<Path>) -> EtchResult<Vec<TypeGeneralData>> {
    let text = std::fs::read_to_string(path)?;
    parse_types(&text)
}

/// Read type nodes from any reader (stdin, sockets, ...)
pub fn read_types(mut reader: impl Read) -> EtchResult<Vec<TypeGeneralData>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_types(&text)
}

fn from_value(value: Value) -> EtchResult<Vec<TypeGeneralData>> {
    let nodes = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => match map.remove("children") {
            Some(Value::Array(children)) => {
                Value::Array(children.into_iter().filter(is_type_alias).collect())
            }
            Some(_) => {
                return Err(EtchError::invalid_input("`children` must be an array"));
            }
            // A project without children documents nothing
            None => return Ok(Vec::new()),
        },
        other => {
            return Err(EtchError::invalid_input(format!(
                "expected an array of type nodes, found {}",
                json_kind(&other)
            )));
        }
    };

    Ok(serde_json::from_value(nodes)?)
}

/// Whether a project child is a type alias
///
/// Children carrying neither `kindString` nor `kind` are kept.
fn is_type_alias(child: &Value) -> bool {
    if let Some(kind_string) = child.get("kindString").and_then(Value::as_str) {
        return kind_string == TYPE_ALIAS_KIND_STRING;
    }
    match child.get("kind") {
        Some(kind) => kind.as_u64() == Some(TYPE_ALIAS_KIND),
        None => true,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
