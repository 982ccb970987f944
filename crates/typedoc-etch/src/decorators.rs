//! Literal value decoration
//!
//! Formats literal-like union members as inline-code markdown for the
//! "Acceptable values are: ..." sentence.

use crate::model::TypeDefinitionData;
use crate::types::{LiteralValue, ValueKind};

/// Display of a member with neither value nor name
const MISSING: &str = "undefined";

/// Format one literal value as an inline code span
///
/// Strings are quoted with single quotes, `Record<K,V>` keeps the raw
/// argument names, everything else shows its value or name.
pub fn decorate_value(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Null => code_span("null"),
        LiteralValue::Mapping {
            container,
            key,
            value,
        } => code_span(&format!(
            "{}<{},{}>",
            container,
            key.as_deref().unwrap_or(MISSING),
            value.as_deref().unwrap_or(MISSING)
        )),
        LiteralValue::String(s) => code_span(&format!("'{}'", s)),
        LiteralValue::Number(n) => code_span(&n.to_string()),
        LiteralValue::Boolean(b) => code_span(&b.to_string()),
        LiteralValue::Raw(raw) => code_span(raw),
        LiteralValue::Named(name) => code_span(name),
        LiteralValue::Missing => code_span(MISSING),
    }
}

/// Wrap text in a code span, widening the fence if it contains backticks
pub fn code_span(code: &str) -> String {
    if code.contains('`') {
        format!("`` {} ``", code)
    } else {
        format!("`{}`", code)
    }
}

/// Normalize and format a raw member in one step
pub fn decorate_definition(def: &TypeDefinitionData, marker: &str) -> String {
    decorate_value(&LiteralValue::from_definition(def, marker))
}

/// Build the "Acceptable values are: ..." sentence
///
/// Prefixed with `common_kind`, the kind shared by every value as found
/// during classification.
pub fn acceptable_values(values: &[LiteralValue], common_kind: Option<ValueKind>) -> String {
    let prefix = common_kind
        .map(|kind| format!("{} - ", code_span(kind.as_str())))
        .unwrap_or_default();
    let list = values
        .iter()
        .map(decorate_value)
        .collect::<Vec<_>>()
        .join(", ");

    format!("{}Acceptable values are: {}.", prefix, list)
}
