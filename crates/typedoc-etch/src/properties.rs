//! Property tables
//!
//! One row per property, in declaration order:
//!
//! | Name | Type | Description |
//! |------|------|-------------|
//! | **timeout** | `number` | Seconds to wait.<br />**Default:** 30 |

use crate::fragment::{Inline, Table};
use crate::js_doc::EtchDoc;
use crate::model::TypePropertyData;
use crate::ts_types::TypeNameResolver;

/// Column headers of a property table
pub const PROPERTY_HEADERS: [&str; 3] = ["Name", "Type", "Description"];

/// Build the property table for a list of properties
///
/// Duplicate names are not merged; the table is purely positional.
pub fn build_property_table(children: &[TypePropertyData], resolver: &dyn TypeNameResolver) -> Table {
    let mut table = Table::new(PROPERTY_HEADERS.to_vec());
    for property in children {
        table.add_row(property_row(property, resolver));
    }
    table
}

fn property_row(property: &TypePropertyData, resolver: &dyn TypeNameResolver) -> Vec<Vec<Inline>> {
    let doc = EtchDoc::from_comment(property.comment.as_ref());

    let mut name = vec![Inline::strong(property.name.clone())];
    if property.flags.is_optional {
        name.push(Inline::LineBreak);
        name.push(Inline::emphasis("(optional)"));
    }

    let ty = vec![Inline::code(resolver.resolve_type_name(&property.type_def))];

    let mut description = match doc.short_text() {
        Some(short) => vec![Inline::markdown(short)],
        None => vec![Inline::text("-")],
    };
    if let Some(default) = effective_default(property, &doc) {
        description.push(Inline::LineBreak);
        description.push(Inline::strong("Default:"));
        description.push(Inline::text(" "));
        description.push(Inline::markdown(default));
    }

    vec![name, ty, description]
}

/// Explicit `defaultValue`, else the first `@default` tag
pub fn effective_default<'a>(property: &'a TypePropertyData, doc: &'a EtchDoc) -> Option<&'a str> {
    property
        .default_value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| doc.default_value())
}
