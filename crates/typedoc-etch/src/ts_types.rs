//! Type name resolution
//!
//! Property tables, parameter lists and container lines show types as
//! TypeScript-like strings. Resolution sits behind [`TypeNameResolver`] so a
//! site can plug in its own (for example one that emits links);
//! [`TypeDocResolver`] is the stand-alone default.

use crate::model::{MethodParamData, TypeDeclarationData, TypeDefinitionData};
use serde_json::Value;

/// Display name used when a type cannot be resolved
pub const UNRESOLVED: &str = "undefined";

/// Maps a type reference to its display string
pub trait TypeNameResolver {
    /// Resolve a type to a display string
    fn resolve_type_name(&self, ty: &TypeDefinitionData) -> String;
}

impl<F> TypeNameResolver for F
where
    F: Fn(&TypeDefinitionData) -> String,
{
    fn resolve_type_name(&self, ty: &TypeDefinitionData) -> String {
        self(ty)
    }
}

/// Default resolver producing TypeScript syntax
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeDocResolver;

impl TypeNameResolver for TypeDocResolver {
    fn resolve_type_name(&self, ty: &TypeDefinitionData) -> String {
        type_to_typescript(ty)
    }
}

/// Convert a type definition to TypeScript syntax
pub fn type_to_typescript(ty: &TypeDefinitionData) -> String {
    match ty.kind.as_deref() {
        Some("reference") => {
            let name = ty.name.as_deref().unwrap_or(UNRESOLVED);
            if ty.type_args().is_empty() {
                name.to_string()
            } else {
                format!("{}<{}>", name, join(ty.type_args(), ", "))
            }
        }
        Some("array") => match ty.element_type.as_deref() {
            Some(element) => {
                let inner = type_to_typescript(element);
                // Wrap complex types in parens for array notation
                if needs_parens(element) {
                    format!("({})[]", inner)
                } else {
                    format!("{}[]", inner)
                }
            }
            None => "unknown[]".to_string(),
        },
        Some("union") => join(ty.types.as_deref().unwrap_or_default(), " | "),
        Some("intersection") => join(ty.types.as_deref().unwrap_or_default(), " & "),
        Some("tuple") => format!("[{}]", join(ty.elements.as_deref().unwrap_or_default(), ", ")),
        Some("reflection") => ty
            .declaration
            .as_deref()
            .map(declaration_to_typescript)
            .unwrap_or_else(|| "object".to_string()),
        Some("query") => match ty.query_type.as_deref() {
            Some(query) => format!("typeof {}", type_to_typescript(query)),
            None => UNRESOLVED.to_string(),
        },
        Some("typeOperator") => match (&ty.operator, ty.target.as_deref()) {
            (Some(op), Some(target)) => format!("{} {}", op, type_to_typescript(target)),
            (None, Some(target)) => type_to_typescript(target),
            _ => UNRESOLVED.to_string(),
        },
        Some("indexedAccess") => match (ty.object_type.as_deref(), ty.index_type.as_deref()) {
            (Some(object), Some(index)) => format!(
                "{}[{}]",
                type_to_typescript(object),
                type_to_typescript(index)
            ),
            _ => UNRESOLVED.to_string(),
        },
        Some("literal") => match &ty.value {
            Some(Value::String(s)) => format!("'{}'", s),
            Some(Value::Null) => "null".to_string(),
            Some(other) => other.to_string(),
            None => name_or_unresolved(ty),
        },
        _ => name_or_unresolved(ty),
    }
}

/// Render an inline declaration: call signature first, then properties
fn declaration_to_typescript(declaration: &TypeDeclarationData) -> String {
    if let Some(signature) = declaration.signatures.as_deref().and_then(|s| s.first()) {
        let params = signature
            .params()
            .iter()
            .map(param_to_typescript)
            .collect::<Vec<_>>()
            .join(", ");
        let returns = signature
            .type_def
            .as_ref()
            .map(type_to_typescript)
            .unwrap_or_else(|| "void".to_string());
        return format!("({}) => {}", params, returns);
    }

    match declaration.children.as_deref() {
        Some(children) if !children.is_empty() => {
            let props = children
                .iter()
                .map(|child| {
                    let opt = if child.flags.is_optional { "?" } else { "" };
                    format!("{}{}: {}", child.name, opt, type_to_typescript(&child.type_def))
                })
                .collect::<Vec<_>>();
            format!("{{ {} }}", props.join("; "))
        }
        _ => "{}".to_string(),
    }
}

/// Get TypeScript parameter declaration
pub fn param_to_typescript(param: &MethodParamData) -> String {
    let rest = if param.flags.is_rest { "..." } else { "" };
    let optional = if param.flags.is_optional && !param.flags.is_rest {
        "?"
    } else {
        ""
    };
    format!(
        "{}{}{}: {}",
        rest,
        param.name,
        optional,
        type_to_typescript(&param.type_def)
    )
}

fn needs_parens(ty: &TypeDefinitionData) -> bool {
    match ty.kind.as_deref() {
        Some("union") | Some("intersection") => true,
        Some("reflection") => ty
            .declaration
            .as_ref()
            .and_then(|d| d.signatures.as_ref())
            .is_some_and(|s| !s.is_empty()),
        _ => false,
    }
}

fn join(types: &[TypeDefinitionData], sep: &str) -> String {
    types
        .iter()
        .map(type_to_typescript)
        .collect::<Vec<_>>()
        .join(sep)
}

fn name_or_unresolved(ty: &TypeDefinitionData) -> String {
    ty.name.clone().unwrap_or_else(|| UNRESOLVED.to_string())
}
