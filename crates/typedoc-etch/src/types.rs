//! Type shape classification
//!
//! TypeDoc does not tag a type with the way it should be documented. The
//! shape has to be inferred from which optional fields are present, and the
//! checks overlap. This module is the only place that looks at those loose
//! fields: it folds a [`TypeDefinitionData`] into a closed [`TypeShape`]
//! which the renderers then match on exhaustively.
//!
//! Priority, first match wins:
//!
//! 1. `declaration` present: object or callable declaration
//! 2. union/intersection with `types`: literal values, else property bags
//! 3. generic container marker (`Record`) with two type arguments
//! 4. `intrinsic`: bare primitive
//! 5. anything else: unsupported, rendered as nothing

use crate::model::{TypeDefinitionData, TypePropertyData, TypeSignatureData};
use serde_json::{Number, Value};
use std::fmt;

/// Name of the key/value container detected by name instead of by kind
pub const RECORD_MARKER: &str = "Record";

/// Underlying kind of a literal value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `'small'`
    String,
    /// `42`
    Number,
    /// `true`
    Boolean,
}

impl ValueKind {
    /// TypeScript name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A literal-like union member, normalized for display
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The `null` literal
    Null,
    /// `Record<K, V>` with the raw names of both arguments
    Mapping {
        container: String,
        key: Option<String>,
        value: Option<String>,
    },
    /// String literal
    String(String),
    /// Numeric literal
    Number(Number),
    /// Boolean literal
    Boolean(bool),
    /// Any other literal payload, as JSON text
    Raw(String),
    /// No value, only a name (intrinsics such as `string`)
    Named(String),
    /// Neither value nor name
    Missing,
}

impl LiteralValue {
    /// Normalize a literal-like member
    pub fn from_definition(def: &TypeDefinitionData, marker: &str) -> Self {
        if matches!(def.value, Some(Value::Null)) {
            return LiteralValue::Null;
        }

        if def.name.as_deref() == Some(marker) && def.type_args().len() == 2 {
            let args = def.type_args();
            return LiteralValue::Mapping {
                container: marker.to_string(),
                key: args[0].name.clone(),
                value: args[1].name.clone(),
            };
        }

        match (&def.value, &def.name) {
            (Some(Value::String(s)), _) => LiteralValue::String(s.clone()),
            (Some(Value::Number(n)), _) => LiteralValue::Number(n.clone()),
            (Some(Value::Bool(b)), _) => LiteralValue::Boolean(*b),
            (Some(other), _) => LiteralValue::Raw(other.to_string()),
            (None, Some(name)) => LiteralValue::Named(name.clone()),
            (None, None) => LiteralValue::Missing,
        }
    }

    /// Value kind, for the literals that have one
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            LiteralValue::String(_) => Some(ValueKind::String),
            LiteralValue::Number(_) => Some(ValueKind::Number),
            LiteralValue::Boolean(_) => Some(ValueKind::Boolean),
            _ => None,
        }
    }
}

/// The single kind shared by all values, if there is one
///
/// Any value without a kind (null, intrinsic, container) means no common
/// kind.
pub fn common_kind(values: &[LiteralValue]) -> Option<ValueKind> {
    let first = values.first()?.kind()?;
    values
        .iter()
        .all(|v| v.kind() == Some(first))
        .then_some(first)
}

/// Union or intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositeKind {
    /// `A | B`
    Union,
    /// `A & B`
    Intersection,
}

impl CompositeKind {
    /// Parse TypeDoc's kind discriminator
    pub fn from_kind(kind: Option<&str>) -> Option<Self> {
        match kind? {
            "union" => Some(CompositeKind::Union),
            "intersection" => Some(CompositeKind::Intersection),
            _ => None,
        }
    }
}

/// Bucket a composite member falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberClass {
    /// Literal, intrinsic, or the container reference
    Literal,
    /// Inline declaration with its own properties
    PropertyBag,
    /// Dropped from output
    Other,
}

impl MemberClass {
    /// Classify one union/intersection member
    pub fn of(member: &TypeDefinitionData, marker: &str) -> Self {
        match member.kind.as_deref() {
            Some("literal") | Some("intrinsic") => MemberClass::Literal,
            Some("reference") if member.name.as_deref() == Some(marker) => MemberClass::Literal,
            Some("reflection") => MemberClass::PropertyBag,
            _ => MemberClass::Other,
        }
    }
}

/// Documentation shape of one exported type
#[derive(Debug, Clone, PartialEq)]
pub enum TypeShape<'a> {
    /// Object or callable declaration
    Declaration {
        children: &'a [TypePropertyData],
        signatures: &'a [TypeSignatureData],
    },

    /// Composite with literal-like members; property bags are ignored
    LiteralUnion {
        values: Vec<LiteralValue>,
        common_kind: Option<ValueKind>,
    },

    /// Composite of inline property bags
    PropertyBags {
        kind: CompositeKind,
        /// Reference members, in member order
        references: Vec<&'a TypeDefinitionData>,
        /// Properties of each bag, in member order
        bags: Vec<&'a [TypePropertyData]>,
    },

    /// Generic key/value container
    Mapping {
        container: &'a str,
        key: &'a TypeDefinitionData,
        value: &'a TypeDefinitionData,
    },

    /// Bare primitive
    Primitive { name: &'a str },

    /// Nothing to document
    Unsupported,
}

impl<'a> TypeShape<'a> {
    /// Classify a type definition
    ///
    /// `marker` is the name of the generic key/value container, usually
    /// [`RECORD_MARKER`]. Classification is total: unknown shapes become
    /// [`TypeShape::Unsupported`].
    pub fn classify(def: &'a TypeDefinitionData, marker: &str) -> Self {
        if let Some(declaration) = &def.declaration {
            return TypeShape::Declaration {
                children: declaration.children.as_deref().unwrap_or_default(),
                signatures: declaration.signatures.as_deref().unwrap_or_default(),
            };
        }

        if let (Some(members), Some(kind)) =
            (&def.types, CompositeKind::from_kind(def.kind.as_deref()))
        {
            return Self::classify_composite(kind, members, marker);
        }

        if let [key, value] = def.type_args() {
            if let Some(container) = def.name.as_deref().filter(|name| *name == marker) {
                return TypeShape::Mapping {
                    container,
                    key,
                    value,
                };
            }
        }

        if def.is_kind("intrinsic") {
            if let Some(name) = def.name.as_deref() {
                return TypeShape::Primitive { name };
            }
        }

        TypeShape::Unsupported
    }

    fn classify_composite(
        kind: CompositeKind,
        members: &'a [TypeDefinitionData],
        marker: &str,
    ) -> Self {
        let mut values = Vec::new();
        let mut bags = Vec::new();

        for member in members {
            match MemberClass::of(member, marker) {
                MemberClass::Literal => values.push(LiteralValue::from_definition(member, marker)),
                MemberClass::PropertyBag => bags.push(
                    member
                        .declaration
                        .as_ref()
                        .and_then(|d| d.children.as_deref())
                        .unwrap_or_default(),
                ),
                MemberClass::Other => {}
            }
        }

        if !values.is_empty() {
            let common_kind = common_kind(&values);
            return TypeShape::LiteralUnion {
                values,
                common_kind,
            };
        }

        if bags.is_empty() {
            return TypeShape::Unsupported;
        }

        let references = members
            .iter()
            .filter(|m| m.is_kind("reference") && MemberClass::of(m, marker) == MemberClass::Other)
            .collect();

        TypeShape::PropertyBags {
            kind,
            references,
            bags,
        }
    }

    /// Short label, for logging
    pub fn label(&self) -> &'static str {
        match self {
            TypeShape::Declaration { .. } => "declaration",
            TypeShape::LiteralUnion { .. } => "literal union",
            TypeShape::PropertyBags { .. } => "property bags",
            TypeShape::Mapping { .. } => "mapping",
            TypeShape::Primitive { .. } => "primitive",
            TypeShape::Unsupported => "unsupported",
        }
    }
}
