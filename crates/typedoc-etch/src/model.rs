//! Type metadata input model
//!
//! This module provides the serde representation of the metadata tree
//! emitted by the TypeDoc extraction pass. Every structural field is
//! optional: the tree is irregular and the shape of a type is decided
//! later by [`crate::types::TypeShape::classify`], never here.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One exported type (a `type Foo = ...` alias) with its metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeGeneralData {
    /// Exported type name
    pub name: String,

    /// Doc comment attached to the alias
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comment: Option<CommentData>,

    /// The aliased type
    #[serde(rename = "type", default)]
    pub type_def: TypeDefinitionData,
}

/// A type definition node
///
/// `kind` carries TypeDoc's `type` discriminator (`"reference"`, `"union"`,
/// `"literal"`, `"reflection"`, ...). The remaining fields are populated
/// depending on that kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefinitionData {
    /// Type kind discriminator
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub kind: Option<String>,

    /// Referenced or intrinsic type name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,

    /// Literal value; `Some(Value::Null)` is the `null` literal
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "present_value"
    )]
    pub value: Option<Value>,

    /// Union/intersection members
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub types: Option<Vec<TypeDefinitionData>>,

    /// Generic arguments of a reference
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub type_arguments: Option<Vec<TypeDefinitionData>>,

    /// Inline object/function declaration of a reflection
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub declaration: Option<Box<TypeDeclarationData>>,

    /// Element type of an array
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub element_type: Option<Box<TypeDefinitionData>>,

    /// Tuple elements
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub elements: Option<Vec<TypeDefinitionData>>,

    /// Queried symbol of a `typeof` query
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub query_type: Option<Box<TypeDefinitionData>>,

    /// Operator keyword of a type operator (`keyof`, `readonly`, ...)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub operator: Option<String>,

    /// Operand of a type operator
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub target: Option<Box<TypeDefinitionData>>,

    /// Object side of an indexed access (`T` in `T[K]`)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub object_type: Option<Box<TypeDefinitionData>>,

    /// Index side of an indexed access (`K` in `T[K]`)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub index_type: Option<Box<TypeDefinitionData>>,
}

impl TypeDefinitionData {
    /// Create a definition of the given kind
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Default::default()
        }
    }

    /// Create an intrinsic (primitive) type
    pub fn intrinsic(name: impl Into<String>) -> Self {
        Self::new("intrinsic").with_name(name)
    }

    /// Create a type reference
    pub fn reference(name: impl Into<String>) -> Self {
        Self::new("reference").with_name(name)
    }

    /// Create a literal type
    pub fn literal(value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::new("literal")
        }
    }

    /// Create a union of the given members
    pub fn union(types: Vec<TypeDefinitionData>) -> Self {
        Self {
            types: Some(types),
            ..Self::new("union")
        }
    }

    /// Create an intersection of the given members
    pub fn intersection(types: Vec<TypeDefinitionData>) -> Self {
        Self {
            types: Some(types),
            ..Self::new("intersection")
        }
    }

    /// Create an inline declaration (reflection)
    pub fn reflection(declaration: TypeDeclarationData) -> Self {
        Self {
            declaration: Some(Box::new(declaration)),
            ..Self::new("reflection")
        }
    }

    /// Create an array of the given element type
    pub fn array(element: TypeDefinitionData) -> Self {
        Self {
            element_type: Some(Box::new(element)),
            ..Self::new("array")
        }
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set generic type arguments
    pub fn with_type_arguments(mut self, args: Vec<TypeDefinitionData>) -> Self {
        self.type_arguments = Some(args);
        self
    }

    /// Check the kind discriminator
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind.as_deref() == Some(kind)
    }

    /// Generic arguments, empty when absent
    pub fn type_args(&self) -> &[TypeDefinitionData] {
        self.type_arguments.as_deref().unwrap_or_default()
    }
}

/// Inline declaration of an object or callable type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDeclarationData {
    /// Declared properties
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub children: Option<Vec<TypePropertyData>>,

    /// Call signatures
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub signatures: Option<Vec<TypeSignatureData>>,
}

impl TypeDeclarationData {
    /// Declaration with only properties
    pub fn with_children(children: Vec<TypePropertyData>) -> Self {
        Self {
            children: Some(children),
            signatures: None,
        }
    }

    /// Declaration with only call signatures
    pub fn with_signatures(signatures: Vec<TypeSignatureData>) -> Self {
        Self {
            children: None,
            signatures: Some(signatures),
        }
    }
}

/// A property of a declaration (one table row)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypePropertyData {
    /// Property name
    pub name: String,

    /// Property flags
    #[serde(default)]
    pub flags: Flags,

    /// Property type
    #[serde(rename = "type", default)]
    pub type_def: TypeDefinitionData,

    /// Doc comment
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comment: Option<CommentData>,

    /// Default value as written in source
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default_value: Option<String>,
}

/// A call signature of a declaration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSignatureData {
    /// Signature name (usually `__call`)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,

    /// Parameters
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parameters: Option<Vec<MethodParamData>>,

    /// Return type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub type_def: Option<TypeDefinitionData>,

    /// Doc comment
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comment: Option<CommentData>,
}

impl TypeSignatureData {
    /// Parameters, empty when absent
    pub fn params(&self) -> &[MethodParamData] {
        self.parameters.as_deref().unwrap_or_default()
    }
}

/// A parameter of a call signature
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodParamData {
    /// Parameter name
    pub name: String,

    /// Parameter flags
    #[serde(default)]
    pub flags: Flags,

    /// Parameter type
    #[serde(rename = "type", default)]
    pub type_def: TypeDefinitionData,

    /// Doc comment
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comment: Option<CommentData>,

    /// Default value as written in source
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default_value: Option<String>,
}

/// Reflection flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flags {
    /// `foo?: T`
    #[serde(default)]
    pub is_optional: bool,

    /// `...foo: T[]`
    #[serde(default)]
    pub is_rest: bool,
}

/// Raw doc comment as emitted by the extractor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentData {
    /// First paragraph
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub short_text: Option<String>,

    /// Remaining paragraphs
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,

    /// Block tags (`@default`, `@example`, ...)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tags: Option<Vec<CommentTagData>>,
}

/// A block tag of a doc comment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentTagData {
    /// Tag name without `@`
    pub tag: String,

    /// Tag content
    #[serde(default)]
    pub text: String,
}

/// Keep an explicit JSON `null` as `Some(Value::Null)` instead of `None`
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
