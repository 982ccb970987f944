//! Test utilities and mock objects for typedoc-etch.
//!
//! This module provides builders for the metadata nodes the renderers
//! consume, so tests can describe inputs in a line or two.
//!
//! # Example
//!
//! ```
//! use typedoc_etch::test::{mock_property, mock_type_node};
//! use typedoc_etch::model::{TypeDeclarationData, TypeDefinitionData};
//!
//! let node = mock_type_node(
//!     "Options",
//!     TypeDefinitionData::reflection(TypeDeclarationData::with_children(vec![
//!         mock_property("verbose", "boolean"),
//!     ])),
//! );
//! assert_eq!(node.name, "Options");
//! ```

use crate::model::{
    CommentData, CommentTagData, Flags, MethodParamData, TypeDeclarationData, TypeDefinitionData,
    TypeGeneralData, TypePropertyData, TypeSignatureData,
};

/// Create a mock comment with a short text.
pub fn mock_comment(short_text: &str) -> CommentData {
    CommentData {
        short_text: Some(short_text.to_string()),
        text: None,
        tags: None,
    }
}

/// Create a mock comment with a short text and block tags.
///
/// Tags are `(tag, text)` pairs, kept in the given order.
pub fn mock_comment_with_tags(short_text: &str, tags: &[(&str, &str)]) -> CommentData {
    CommentData {
        tags: Some(
            tags.iter()
                .map(|(tag, text)| CommentTagData {
                    tag: tag.to_string(),
                    text: text.to_string(),
                })
                .collect(),
        ),
        ..mock_comment(short_text)
    }
}

/// Create a mock exported type node.
pub fn mock_type_node(name: &str, type_def: TypeDefinitionData) -> TypeGeneralData {
    TypeGeneralData {
        name: name.to_string(),
        comment: None,
        type_def,
    }
}

/// Create a mock exported type node with a doc comment.
pub fn mock_documented_node(
    name: &str,
    short_text: &str,
    type_def: TypeDefinitionData,
) -> TypeGeneralData {
    TypeGeneralData {
        comment: Some(mock_comment(short_text)),
        ..mock_type_node(name, type_def)
    }
}

/// Create a mock required property of an intrinsic type.
pub fn mock_property(name: &str, type_name: &str) -> TypePropertyData {
    TypePropertyData {
        name: name.to_string(),
        flags: Flags::default(),
        type_def: TypeDefinitionData::intrinsic(type_name),
        comment: None,
        default_value: None,
    }
}

/// Create a mock optional property of an intrinsic type.
pub fn mock_optional_property(name: &str, type_name: &str) -> TypePropertyData {
    TypePropertyData {
        flags: Flags {
            is_optional: true,
            is_rest: false,
        },
        ..mock_property(name, type_name)
    }
}

/// Create a mock required parameter of an intrinsic type.
pub fn mock_param(name: &str, type_name: &str) -> MethodParamData {
    MethodParamData {
        name: name.to_string(),
        flags: Flags::default(),
        type_def: TypeDefinitionData::intrinsic(type_name),
        comment: None,
        default_value: None,
    }
}

/// Create a mock call signature.
///
/// An empty parameter list leaves `parameters` unset, as the extractor does.
pub fn mock_signature(params: Vec<MethodParamData>, returns: &str) -> TypeSignatureData {
    TypeSignatureData {
        name: Some("__call".to_string()),
        parameters: (!params.is_empty()).then_some(params),
        type_def: Some(TypeDefinitionData::intrinsic(returns)),
        comment: None,
    }
}

/// Create a mock object type (reflection with properties).
pub fn mock_object(children: Vec<TypePropertyData>) -> TypeDefinitionData {
    TypeDefinitionData::reflection(TypeDeclarationData::with_children(children))
}

/// Create a mock union of string literals.
pub fn mock_string_literals(values: &[&str]) -> TypeDefinitionData {
    TypeDefinitionData::union(
        values
            .iter()
            .map(|v| TypeDefinitionData::literal(*v))
            .collect(),
    )
}

/// Create a mock `Record<K, V>` reference over two intrinsic types.
pub fn mock_record(key: &str, value: &str) -> TypeDefinitionData {
    TypeDefinitionData::reference("Record").with_type_arguments(vec![
        TypeDefinitionData::intrinsic(key),
        TypeDefinitionData::intrinsic(value),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_property() {
        let prop = mock_property("timeout", "number");
        assert_eq!(prop.name, "timeout");
        assert!(!prop.flags.is_optional);
        assert_eq!(prop.type_def.name.as_deref(), Some("number"));
        assert!(mock_optional_property("x", "string").flags.is_optional);
    }

    #[test]
    fn test_mock_signature() {
        assert!(mock_signature(vec![], "void").parameters.is_none());
        let sig = mock_signature(vec![mock_param("a", "string")], "void");
        assert_eq!(sig.params().len(), 1);
    }

    #[test]
    fn test_mock_comment_with_tags() {
        let comment = mock_comment_with_tags("Short.", &[("default", "1"), ("example", "x")]);
        let tags = comment.tags.unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].tag, "default");
    }
}
