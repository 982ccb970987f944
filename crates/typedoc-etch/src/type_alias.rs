//! Type section rendering
//!
//! Renders one exported type (`type Foo = ...`) as a keyed block: a level 3
//! heading with the type name, then a body chosen by its [`TypeShape`].

use crate::decorators::acceptable_values;
use crate::docgen::Etcher;
use crate::fragment::{Fragment, Inline, ListItem};
use crate::js_doc::EtchDoc;
use crate::model::{TypeDefinitionData, TypeGeneralData, TypePropertyData, TypeSignatureData};
use crate::properties::build_property_table;
use crate::types::{CompositeKind, TypeShape};
use tracing::{debug, trace};

/// Heading level of one documented type
pub const TYPE_HEADING_LEVEL: u8 = 3;

/// Heading level of an "Arguments" list
pub const ARGUMENTS_HEADING_LEVEL: u8 = 4;

impl Etcher {
    /// Render one exported type
    ///
    /// Returns `None` when the type has a shape that is not documented
    /// (arrays, tuples, conditional types, ...). That is never an error.
    pub fn render_type(&self, node: &TypeGeneralData) -> Option<Fragment> {
        let shape = TypeShape::classify(&node.type_def, &self.config().container_marker);
        trace!(name = %node.name, shape = shape.label(), "classified type");

        let doc = EtchDoc::from_comment(node.comment.as_ref());
        let fragment = match shape {
            TypeShape::Declaration {
                children,
                signatures,
            } => self.render_declaration(&node.name, &doc, children, signatures),
            TypeShape::LiteralUnion {
                values,
                common_kind,
            } => Some(Fragment::block(
                format!("type-definition-{}", node.name),
                vec![
                    type_heading(&node.name),
                    Fragment::Markdown(acceptable_values(&values, common_kind)),
                ],
            )),
            TypeShape::PropertyBags {
                kind,
                references,
                bags,
            } => self.render_property_bags(&node.name, &doc, kind, &references, &bags),
            TypeShape::Mapping {
                container,
                key,
                value,
            } => {
                let mut children = vec![type_heading(&node.name)];
                children.push(Fragment::List(vec![ListItem::new(vec![Inline::code(
                    format!(
                        "{}<{}, {}>",
                        container,
                        self.raw_name(key),
                        self.resolver().resolve_type_name(value)
                    ),
                )])]));
                children.extend(doc.to_fragments());
                Some(Fragment::block(
                    format!("record-definition-{}", node.name),
                    children,
                ))
            }
            TypeShape::Primitive { name } => {
                let mut children = vec![type_heading(&node.name)];
                children.extend(doc.to_fragments());
                children.push(Fragment::Paragraph(vec![
                    Inline::strong("Type:"),
                    Inline::text(" "),
                    Inline::code(name),
                ]));
                Some(Fragment::block(
                    format!("generic-type-definition-{}", node.name),
                    children,
                ))
            }
            TypeShape::Unsupported => None,
        };

        if fragment.is_none() {
            debug!(name = %node.name, "skipping type with no documentable shape");
        }
        fragment
    }

    fn render_declaration(
        &self,
        name: &str,
        doc: &EtchDoc,
        children: &[TypePropertyData],
        signatures: &[TypeSignatureData],
    ) -> Option<Fragment> {
        let title = if signatures.is_empty() {
            name.to_string()
        } else {
            format!("{}()", name)
        };

        let mut fragments = vec![type_heading(&title)];
        fragments.extend(doc.to_fragments());

        if !children.is_empty() {
            fragments.push(Fragment::Table(build_property_table(
                children,
                self.resolver(),
            )));
        }

        for signature in signatures {
            let params = signature.params();
            if params.is_empty() {
                continue;
            }
            fragments.push(Fragment::heading(
                ARGUMENTS_HEADING_LEVEL,
                vec![Inline::text("Arguments")],
            ));
            fragments.push(Fragment::List(
                params
                    .iter()
                    .map(|param| self.param_renderer().render_param(param, self.resolver()))
                    .collect(),
            ));
        }

        Some(Fragment::block(format!("type-definition-{}", name), fragments))
    }

    fn render_property_bags(
        &self,
        name: &str,
        doc: &EtchDoc,
        kind: CompositeKind,
        references: &[&TypeDefinitionData],
        bags: &[&[TypePropertyData]],
    ) -> Option<Fragment> {
        let mut fragments = vec![type_heading(name)];

        if kind == CompositeKind::Intersection && !references.is_empty() {
            let mut sentence = Vec::new();
            for (i, reference) in references.iter().enumerate() {
                if i > 0 {
                    sentence.push(Inline::text(", "));
                }
                sentence.push(Inline::code(self.resolver().resolve_type_name(reference)));
            }
            sentence.push(Inline::text(" extended by:"));
            fragments.push(Fragment::Paragraph(sentence));
        }

        fragments.extend(doc.to_fragments());

        for bag in bags.iter().filter(|bag| !bag.is_empty()) {
            fragments.push(Fragment::Table(build_property_table(bag, self.resolver())));
        }

        Some(Fragment::block(
            format!("prop-type-definition-{}", name),
            fragments,
        ))
    }

    /// Raw name of a type argument, resolved when it has none
    fn raw_name(&self, ty: &TypeDefinitionData) -> String {
        ty.name
            .clone()
            .unwrap_or_else(|| self.resolver().resolve_type_name(ty))
    }
}

fn type_heading(title: &str) -> Fragment {
    Fragment::heading(TYPE_HEADING_LEVEL, vec![Inline::code(title)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docgen::EtchConfig;
    use crate::fragment::Table;
    use crate::model::{TypeDeclarationData, TypeDefinitionData};
    use crate::test::*;
    use pretty_assertions::assert_eq;

    fn tables(fragment: &Fragment) -> Vec<&Table> {
        fragment
            .children()
            .iter()
            .filter_map(|f| match f {
                Fragment::Table(table) => Some(table),
                _ => None,
            })
            .collect()
    }

    fn key(fragment: &Fragment) -> &str {
        match fragment {
            Fragment::Block { key, .. } => key,
            _ => "",
        }
    }

    #[test]
    fn test_literal_union() {
        let node = mock_type_node("Size", mock_string_literals(&["small", "medium", "large"]));
        let fragment = Etcher::default().render_type(&node).unwrap();

        assert_eq!(key(&fragment), "type-definition-Size");
        assert_eq!(
            fragment.children(),
            &[
                Fragment::heading(3, vec![Inline::code("Size")]),
                Fragment::Markdown(
                    "`string` - Acceptable values are: `'small'`, `'medium'`, `'large'`.".into()
                ),
            ]
        );
    }

    #[test]
    fn test_mixed_kinds_have_no_prefix() {
        let node = mock_type_node(
            "Quality",
            TypeDefinitionData::union(vec![
                TypeDefinitionData::literal(1),
                TypeDefinitionData::literal("auto"),
                TypeDefinitionData::literal(serde_json::Value::Null),
            ]),
        );
        let fragment = Etcher::default().render_type(&node).unwrap();
        assert_eq!(
            fragment.children()[1],
            Fragment::Markdown("Acceptable values are: `1`, `'auto'`, `null`.".into())
        );
    }

    #[test]
    fn test_declaration_with_table() {
        let node = mock_documented_node(
            "Options",
            "Options for the call.",
            mock_object(vec![
                mock_optional_property("verbose", "boolean"),
                crate::model::TypePropertyData {
                    default_value: Some("30".into()),
                    ..mock_property("timeout", "number")
                },
            ]),
        );
        let fragment = Etcher::default().render_type(&node).unwrap();

        assert_eq!(key(&fragment), "type-definition-Options");
        assert_eq!(fragment.children()[0], type_heading("Options"));
        assert_eq!(
            fragment.children()[1],
            Fragment::Markdown("Options for the call.".into())
        );

        let tables = tables(&fragment);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows.len(), 2);
        assert_eq!(
            Inline::plain_text(&tables[0].rows[0].cells[0]),
            "verbose\n(optional)"
        );
        assert_eq!(
            Inline::plain_text(&tables[0].rows[1].cells[2]),
            "-\nDefault: 30"
        );
    }

    #[test]
    fn test_callable_declaration() {
        let node = mock_type_node(
            "Listener",
            TypeDefinitionData::reflection(TypeDeclarationData::with_signatures(vec![
                mock_signature(vec![mock_param("event", "string")], "void"),
                mock_signature(vec![], "void"),
            ])),
        );
        let fragment = Etcher::default().render_type(&node).unwrap();
        let children = fragment.children();

        assert_eq!(children[0], type_heading("Listener()"));
        assert!(tables(&fragment).is_empty());
        // Only the signature with parameters gets an Arguments list
        assert_eq!(
            children[1],
            Fragment::heading(4, vec![Inline::text("Arguments")])
        );
        assert_eq!(children[2].plain_text(), "event (string)");
        assert_eq!(children.len(), 3);
    }

    #[test]
    fn test_intersection_of_bags() {
        let node = mock_documented_node(
            "ExtendedOptions",
            "Extra options.",
            TypeDefinitionData::intersection(vec![
                TypeDefinitionData::reference("BaseOptions"),
                TypeDefinitionData::reference("Styles"),
                mock_object(vec![mock_property("a", "string")]),
                mock_object(vec![]),
                mock_object(vec![mock_property("b", "number")]),
            ]),
        );
        let fragment = Etcher::default().render_type(&node).unwrap();
        let children = fragment.children();

        assert_eq!(key(&fragment), "prop-type-definition-ExtendedOptions");
        assert_eq!(
            children[1],
            Fragment::Paragraph(vec![
                Inline::code("BaseOptions"),
                Inline::text(", "),
                Inline::code("Styles"),
                Inline::text(" extended by:"),
            ])
        );
        assert_eq!(children[2], Fragment::Markdown("Extra options.".into()));
        assert_eq!(tables(&fragment).len(), 2);
    }

    #[test]
    fn test_union_of_bags_has_no_extension_sentence() {
        let node = mock_type_node(
            "Source",
            TypeDefinitionData::union(vec![
                TypeDefinitionData::reference("Asset"),
                mock_object(vec![mock_property("uri", "string")]),
            ]),
        );
        let fragment = Etcher::default().render_type(&node).unwrap();
        assert_eq!(fragment.children().len(), 2);
        assert!(matches!(fragment.children()[1], Fragment::Table(_)));
    }

    #[test]
    fn test_literals_win_over_bags() {
        let node = mock_type_node(
            "Mode",
            TypeDefinitionData::union(vec![
                mock_object(vec![mock_property("custom", "string")]),
                TypeDefinitionData::literal("auto"),
            ]),
        );
        let fragment = Etcher::default().render_type(&node).unwrap();
        assert!(tables(&fragment).is_empty());
        assert_eq!(
            fragment.children()[1],
            Fragment::Markdown("`string` - Acceptable values are: `'auto'`.".into())
        );
    }

    #[test]
    fn test_mapping() {
        let node = mock_type_node("Headers", mock_record("string", "string"));
        let fragment = Etcher::default().render_type(&node).unwrap();

        assert_eq!(key(&fragment), "record-definition-Headers");
        assert_eq!(
            fragment.children()[1],
            Fragment::List(vec![ListItem::new(vec![Inline::code(
                "Record<string, string>"
            )])])
        );
    }

    #[test]
    fn test_mapping_value_is_resolved() {
        let def = TypeDefinitionData::reference("Record").with_type_arguments(vec![
            TypeDefinitionData::intrinsic("string"),
            TypeDefinitionData::array(TypeDefinitionData::intrinsic("number")),
        ]);
        let fragment = Etcher::default()
            .render_type(&mock_type_node("Scores", def))
            .unwrap();
        assert_eq!(fragment.children()[1].plain_text(), "Record<string, number[]>");
    }

    #[test]
    fn test_custom_container_marker() {
        let def = TypeDefinitionData::reference("Dictionary").with_type_arguments(vec![
            TypeDefinitionData::intrinsic("string"),
            TypeDefinitionData::intrinsic("number"),
        ]);
        let config = EtchConfig {
            container_marker: "Dictionary".into(),
            ..Default::default()
        };
        let node = mock_type_node("Counts", def);

        assert!(Etcher::default().render_type(&node).is_none());
        let fragment = Etcher::new(config).render_type(&node).unwrap();
        assert_eq!(fragment.children()[1].plain_text(), "Dictionary<string, number>");
    }

    #[test]
    fn test_primitive() {
        let node = mock_documented_node("Id", "Unique id.", TypeDefinitionData::intrinsic("string"));
        let fragment = Etcher::default().render_type(&node).unwrap();

        assert_eq!(key(&fragment), "generic-type-definition-Id");
        assert!(tables(&fragment).is_empty());
        assert_eq!(fragment.children()[1], Fragment::Markdown("Unique id.".into()));
        assert_eq!(fragment.children()[2].plain_text(), "Type: string");
    }

    #[test]
    fn test_unsupported_shapes() {
        let etcher = Etcher::default();
        let array = mock_type_node(
            "Names",
            TypeDefinitionData::array(TypeDefinitionData::intrinsic("string")),
        );
        assert_eq!(etcher.render_type(&array), None);

        let empty_union = mock_type_node(
            "Refs",
            TypeDefinitionData::union(vec![TypeDefinitionData::reference("A")]),
        );
        assert_eq!(etcher.render_type(&empty_union), None);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let etcher = Etcher::default();
        let node = mock_documented_node(
            "Options",
            "Options.",
            mock_object(vec![mock_property("a", "string")]),
        );
        assert_eq!(etcher.render_type(&node), etcher.render_type(&node));
    }

    #[test]
    fn test_custom_resolver() {
        let etcher = Etcher::default().with_resolver(|ty: &TypeDefinitionData| {
            format!("[{}]", ty.name.as_deref().unwrap_or("?"))
        });
        let node = mock_type_node("Options", mock_object(vec![mock_property("a", "string")]));
        let fragment = etcher.render_type(&node).unwrap();
        assert_eq!(tables(&fragment)[0].rows[0].cells[1], vec![Inline::code("[string]")]);
    }
}
