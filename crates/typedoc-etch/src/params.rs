//! Parameter rendering
//!
//! Call signatures of a documented type list their parameters under an
//! "Arguments" heading, one list entry per parameter.

use crate::fragment::{Inline, ListItem};
use crate::js_doc::EtchDoc;
use crate::model::MethodParamData;
use crate::ts_types::TypeNameResolver;

/// Renders one parameter as a list entry
pub trait ParamRenderer {
    /// Render a parameter, resolving its type through `resolver`
    fn render_param(&self, param: &MethodParamData, resolver: &dyn TypeNameResolver) -> ListItem;
}

/// Default parameter renderer
///
/// Produces `**name** (`type`) - short text`, with `...` before rest
/// parameters and `_(optional)_` after optional ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultParamRenderer;

impl ParamRenderer for DefaultParamRenderer {
    fn render_param(&self, param: &MethodParamData, resolver: &dyn TypeNameResolver) -> ListItem {
        let name = if param.flags.is_rest {
            format!("...{}", param.name)
        } else {
            param.name.clone()
        };

        let mut content = vec![
            Inline::strong(name),
            Inline::text(" ("),
            Inline::code(resolver.resolve_type_name(&param.type_def)),
            Inline::text(")"),
        ];

        if param.flags.is_optional {
            content.push(Inline::text(" "));
            content.push(Inline::emphasis("(optional)"));
        }

        let doc = EtchDoc::from_comment(param.comment.as_ref());
        if let Some(short) = doc.short_text() {
            content.push(Inline::text(" - "));
            content.push(Inline::markdown(short));
        }

        ListItem::new(content)
    }
}
