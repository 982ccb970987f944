//! typedoc-etch: "Types" section renderer for TypeDoc metadata
//!
//! This crate turns the exported type aliases of a TypeDoc JSON dump into
//! documentation fragments:
//! - Classifying each type into a closed set of shapes (object or callable
//!   declaration, literal union, property bags, `Record<K, V>`, primitive)
//! - Building property tables and "Acceptable values are: ..." sentences
//! - Grouping the rendered types under one section heading
//! - Serializing the fragment tree to Markdown or HTML
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ TypeDoc JSON    │
//! │ (parser)        │
//! └────────┬────────┘
//!          ▼
//!   ┌──────────────┐     ┌───────────────────────────┐
//!   │  TypeShape   │────▶│ tables / values / params  │
//!   └──────┬───────┘     └─────────────┬─────────────┘
//!          └──────────────┬────────────┘
//!                         ▼
//!                  ┌────────────┐
//!                  │  Fragment  │
//!                  └──────┬─────┘
//!          ┌──────────────┴──────────┐
//!          ▼                         ▼
//!    ┌──────────┐              ┌──────────┐
//!    │ Markdown │              │   HTML   │
//!    └──────────┘              └──────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use typedoc_etch::{parse_types, Etcher, MarkdownRenderer};
//!
//! let nodes = parse_types(r#"[{
//!     "name": "Id",
//!     "type": { "type": "intrinsic", "name": "string" }
//! }]"#).unwrap();
//!
//! let section = Etcher::default().render_section(&nodes).unwrap();
//! let md = MarkdownRenderer::new().render(&section);
//! assert!(md.starts_with("## Types"));
//! ```

// Input model
pub mod js_doc;
pub mod model;
pub mod parser;

// Classification and rendering
pub mod decorators;
pub mod fragment;
pub mod params;
pub mod properties;
pub mod ts_types;
pub mod type_alias;
pub mod types;

// Utilities
pub mod diagnostics;
pub mod test;

// Output
pub mod docgen;
#[cfg(feature = "html")]
pub mod html;

// Re-exports for convenience
pub use decorators::{acceptable_values, decorate_value};
pub use diagnostics::{EtchError, EtchResult};
pub use fragment::{Fragment, Inline, ListItem, Table, TableRow};
pub use js_doc::EtchDoc;
pub use model::{
    CommentData, CommentTagData, Flags, MethodParamData, TypeDeclarationData, TypeDefinitionData,
    TypeGeneralData, TypePropertyData, TypeSignatureData,
};
pub use params::{DefaultParamRenderer, ParamRenderer};
pub use parser::{load_types, parse_types, read_types};
pub use properties::build_property_table;
pub use ts_types::{TypeDocResolver, TypeNameResolver};
pub use types::{LiteralValue, TypeShape, ValueKind, RECORD_MARKER};

// Documentation generation
pub use docgen::{render_section, EtchConfig, Etcher, MarkdownRenderer};

#[cfg(feature = "html")]
pub use html::HtmlRenderer;

/// Version of typedoc-etch
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
