//! Documentation generation core
//!
//! This module provides the section renderer and the markdown serializer
//! for the fragments it produces.

mod etcher;
mod markdown;

pub use etcher::{render_section, EtchConfig, Etcher, SECTION_HEADING_LEVEL, SECTION_KEY};
pub use markdown::{escape_markdown, render_inlines, slug, MarkdownRenderer};
