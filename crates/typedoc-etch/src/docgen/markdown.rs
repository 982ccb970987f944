//! Markdown rendering of fragments
//!
//! Turns the fragment tree into GitHub-flavored markdown: ATX headings,
//! pipe tables and `-` lists, with a blank line between block fragments.

use crate::decorators::code_span;
use crate::fragment::{Fragment, Inline, Table};

/// Line break inside headings, paragraphs and table cells
const BREAK: &str = "<br />";

/// Markdown renderer for fragments
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    /// Added to every heading level (clamped to 6)
    pub heading_offset: u8,
    /// Whether to emit an HTML anchor before each keyed block
    pub anchors: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift all heading levels down by `offset`
    pub fn with_heading_offset(mut self, offset: u8) -> Self {
        self.heading_offset = offset;
        self
    }

    /// Set whether to emit block anchors
    pub fn with_anchors(mut self, anchors: bool) -> Self {
        self.anchors = anchors;
        self
    }

    /// Render a fragment to markdown, ending with a newline
    pub fn render(&self, fragment: &Fragment) -> String {
        let mut md = self.render_block(fragment);
        md.push('\n');
        md
    }

    fn render_block(&self, fragment: &Fragment) -> String {
        match fragment {
            Fragment::Heading { level, content } => {
                let level = level.saturating_add(self.heading_offset).clamp(1, 6);
                format!("{} {}", "#".repeat(level as usize), render_inlines(content))
            }
            Fragment::Paragraph(content) => render_inlines(content),
            Fragment::Markdown(text) => text.trim().to_string(),
            Fragment::Table(table) => render_table(table),
            Fragment::List(items) => items
                .iter()
                .map(|item| format!("- {}", render_inlines(&item.content).replace('\n', " ")))
                .collect::<Vec<_>>()
                .join("\n"),
            Fragment::Block { key, children } => {
                let mut parts = Vec::with_capacity(children.len() + 1);
                if self.anchors {
                    parts.push(format!("<a id=\"{}\"></a>", slug(key)));
                }
                parts.extend(
                    children
                        .iter()
                        .map(|child| self.render_block(child))
                        .filter(|md| !md.is_empty()),
                );
                parts.join("\n\n")
            }
        }
    }
}

fn render_table(table: &Table) -> String {
    let mut md = String::new();

    md.push_str(&format!("| {} |\n", table.headers.join(" | ")));
    md.push_str(&format!(
        "| {} |",
        vec!["---"; table.headers.len()].join(" | ")
    ));

    for row in &table.rows {
        let cells = row
            .cells
            .iter()
            .map(|cell| escape_cell(&render_inlines(cell)))
            .collect::<Vec<_>>();
        md.push_str(&format!("\n| {} |", cells.join(" | ")));
    }

    md
}

/// Render inline content to markdown
pub fn render_inlines(inlines: &[Inline]) -> String {
    let mut md = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(text) => md.push_str(&escape_markdown(text)),
            Inline::Code(code) => md.push_str(&code_span(code)),
            Inline::Strong(inner) => md.push_str(&format!("**{}**", render_inlines(inner))),
            Inline::Emphasis(inner) => md.push_str(&format!("_{}_", render_inlines(inner))),
            Inline::Markdown(text) => md.push_str(text.trim()),
            Inline::LineBreak => md.push_str(BREAK),
        }
    }
    md
}

/// Make rendered inline markdown safe for a single table cell
fn escape_cell(md: &str) -> String {
    md.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}

/// Generate a URL-safe slug from a string
pub fn slug(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '-',
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Escape markdown emphasis, code and link characters in literal text
pub fn escape_markdown(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' | '_' | '`' | '[' | ']' | '<' | '\\' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
