//! Output fragments
//!
//! Renderers never produce final bytes. They emit this small structured
//! tree (headings, paragraphs, tables, lists) which a serializer such as
//! [`crate::docgen::MarkdownRenderer`] turns into the target format.

use serde::{Deserialize, Serialize};

/// A block-level unit of output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Fragment {
    /// Section or symbol heading
    Heading { level: u8, content: Vec<Inline> },

    /// Paragraph of inline content
    Paragraph(Vec<Inline>),

    /// Rich text (markdown) passed through to the serializer
    Markdown(String),

    /// Table
    Table(Table),

    /// Unordered list
    List(Vec<ListItem>),

    /// Keyed group of fragments (one documented type, one section)
    Block { key: String, children: Vec<Fragment> },
}

impl Fragment {
    /// Create a heading
    pub fn heading(level: u8, content: Vec<Inline>) -> Self {
        Fragment::Heading { level, content }
    }

    /// Create a keyed block
    pub fn block(key: impl Into<String>, children: Vec<Fragment>) -> Self {
        Fragment::Block {
            key: key.into(),
            children,
        }
    }

    /// Children of a block, empty for every other fragment
    pub fn children(&self) -> &[Fragment] {
        match self {
            Fragment::Block { children, .. } => children,
            _ => &[],
        }
    }

    /// Flatten to plain text, one line per block-level fragment
    pub fn plain_text(&self) -> String {
        match self {
            Fragment::Heading { content, .. } | Fragment::Paragraph(content) => {
                Inline::plain_text(content)
            }
            Fragment::Markdown(text) => text.clone(),
            Fragment::Table(table) => table
                .rows
                .iter()
                .map(|row| {
                    row.cells
                        .iter()
                        .map(|cell| Inline::plain_text(cell))
                        .collect::<Vec<_>>()
                        .join(" | ")
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Fragment::List(items) => items
                .iter()
                .map(|item| Inline::plain_text(&item.content))
                .collect::<Vec<_>>()
                .join("\n"),
            Fragment::Block { children, .. } => children
                .iter()
                .map(Fragment::plain_text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Inline content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Inline {
    /// Literal text
    Text(String),
    /// Inline code span
    Code(String),
    /// Bold
    Strong(Vec<Inline>),
    /// Italic
    Emphasis(Vec<Inline>),
    /// Inline rich text (markdown)
    Markdown(String),
    /// Hard line break
    LineBreak,
}

impl Inline {
    /// Literal text
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text(text.into())
    }

    /// Code span
    pub fn code(code: impl Into<String>) -> Self {
        Inline::Code(code.into())
    }

    /// Bold literal text
    pub fn strong(text: impl Into<String>) -> Self {
        Inline::Strong(vec![Inline::text(text)])
    }

    /// Italic literal text
    pub fn emphasis(text: impl Into<String>) -> Self {
        Inline::Emphasis(vec![Inline::text(text)])
    }

    /// Inline rich text
    pub fn markdown(text: impl Into<String>) -> Self {
        Inline::Markdown(text.into())
    }

    /// Flatten inline content to plain text; line breaks become newlines
    pub fn plain_text(inlines: &[Inline]) -> String {
        let mut out = String::new();
        for inline in inlines {
            match inline {
                Inline::Text(s) | Inline::Code(s) | Inline::Markdown(s) => out.push_str(s),
                Inline::Strong(inner) | Inline::Emphasis(inner) => {
                    out.push_str(&Inline::plain_text(inner))
                }
                Inline::LineBreak => out.push('\n'),
            }
        }
        out
    }
}

/// Table with a header row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Column headers
    pub headers: Vec<String>,
    /// Body rows
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create an empty table with headers
    pub fn new(headers: Vec<impl Into<String>>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row
    pub fn add_row(&mut self, cells: Vec<Vec<Inline>>) {
        self.rows.push(TableRow { cells });
    }
}

/// One table row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// Cell contents, one entry per column
    pub cells: Vec<Vec<Inline>>,
}

/// One list entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    /// Item content
    pub content: Vec<Inline>,
}

impl ListItem {
    /// Create an item
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content }
    }
}
