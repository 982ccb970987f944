//! HTML rendering of fragments
//!
//! Literal text is escaped with `html-escape`; rich text (comment bodies,
//! generated sentences) goes through `comrak`. Keyed blocks become
//! `<div>` elements whose id is the slug of the key.

use crate::docgen::slug;
use crate::fragment::{Fragment, Inline, Table};
use comrak::{markdown_to_html, Options};

/// HTML renderer for fragments
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    /// Wrap the output in a minimal standalone page
    pub standalone: bool,
    /// Page title used when standalone
    pub title: Option<String>,
}

impl HtmlRenderer {
    /// Create a new HTML renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to produce a standalone page
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set the page title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Render a fragment to HTML, ending with a newline
    pub fn render(&self, fragment: &Fragment) -> String {
        let body = render_block(fragment);
        if !self.standalone {
            return format!("{}\n", body);
        }

        let title = self.title.as_deref().unwrap_or("Types");
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
            html_escape::encode_text(title),
            body
        )
    }
}

fn render_block(fragment: &Fragment) -> String {
    match fragment {
        Fragment::Heading { level, content } => {
            let level = (*level).clamp(1, 6);
            format!("<h{0}>{1}</h{0}>", level, render_inlines(content))
        }
        Fragment::Paragraph(content) => format!("<p>{}</p>", render_inlines(content)),
        Fragment::Markdown(text) => markdown(text.trim()).trim_end().to_string(),
        Fragment::Table(table) => render_table(table),
        Fragment::List(items) => {
            let items = items
                .iter()
                .map(|item| format!("<li>{}</li>", render_inlines(&item.content)))
                .collect::<Vec<_>>();
            format!("<ul>\n{}\n</ul>", items.join("\n"))
        }
        Fragment::Block { key, children } => {
            let children = children
                .iter()
                .map(render_block)
                .filter(|html| !html.is_empty())
                .collect::<Vec<_>>();
            format!(
                "<div id=\"{}\">\n{}\n</div>",
                html_escape::encode_double_quoted_attribute(&slug(key)),
                children.join("\n")
            )
        }
    }
}

fn render_table(table: &Table) -> String {
    let mut html = String::from("<table>\n<thead>\n<tr>");
    for header in &table.headers {
        html.push_str(&format!("<th>{}</th>", html_escape::encode_text(header)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &table.rows {
        html.push_str("<tr>");
        for cell in &row.cells {
            html.push_str(&format!("<td>{}</td>", render_inlines(cell)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}

/// Render inline content to HTML
pub fn render_inlines(inlines: &[Inline]) -> String {
    let mut html = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(text) => html.push_str(&html_escape::encode_text(text)),
            Inline::Code(code) => {
                html.push_str(&format!("<code>{}</code>", html_escape::encode_text(code)))
            }
            Inline::Strong(inner) => {
                html.push_str(&format!("<strong>{}</strong>", render_inlines(inner)))
            }
            Inline::Emphasis(inner) => html.push_str(&format!("<em>{}</em>", render_inlines(inner))),
            Inline::Markdown(text) => html.push_str(&inline_markdown(text)),
            Inline::LineBreak => html.push_str("<br />"),
        }
    }
    html
}

/// Render rich text for inline use, dropping a single wrapping paragraph
fn inline_markdown(text: &str) -> String {
    let html = markdown(text.trim());
    let html = html.trim();
    match html
        .strip_prefix("<p>")
        .and_then(|inner| inner.strip_suffix("</p>"))
    {
        Some(inner) if !inner.contains("<p>") => inner.to_string(),
        _ => html.to_string(),
    }
}

/// Rich text to HTML with the GitHub extensions enabled
fn markdown(text: &str) -> String {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    markdown_to_html(text, &options)
}
