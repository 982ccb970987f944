//! Doc comment normalization
//!
//! TypeDoc hands over comments as a short text, a long text and a flat
//! list of block tags. `EtchDoc` trims the texts and folds the tags into an
//! ordered map keyed by tag name so renderers look tags up instead of
//! scanning the list every time.

use crate::fragment::{Fragment, Inline};
use crate::model::CommentData;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Tag holding a property default (`@default 30`)
pub const DEFAULT_TAG: &str = "default";

/// Tag holding a usage example
pub const EXAMPLE_TAG: &str = "example";

/// Normalized documentation comment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtchDoc {
    /// First paragraph
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub short_text: Option<String>,

    /// Remaining paragraphs
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,

    /// Tag name to text; the first tag of each name wins
    #[serde(skip_serializing_if = "IndexMap::is_empty", default)]
    pub tags: IndexMap<String, String>,
}

impl EtchDoc {
    /// Create a new empty doc
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize an optional raw comment
    pub fn from_comment(comment: Option<&CommentData>) -> Self {
        comment.map(Self::from).unwrap_or_default()
    }

    /// Check if this doc is empty
    pub fn is_empty(&self) -> bool {
        self.short_text.is_none() && self.text.is_none() && self.tags.is_empty()
    }

    /// Get the short text
    pub fn short_text(&self) -> Option<&str> {
        self.short_text.as_deref()
    }

    /// Get the text of the first tag with this name
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(String::as_str)
    }

    /// Get the `@default` value
    pub fn default_value(&self) -> Option<&str> {
        self.tag(DEFAULT_TAG)
    }

    /// Get the `@example` text
    pub fn example(&self) -> Option<&str> {
        self.tag(EXAMPLE_TAG)
    }

    /// Render the description block: short text, long text, then example
    pub fn to_fragments(&self) -> Vec<Fragment> {
        let mut fragments = Vec::new();

        if let Some(short) = &self.short_text {
            fragments.push(Fragment::Markdown(short.clone()));
        }
        if let Some(text) = &self.text {
            fragments.push(Fragment::Markdown(text.clone()));
        }
        if let Some(example) = self.example() {
            fragments.push(Fragment::Paragraph(vec![Inline::strong("Example:")]));
            fragments.push(Fragment::Markdown(example.to_string()));
        }

        fragments
    }
}

impl From<&CommentData> for EtchDoc {
    fn from(comment: &CommentData) -> Self {
        let mut tags = IndexMap::new();
        for tag in comment.tags.iter().flatten() {
            let Some(text) = non_blank(Some(&tag.text)) else {
                continue;
            };
            tags.entry(tag.tag.clone()).or_insert(text);
        }

        Self {
            short_text: non_blank(comment.short_text.as_ref()),
            text: non_blank(comment.text.as_ref()),
            tags,
        }
    }
}

/// Trim text, treating whitespace-only text as absent
fn non_blank(text: Option<&String>) -> Option<String> {
    text.map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
