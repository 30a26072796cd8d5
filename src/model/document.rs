//! Document-level types.
//!
//! A [`DocumentModel`] is the decoded form of a proposal or RFP: ordered
//! paragraphs, each holding styled text runs. Decoders (external
//! collaborators, see [`crate::decode`]) produce these models; everything
//! in this crate consumes them.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Source format a document was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Word document: full runs (text, bold, font name, font size) plus
    /// paragraph style names.
    #[default]
    Docx,
    /// PDF: text and font size only. Runs carry `bold = false` and no
    /// font name; paragraphs carry no style name.
    Pdf,
}

/// A run of text with the layout signals heading inference relies on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyledRun {
    /// Normalized text: NFKC, control characters stripped, trimmed,
    /// lowercased.
    pub text: String,

    /// Bold flag from the source run.
    pub bold: bool,

    /// Font size in points, when the source carries one.
    pub font_size_pt: Option<f32>,

    /// Font name, when the source carries one.
    pub font_name: Option<String>,
}

impl StyledRun {
    /// Create a run, normalizing the text.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            text: normalize_text(text.as_ref()),
            bold: false,
            font_size_pt: None,
            font_name: None,
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl AsRef<str>) -> Self {
        Self {
            bold: true,
            ..Self::new(text)
        }
    }

    /// Set the font size in points.
    pub fn with_size(mut self, size: f32) -> Self {
        self.font_size_pt = Some(size);
        self
    }

    /// Set the font name.
    pub fn with_font(mut self, name: impl Into<String>) -> Self {
        self.font_name = Some(name.into());
        self
    }

    /// Check if this run carries no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A paragraph of the decoded document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Styled runs in source order.
    pub runs: Vec<StyledRun>,

    /// Paragraph style name from the source (e.g. "Heading 1"), if any.
    pub style_name: Option<String>,
}

/// Paragraph styles exempt from the uniform body-size rule.
const HEADING_STYLES: [&str; 3] = ["heading 1", "heading 2", "heading 3"];

impl Paragraph {
    /// Create a paragraph from plain text (one run, no styling).
    pub fn with_text(text: impl AsRef<str>) -> Self {
        Self {
            runs: vec![StyledRun::new(text)],
            ..Default::default()
        }
    }

    /// Create a paragraph from runs.
    pub fn from_runs(runs: Vec<StyledRun>) -> Self {
        Self {
            runs,
            ..Default::default()
        }
    }

    /// Set the paragraph style name.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style_name = Some(style.into());
        self
    }

    /// Get the joined text of all runs.
    pub fn text(&self) -> String {
        self.runs
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check if the paragraph has no text.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.is_empty())
    }

    /// Whether the style name marks this paragraph as a heading
    /// (Heading 1/2/3).
    pub fn is_heading_style(&self) -> bool {
        self.style_name
            .as_deref()
            .map(|s| HEADING_STYLES.contains(&s.to_lowercase().as_str()))
            .unwrap_or(false)
    }
}

/// A decoded document: ordered paragraphs plus the source format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentModel {
    /// Paragraphs in document order.
    pub paragraphs: Vec<Paragraph>,

    /// Source format.
    pub kind: DocumentKind,
}

impl DocumentModel {
    /// Create an empty document model.
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            paragraphs: Vec::new(),
            kind,
        }
    }

    /// Build a model from plain-text paragraphs.
    pub fn from_texts<S: AsRef<str>>(kind: DocumentKind, texts: &[S]) -> Self {
        Self {
            paragraphs: texts.iter().map(Paragraph::with_text).collect(),
            kind,
        }
    }

    /// Add a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Check if the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Newline-joined paragraph text. Already normalized, so suitable as
    /// the coverage-matching target.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// All runs in document order, flattened across paragraphs.
    pub fn styled_runs(&self) -> Vec<StyledRun> {
        self.paragraphs
            .iter()
            .flat_map(|p| p.runs.iter().cloned())
            .collect()
    }
}

/// Normalize source text: NFKC, control characters stripped, trimmed,
/// lowercased.
pub fn normalize_text(text: &str) -> String {
    text.nfkc()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_lowercase()
}
