use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Distinguishes extraction sources that expose paragraph styles from those
/// that only yield a flat text stream (PDF-like input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Structured,
    Flat,
}

impl FileKind {
    pub const fn label(self) -> &'static str {
        match self {
            FileKind::Structured => "structured",
            FileKind::Flat => "flat",
        }
    }
}

/// One extracted paragraph. The style is whatever label the ingestion
/// collaborator reported (a heading level, usually), or empty when the source
/// carries no structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    #[serde(default)]
    pub style: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: style.into(),
        }
    }
}

/// Extraction output for one submitted file. The engine never parses binary
/// document formats itself; it scores whatever shape ingestion hands over,
/// including empty text and style-less paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub plain_text: String,
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
    pub file_kind: FileKind,
}

impl Document {
    /// A flat document carrying only running text.
    pub fn flat(plain_text: impl Into<String>) -> Self {
        Self {
            plain_text: plain_text.into(),
            paragraphs: Vec::new(),
            file_kind: FileKind::Flat,
        }
    }

    /// A structured document; `plain_text` is derived from the paragraphs.
    pub fn structured(paragraphs: Vec<Paragraph>) -> Self {
        let plain_text = paragraphs
            .iter()
            .map(|paragraph| paragraph.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            plain_text,
            paragraphs,
            file_kind: FileKind::Structured,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.plain_text.trim().is_empty() && self.paragraphs.is_empty()
    }
}

/// Canonical identifier for an assignment in the rubric catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssignmentId(pub String);

impl AssignmentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive a canonical id from a free-text label.
    pub fn from_label(label: &str) -> Self {
        Self(slug::slugify(label))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier wrapper for graded submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub String);

/// Student identity captured by the presentation layer before grading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentIdentity {
    pub full_name: String,
    pub email: String,
}

/// Inbound grading request assembled by the presentation collaborator.
///
/// `received_on` is supplied by the caller so that stored records carry a
/// date while the rendered report stays byte-stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingSubmission {
    pub student: StudentIdentity,
    pub assignment: AssignmentId,
    pub document: Document,
    pub received_on: NaiveDate,
}

/// High level status tracked for a stored submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Received,
    Graded,
    Notified,
}

impl SubmissionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            SubmissionStatus::Received => "received",
            SubmissionStatus::Graded => "graded",
            SubmissionStatus::Notified => "notified",
        }
    }
}
