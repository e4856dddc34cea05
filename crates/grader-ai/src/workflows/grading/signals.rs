//! Signal extractors: derived booleans and counts feeding the criterion
//! scorers. All of them are deterministic and side-effect free, and all of
//! them degrade to coarser heuristics on flat documents instead of failing.
//!
//! Callers pass text already lower-cased by [`super::text::normalize`].

use std::sync::OnceLock;

use regex::Regex;

use super::domain::{Document, FileKind};

fn citation_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // (Name, YYYY) with accented Latin letters and hyphens in the name,
        // possibly several words, and a 4-digit year starting 19 or 20.
        Regex::new(r"\(\s*[\p{L}][\p{L}\-]*(?:\s+[\p{L}][\p{L}\-]*)*\s*,\s*(?:19|20)\d{2}\s*\)")
            .expect("hard-coded citation pattern compiles")
    })
}

/// Count non-overlapping author-year citations such as `(Smith, 2020)`.
/// Used as a proxy for citation density.
pub(crate) fn inline_citations(text: &str) -> usize {
    citation_pattern().find_iter(text).count()
}

const BIBLIOGRAPHY_KEYWORDS: &[&str] = &[
    "bibliografía",
    "bibliografia",
    "referencias",
    "lista de referencias",
    "bibliography",
    "references",
    "reference list",
];

/// True when the text carries one of the known bibliography section headers.
pub(crate) fn has_bibliography_section(text: &str) -> bool {
    BIBLIOGRAPHY_KEYWORDS
        .iter()
        .any(|keyword| text.contains(keyword))
}

/// Accepted style spellings per heading level, supplied by configuration so
/// ingestion collaborators using other locales can extend them.
#[derive(Debug, Clone)]
pub struct HeadingAliases {
    level_one: Vec<String>,
    level_two: Vec<String>,
    level_three: Vec<String>,
}

impl HeadingAliases {
    pub fn new(
        level_one: Vec<String>,
        level_two: Vec<String>,
        level_three: Vec<String>,
    ) -> Self {
        let lower = |aliases: Vec<String>| {
            aliases
                .into_iter()
                .map(|alias| alias.trim().to_lowercase())
                .collect()
        };
        Self {
            level_one: lower(level_one),
            level_two: lower(level_two),
            level_three: lower(level_three),
        }
    }

    /// Hierarchy level for a raw style label, if any alias matches.
    pub fn level_of(&self, style: &str) -> Option<u8> {
        let style = style.trim().to_lowercase();
        if style.is_empty() {
            return None;
        }
        if self.level_one.iter().any(|alias| *alias == style) {
            Some(1)
        } else if self.level_two.iter().any(|alias| *alias == style) {
            Some(2)
        } else if self.level_three.iter().any(|alias| *alias == style) {
            Some(3)
        } else {
            None
        }
    }
}

impl Default for HeadingAliases {
    fn default() -> Self {
        Self::new(
            vec!["heading 1".to_string(), "título 1".to_string()],
            vec!["heading 2".to_string(), "título 2".to_string()],
            vec!["heading 3".to_string(), "título 3".to_string()],
        )
    }
}

/// Per-level heading counts for the three hierarchy levels the rubrics track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct HeadingTally {
    pub(crate) level_one: usize,
    pub(crate) level_two: usize,
    pub(crate) level_three: usize,
}

impl HeadingTally {
    fn bump(&mut self, level: u8) {
        match level {
            1 => self.level_one += 1,
            2 => self.level_two += 1,
            _ => self.level_three += 1,
        }
    }

    /// How many of the three levels have at least one heading.
    pub(crate) fn levels_present(&self) -> usize {
        [self.level_one, self.level_two, self.level_three]
            .iter()
            .filter(|count| **count > 0)
            .count()
    }

    pub(crate) fn total(&self) -> usize {
        self.level_one + self.level_two + self.level_three
    }
}

fn numbered_heading_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d+(?:\.\d+)*)[.)]?\s+\S").expect("hard-coded numbering pattern compiles")
    })
}

// Coarse stand-in for style information on flat sources: numbered lines map
// depth to level, and short all-caps lines count as top-level headings.
fn flat_heading_level(line: &str) -> Option<u8> {
    let trimmed = line.trim();
    if trimmed.chars().count() < 3 || trimmed.chars().count() > 80 {
        return None;
    }
    if trimmed.ends_with('.') {
        return None;
    }

    if let Some(captures) = numbered_heading_pattern().captures(trimmed) {
        let depth = captures[1].matches('.').count() + 1;
        return Some(depth.min(3) as u8);
    }

    let letters: Vec<char> = trimmed.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() >= 4 && letters.iter().all(|c| c.is_uppercase()) {
        return Some(1);
    }

    None
}

/// Count headings per hierarchy level. Structured documents are matched on
/// their style labels; flat documents fall back to line heuristics.
pub(crate) fn heading_tally(document: &Document, aliases: &HeadingAliases) -> HeadingTally {
    let mut tally = HeadingTally::default();

    match document.file_kind {
        FileKind::Structured => {
            for paragraph in &document.paragraphs {
                if let Some(level) = aliases.level_of(&paragraph.style) {
                    tally.bump(level);
                }
            }
        }
        FileKind::Flat => {
            for line in document.plain_text.lines() {
                if let Some(level) = flat_heading_level(line) {
                    tally.bump(level);
                }
            }
        }
    }

    tally
}

const TOC_KEYWORDS: &[&str] = &[
    "índice",
    "indice",
    "tabla de contenido",
    "tabla de contenidos",
    "table of contents",
];

const TOC_LITERALS: &[&str] = &["contents", "table of contents", "índice", "indice"];

/// True when the text names a table of contents, or (structured sources) when
/// some paragraph is literally a "Contents"/"Índice" marker.
pub(crate) fn has_table_of_contents(document: &Document, text: &str) -> bool {
    if TOC_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
        return true;
    }

    document.file_kind == FileKind::Structured
        && document.paragraphs.iter().any(|paragraph| {
            let lowered = paragraph.text.trim().to_lowercase();
            TOC_LITERALS.iter().any(|literal| lowered.contains(literal))
        })
}

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[\p{L}\p{N}]+").expect("hard-coded word pattern compiles"))
}

pub(crate) fn word_count(text: &str) -> usize {
    word_pattern().find_iter(text).count()
}

/// Tokenize and check the count against an inclusive band.
pub(crate) fn word_count_in_range(text: &str, min: usize, max: usize) -> (usize, bool) {
    let count = word_count(text);
    (count, count >= min && count <= max)
}

/// Word count of the span following a heading whose text matches `marker`,
/// up to the first later heading that opens an unrelated section. `None` when
/// no such heading exists (flat sources, or the section is simply missing).
pub(crate) fn section_word_count(
    document: &Document,
    aliases: &HeadingAliases,
    marker: &str,
    continuation_markers: &[&str],
) -> Option<usize> {
    let start = document.paragraphs.iter().position(|paragraph| {
        aliases.level_of(&paragraph.style).is_some()
            && paragraph.text.to_lowercase().contains(marker)
    })?;

    let mut words = 0;
    for paragraph in &document.paragraphs[start + 1..] {
        if aliases.level_of(&paragraph.style).is_some() {
            let lowered = paragraph.text.to_lowercase();
            let continues = continuation_markers
                .iter()
                .any(|continuation| lowered.contains(continuation));
            if !continues {
                break;
            }
        }
        words += word_count(&paragraph.text);
    }

    Some(words)
}
