//! Stateless line classification.
//!
//! Checks run in a fixed order and the first hit wins:
//! section header, reasoning annotation, subsection marker, bullet, plain
//! text. Lines made only of rule punctuation (`---`, `***`) are separators
//! and carry no content.

use super::patterns::{HeaderMatch, PatternTable};
use super::text::{is_separator_line, strip_emphasis};
use crate::model::{ContentItem, SubsectionCategory};
use regex::Regex;
use std::sync::LazyLock;

/// Emphasis-wrapped "reasoning" token at the start of a (possibly bulleted) line.
static REASONING_LEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:[-•*]\s+)?(?:\*{1,2}|_{1,2})\s*reasoning\b").expect("static regex")
});

/// "reasoning" followed by a colon anywhere in the line.
static REASONING_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\breasoning\s*(?:\*{1,2}|_{1,2})?\s*:").expect("static regex")
});

/// A whole line wrapped in bold, optionally heading-marked or bulleted.
static BOLD_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:#{1,6}\s*)?(?:[-•]\s+)?(?:\*\*|__)(?P<inner>[^*_].*?)(?:\*\*|__)\s*(?P<colon>:)?\s*$",
    )
    .expect("static regex")
});

/// A markdown heading line.
static HEADING_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#{1,6}\s+(?P<inner>.+?)\s*$").expect("static regex"));

/// Un-emphasized audience marker such as `For Residents:`.
static AUDIENCE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?P<inner>(?:for\s+)?(?:the\s+)?(?:local\s+)?(?:residents|authorities|monitoring)\b[^:]{0,40}):\s*$",
    )
    .expect("static regex")
});

/// Unordered (`-`, `*`, `•`) or ordered (`1.`, `2)`) list entry.
static BULLET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[-*]\s+|•\s*|\d{1,3}[.)]\s+)(?P<body>.*?)\s*$").expect("static regex")
});

/// Leading emphasized run inside a bullet body.
static BOLD_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:\*\*(?P<a>[^*]+?)\*\*|__(?P<b>[^_]+?)__|\*(?P<c>[^*\s][^*]*?)\*)(?P<rest>.*)$",
    )
    .expect("static regex")
});

/// Result of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Opens a section, with optional inline content
    SectionStart(HeaderMatch),
    /// A content item for the open section
    Content(ContentItem),
    /// Horizontal rules and similar punctuation-only lines
    Separator,
}

impl Classification {
    #[must_use]
    pub const fn is_section_start(&self) -> bool {
        matches!(self, Self::SectionStart(_))
    }

    /// Short label used in traces and the `classify` command.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SectionStart(_) => "section",
            Self::Content(ContentItem::PlainText { .. }) => "text",
            Self::Content(ContentItem::Bullet { .. }) => "bullet",
            Self::Content(ContentItem::SubsectionMarker { .. }) => "marker",
            Self::Content(ContentItem::Reasoning { .. }) => "reasoning",
            Self::Separator => "separator",
        }
    }
}

/// Classifies single lines against a [`PatternTable`].
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier<'a> {
    patterns: &'a PatternTable,
}

impl Default for LineClassifier<'static> {
    fn default() -> Self {
        Self::new(PatternTable::builtin())
    }
}

impl<'a> LineClassifier<'a> {
    #[must_use]
    pub const fn new(patterns: &'a PatternTable) -> Self {
        Self { patterns }
    }

    /// Classify a single non-empty line.
    #[must_use]
    pub fn classify(&self, line: &str) -> Classification {
        if let Some(header) = self.patterns.match_header(line) {
            return Classification::SectionStart(header);
        }
        if is_separator_line(line) {
            return Classification::Separator;
        }
        if let Some(item) = classify_reasoning(line) {
            return Classification::Content(item);
        }
        if let Some(item) = classify_marker(line) {
            return Classification::Content(item);
        }
        if let Some(item) = classify_bullet(line) {
            return Classification::Content(item);
        }
        let text = HEADING_LINE
            .captures(line)
            .and_then(|c| c.name("inner"))
            .map_or(line, |m| m.as_str());
        Classification::Content(ContentItem::plain(text.trim()))
    }
}

fn classify_reasoning(line: &str) -> Option<ContentItem> {
    if !REASONING_LEAD.is_match(line) && !REASONING_LABEL.is_match(line) {
        return None;
    }
    let body = BULLET
        .captures(line)
        .and_then(|c| c.name("body"))
        .map_or(line, |m| m.as_str());
    Some(ContentItem::Reasoning {
        text: strip_emphasis(body),
    })
}

fn classify_marker(line: &str) -> Option<ContentItem> {
    if let Some(caps) = BOLD_LINE.captures(line) {
        let inner = caps.name("inner").map_or("", |m| m.as_str());
        let colon_terminated = caps.name("colon").is_some() || inner.trim_end().ends_with(':');
        let display = marker_display(inner);
        if display.is_empty() {
            return None;
        }
        return match SubsectionCategory::from_keywords(&display) {
            Some(category) => Some(ContentItem::marker(category, display)),
            None if colon_terminated => {
                Some(ContentItem::marker(SubsectionCategory::General, display))
            }
            None => None,
        };
    }

    let inner = HEADING_LINE
        .captures(line)
        .or_else(|| AUDIENCE_LINE.captures(line))
        .and_then(|c| c.name("inner"))?
        .as_str();
    let display = marker_display(inner);
    SubsectionCategory::from_keywords(&display).map(|category| ContentItem::marker(category, display))
}

fn marker_display(inner: &str) -> String {
    strip_emphasis(inner)
        .trim_end_matches(':')
        .trim()
        .to_string()
}

fn classify_bullet(line: &str) -> Option<ContentItem> {
    let body = BULLET.captures(line)?.name("body")?.as_str();
    let Some(caps) = BOLD_LABEL.captures(body) else {
        return Some(ContentItem::bullet(body));
    };

    let label = caps
        .name("a")
        .or_else(|| caps.name("b"))
        .or_else(|| caps.name("c"))
        .map_or("", |m| m.as_str())
        .trim()
        .trim_end_matches(':')
        .trim();
    let rest = caps
        .name("rest")
        .map_or("", |m| m.as_str())
        .trim_start_matches(|c: char| c == ':' || c == '-' || c == '–' || c == '—' || c.is_whitespace())
        .trim_end();

    if label.is_empty() {
        return Some(ContentItem::bullet(body));
    }
    if rest.is_empty() {
        return Some(ContentItem::bullet(label));
    }
    Some(ContentItem::labeled_bullet(label, rest))
}
