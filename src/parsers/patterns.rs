//! Section header pattern table.
//!
//! Every [`SectionKind`] owns one case-insensitive regular expression built
//! from a list of header aliases. The surrounding template tolerates the
//! heading styles upstream reports drift between:
//!
//! - leading `#`/`>` markers, emoji, and list numbering (`1.`, `2)`)
//! - bold wrapping with `**` or `__`, inside or outside the numbering
//! - a trailing parenthetical (`Future Prediction Report (24–72 hrs)`)
//! - a trailing `:` or dash separator, optionally followed by inline content
//!
//! On a bare line, text after the header name only counts when a separator
//! precedes it, so `Flood Risk Level: Moderate` opens a section while
//! `Flood risk is rising` stays narrative. A line with heading markup
//! (`#`/`>`, numbering or bold wrapping) is a header regardless, and words
//! after the name without a separator are part of the title:
//! `### 3. Key Factors Influencing Flood Risk`.

use super::error::ExtractError;
use super::text::{phrase_to_pattern, strip_emphasis};
use crate::model::SectionKind;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

const HEADER_PREFIX: &str = r"(?i)^\s*(?P<mark>[>#]+\s*)?(?:(?:[^\w\s*_\-•]|[\x{FE0F}\x{200D}])+\s*)?(?P<bold>\*\*|__)?\s*(?P<num>\d{1,2}[.)]\s*)?(?P<inner_bold>\*\*|__)?\s*";

const HEADER_SUFFIX: &str =
    r"(?:\s*\([^)]*\))?\s*(?:\*\*|__)?\s*(?P<sep>[:\-–—])?\s*(?:\*\*|__)?\s*(?P<rest>.*)$";

static BUILTIN: LazyLock<PatternTable> = LazyLock::new(|| {
    PatternTable::with_aliases(&BTreeMap::new()).expect("built-in header patterns compile")
});

/// Built-in regex fragments naming each section.
fn builtin_aliases(kind: SectionKind) -> &'static [&'static str] {
    match kind {
        SectionKind::FloodRisk => &[r"flood\s+risk(?:\s+(?:level|assessment|category))?"],
        SectionKind::CloudburstProbability => &[
            r"cloud\s*burst\s+probability",
            r"probability\s+of\s+(?:an?\s+)?cloud\s*burst",
        ],
        SectionKind::KeyFactors => &[r"key\s+(?:risk\s+|contributing\s+)?factors"],
        SectionKind::HistoricalContext => {
            &[r"historical(?:\s*(?:&|and|/)\s*geographic(?:al)?)?\s+context"]
        }
        SectionKind::Recommendations => &[r"(?:safety\s+)?recommendations"],
        SectionKind::FuturePrediction => &[
            r"future\s+(?:risk\s+)?predictions?(?:\s+report)?",
            r"future\s+outlook",
        ],
        SectionKind::MonitoringRecommendations => &[r"monitoring\s+recommendations"],
    }
}

/// A header line recognized as the start of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    pub kind: SectionKind,
    /// Inline content after the header separator, emphasis stripped
    pub trailing: Option<String>,
}

#[derive(Debug, Clone)]
struct SectionPattern {
    kind: SectionKind,
    regex: Regex,
}

/// Ordered `SectionKind -> Regex` table.
#[derive(Debug, Clone)]
pub struct PatternTable {
    patterns: Vec<SectionPattern>,
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl PatternTable {
    /// Shared table with only the built-in aliases.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Build a table extending the built-in aliases with plain header phrases.
    ///
    /// Phrases are matched literally (case-insensitive, any whitespace run
    /// between words).
    pub fn with_aliases(extra: &BTreeMap<SectionKind, Vec<String>>) -> Result<Self, ExtractError> {
        let mut patterns = Vec::with_capacity(SectionKind::ALL.len());
        for kind in SectionKind::ALL {
            let mut alternatives: Vec<String> = builtin_aliases(kind)
                .iter()
                .map(|s| format!(r"{s}\b"))
                .collect();
            if let Some(phrases) = extra.get(&kind) {
                for phrase in phrases {
                    if phrase.trim().is_empty() {
                        return Err(ExtractError::InvalidPattern {
                            kind,
                            alias: phrase.clone(),
                            message: "alias is empty".to_string(),
                        });
                    }
                    let mut pattern = phrase_to_pattern(phrase);
                    if phrase.trim_end().ends_with(char::is_alphanumeric) {
                        pattern.push_str(r"\b");
                    }
                    alternatives.push(pattern);
                }
            }
            let source = format!("{HEADER_PREFIX}(?:{}){HEADER_SUFFIX}", alternatives.join("|"));
            let regex = Regex::new(&source).map_err(|e| ExtractError::InvalidPattern {
                kind,
                alias: alternatives.join(" | "),
                message: e.to_string(),
            })?;
            patterns.push(SectionPattern { kind, regex });
        }
        Ok(Self { patterns })
    }

    /// Match a line against the table; the first kind in priority order wins.
    #[must_use]
    pub fn match_header(&self, line: &str) -> Option<HeaderMatch> {
        self.patterns
            .iter()
            .find_map(|p| Self::try_pattern(p, line))
    }

    /// Every kind whose pattern accepts the line, in priority order.
    #[must_use]
    pub fn matching_kinds(&self, line: &str) -> Vec<SectionKind> {
        self.patterns
            .iter()
            .filter_map(|p| Self::try_pattern(p, line).map(|m| m.kind))
            .collect()
    }

    fn try_pattern(pattern: &SectionPattern, line: &str) -> Option<HeaderMatch> {
        let caps = pattern.regex.captures(line)?;
        let rest = caps.name("rest").map_or("", |m| m.as_str());
        let rest = strip_emphasis(rest);
        let has_separator = caps.name("sep").is_some();

        if !rest.is_empty() && !has_separator {
            let has_markup = ["mark", "bold", "num", "inner_bold"]
                .iter()
                .any(|group| caps.name(group).is_some());
            if !has_markup {
                return None;
            }
            return Some(HeaderMatch {
                kind: pattern.kind,
                trailing: None,
            });
        }

        Some(HeaderMatch {
            kind: pattern.kind,
            trailing: (!rest.is_empty()).then_some(rest),
        })
    }
}
