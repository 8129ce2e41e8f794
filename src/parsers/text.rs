//! Small text helpers shared by the classifier and post-processor.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static REASONING_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\breasoning\b").expect("static regex"));

static REASONING_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*reasoning\s*:\s*").expect("static regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Remove markdown emphasis markers (`*`, `**`, `__`) and trim.
#[must_use]
pub fn strip_emphasis(text: &str) -> String {
    text.replace('*', "").replace("__", "").trim().to_string()
}

/// Whether the text mentions the word "reasoning" anywhere.
#[must_use]
pub fn mentions_reasoning(text: &str) -> bool {
    REASONING_WORD.is_match(text)
}

/// Drop a leading `reasoning:` label, case-insensitively.
#[must_use]
pub fn strip_reasoning_label(text: &str) -> String {
    REASONING_LABEL.replace(text, "").trim().to_string()
}

/// Lines made only of rule/heading punctuation (`---`, `***`, `===`, `#`).
#[must_use]
pub fn is_separator_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| matches!(c, '-' | '*' | '_' | '=' | '#' | '~' | '—' | '–') || c.is_whitespace())
}

/// Rewrite `\r\n` and bare `\r` line breaks as `\n`.
#[must_use]
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Collapse every whitespace run to a single space.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Turn a plain header phrase into a whitespace-tolerant regex fragment.
#[must_use]
pub fn phrase_to_pattern(phrase: &str) -> String {
    collapse_whitespace(phrase)
        .split(' ')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}
