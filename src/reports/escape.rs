//! Escaping utilities for Markdown output.
//!
//! Report text is produced by a language model and routinely contains
//! emphasis markers, stray `#` and pipes. Emphasis is already stripped by
//! extraction; what remains must be escaped before it is embedded in
//! generated Markdown so it cannot change the document structure.

/// Escape a string for safe inclusion in Markdown inline content.
///
/// # Examples
///
/// ```
/// use hydroprognosis::reports::escape::escape_markdown_inline;
///
/// assert_eq!(escape_markdown_inline("**bold**"), "\\*\\*bold\\*\\*");
/// assert_eq!(escape_markdown_inline("[link](url)"), "\\[link\\](url)");
/// ```
#[must_use]
pub fn escape_markdown_inline(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '_' => result.push_str("\\_"),
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '#' => result.push_str("\\#"),
            '|' => result.push_str("\\|"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for use in a Markdown list item.
///
/// Underscores are kept since identifiers like `river_gauge` are common in
/// monitoring recommendations.
///
/// ```
/// use hydroprognosis::reports::escape::escape_markdown_list;
///
/// assert_eq!(escape_markdown_list("check river_gauge <3>"), "check river_gauge \\<3\\>");
/// ```
#[must_use]
pub fn escape_markdown_list(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            '\n' => result.push_str("; "),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Escape a raw report for display inside a fenced block.
///
/// Backtick runs are broken up so the text cannot close the fence.
#[must_use]
pub fn escape_fenced(s: &str) -> String {
    s.replace("```", "`\u{200B}``")
}
