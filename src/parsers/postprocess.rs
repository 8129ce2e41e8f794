//! Per-kind folding of buffered content items into a [`SectionValue`].
//!
//! The rule applied is chosen by [`SectionKind::shape`] alone. A result
//! that carries no content is reported as `None` so the caller can omit
//! the section.

use super::text::{mentions_reasoning, strip_emphasis, strip_reasoning_label};
use crate::model::{ContentItem, Group, SectionKind, SectionValue, SubsectionCategory, ValueShape};

/// Fold the items buffered for `kind` into its canonical value.
#[must_use]
pub fn process(kind: SectionKind, items: &[ContentItem]) -> Option<SectionValue> {
    let value = match kind.shape() {
        ValueShape::Scalar => join_scalar(items),
        ValueShape::ValueWithReasoning => split_value_reasoning(items),
        ValueShape::Grouped => group_by_marker(items),
    };
    (!value.is_empty()).then_some(value)
}

fn join_scalar(items: &[ContentItem]) -> SectionValue {
    let joined = items
        .iter()
        .map(|item| strip_emphasis(item.text()))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    SectionValue::Scalar(joined)
}

fn split_value_reasoning(items: &[ContentItem]) -> SectionValue {
    let mut value: Option<String> = None;
    let mut reasoning: Vec<String> = Vec::new();
    let mut in_reasoning = false;

    for item in items {
        let text = strip_emphasis(item.text());
        if item.is_reasoning() || mentions_reasoning(&text) {
            in_reasoning = true;
        }
        if in_reasoning {
            let contribution = strip_reasoning_label(&text);
            if !contribution.is_empty() {
                reasoning.push(contribution);
            }
        } else if value.is_none() && !text.is_empty() {
            value = Some(text);
        }
    }

    SectionValue::ValueWithReasoning {
        value: value.unwrap_or_default(),
        reasoning: reasoning.join(" "),
    }
}

fn group_by_marker(items: &[ContentItem]) -> SectionValue {
    let mut groups = Vec::new();
    let mut category = SubsectionCategory::General;
    let mut current: Vec<ContentItem> = Vec::new();

    for item in items {
        match item {
            ContentItem::SubsectionMarker {
                category: next,
                display_text,
            } => {
                if !current.is_empty() {
                    groups.push(Group::Items {
                        category,
                        items: std::mem::take(&mut current),
                    });
                }
                groups.push(Group::Header {
                    category: *next,
                    display_text: display_text.clone(),
                });
                category = *next;
            }
            other => {
                if let Some(item) = clean_item(other) {
                    current.push(item);
                }
            }
        }
    }
    if !current.is_empty() {
        groups.push(Group::Items {
            category,
            items: current,
        });
    }

    SectionValue::Grouped(groups)
}

/// Strip emphasis from a grouped item's text; items left empty are dropped.
fn clean_item(item: &ContentItem) -> Option<ContentItem> {
    let cleaned = match item {
        ContentItem::Bullet { text, bold_label } => ContentItem::Bullet {
            text: strip_emphasis(text),
            bold_label: bold_label.clone(),
        },
        other => ContentItem::plain(strip_emphasis(other.text())),
    };
    (!cleaned.text().is_empty()).then_some(cleaned)
}
