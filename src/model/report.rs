//! Canonical section values and the parsed report map.

use super::{ContentItem, SectionKind, SubsectionCategory};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Entry in a grouped section (key factors, recommendations).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Group {
    /// A subsection marker echoed as a header
    Header {
        category: SubsectionCategory,
        display_text: String,
    },
    /// A run of bullet/plain items under one category
    Items {
        category: SubsectionCategory,
        items: Vec<ContentItem>,
    },
}

impl Group {
    #[must_use]
    pub const fn category(&self) -> SubsectionCategory {
        match self {
            Self::Header { category, .. } | Self::Items { category, .. } => *category,
        }
    }

    #[must_use]
    pub const fn is_header(&self) -> bool {
        matches!(self, Self::Header { .. })
    }
}

/// Canonical, kind-dependent value of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionValue {
    Scalar(String),
    ValueWithReasoning { value: String, reasoning: String },
    Grouped(Vec<Group>),
}

impl SectionValue {
    /// True when the value carries no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scalar(s) => s.is_empty(),
            Self::ValueWithReasoning { value, reasoning } => {
                value.is_empty() && reasoning.is_empty()
            }
            Self::Grouped(groups) => groups.is_empty(),
        }
    }

    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_groups(&self) -> Option<&[Group]> {
        match self {
            Self::Grouped(groups) => Some(groups),
            _ => None,
        }
    }

    /// The headline string: the scalar itself, or the cloudburst value.
    #[must_use]
    pub fn headline(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::ValueWithReasoning { value, .. } => Some(value),
            Self::Grouped(_) => None,
        }
    }
}

/// Structured risk report: sections in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedReport {
    sections: IndexMap<SectionKind, SectionValue>,
}

impl ParsedReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a section value.
    ///
    /// Replacing keeps the section's original position.
    pub(crate) fn insert(&mut self, kind: SectionKind, value: SectionValue) {
        self.sections.insert(kind, value);
    }

    #[must_use]
    pub fn get(&self, kind: SectionKind) -> Option<&SectionValue> {
        self.sections.get(&kind)
    }

    #[must_use]
    pub fn contains(&self, kind: SectionKind) -> bool {
        self.sections.contains_key(&kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Kinds present, in order of first appearance.
    pub fn kinds(&self) -> impl Iterator<Item = SectionKind> + '_ {
        self.sections.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionKind, &SectionValue)> {
        self.sections.iter().map(|(k, v)| (*k, v))
    }

    #[must_use]
    pub fn scalar(&self, kind: SectionKind) -> Option<&str> {
        self.get(kind).and_then(SectionValue::as_scalar)
    }

    #[must_use]
    pub fn groups(&self, kind: SectionKind) -> Option<&[Group]> {
        self.get(kind).and_then(SectionValue::as_groups)
    }

    #[must_use]
    pub fn flood_risk(&self) -> Option<&str> {
        self.scalar(SectionKind::FloodRisk)
    }

    /// Cloudburst `(value, reasoning)` pair.
    #[must_use]
    pub fn cloudburst_probability(&self) -> Option<(&str, &str)> {
        match self.get(SectionKind::CloudburstProbability)? {
            SectionValue::ValueWithReasoning { value, reasoning } => Some((value, reasoning)),
            _ => None,
        }
    }
}
