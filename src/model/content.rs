//! Content items produced while scanning a section body.

use super::SubsectionCategory;
use serde::{Deserialize, Serialize};

/// One classified unit of text inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    /// Narrative line
    PlainText { text: String },
    /// Bulleted or numbered list entry
    Bullet {
        text: String,
        /// Leading emphasized run used as a label (`**Label**: rest`)
        #[serde(skip_serializing_if = "Option::is_none")]
        bold_label: Option<String>,
    },
    /// Subsection header such as "For Residents"
    SubsectionMarker {
        category: SubsectionCategory,
        display_text: String,
    },
    /// Rationale line, retained only under the cloudburst section
    Reasoning { text: String },
}

impl ContentItem {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }

    pub fn bullet(text: impl Into<String>) -> Self {
        Self::Bullet {
            text: text.into(),
            bold_label: None,
        }
    }

    pub fn labeled_bullet(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Bullet {
            text: text.into(),
            bold_label: Some(label.into()),
        }
    }

    pub fn marker(category: SubsectionCategory, display_text: impl Into<String>) -> Self {
        Self::SubsectionMarker {
            category,
            display_text: display_text.into(),
        }
    }

    /// The item's text; markers contribute their display text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::PlainText { text } | Self::Bullet { text, .. } | Self::Reasoning { text } => text,
            Self::SubsectionMarker { display_text, .. } => display_text,
        }
    }

    #[must_use]
    pub const fn is_reasoning(&self) -> bool {
        matches!(self, Self::Reasoning { .. })
    }

    /// Convert a reasoning item into plain text, leaving other items untouched.
    #[must_use]
    pub fn degrade_reasoning(self) -> Self {
        match self {
            Self::Reasoning { text } => Self::PlainText { text },
            other => other,
        }
    }
}
