//! Keyword-derived display badges.
//!
//! Badges are case-insensitive substring checks on the section value, so
//! "Lower than usual" grades as `Low` and "HIGH" as `High`.

use crate::model::SubsectionCategory;
use serde::Serialize;

fn mentions(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Display color shared by badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Red,
    Orange,
    Yellow,
    Green,
    Gray,
}

impl BadgeColor {
    /// ANSI color name understood by the summary renderer.
    #[must_use]
    pub const fn ansi(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "magenta",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Gray => "dim",
        }
    }
}

/// Risk level derived from a free-text value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBadge {
    Unknown,
    Low,
    Moderate,
    High,
    Severe,
}

impl RiskBadge {
    /// Classify by keyword, most severe first.
    #[must_use]
    pub fn from_text(value: &str) -> Self {
        let value = value.to_lowercase();
        if mentions(&value, &["severe", "extreme"]) {
            Self::Severe
        } else if mentions(&value, &["high"]) {
            Self::High
        } else if mentions(&value, &["moderate", "medium"]) {
            Self::Moderate
        } else if mentions(&value, &["low"]) {
            Self::Low
        } else {
            Self::Unknown
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Severe => "Severe",
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
            Self::Unknown => "Unknown",
        }
    }

    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Severe => "🚨",
            Self::High => "🔴",
            Self::Moderate => "🟠",
            Self::Low => "🟢",
            Self::Unknown => "⚪",
        }
    }

    #[must_use]
    pub const fn color(&self) -> BadgeColor {
        match self {
            Self::Severe => BadgeColor::Red,
            Self::High => BadgeColor::Orange,
            Self::Moderate => BadgeColor::Yellow,
            Self::Low => BadgeColor::Green,
            Self::Unknown => BadgeColor::Gray,
        }
    }
}

/// Cloudburst likelihood derived from the section value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "risk")]
pub enum CloudburstBadge {
    Likely,
    Unlikely,
    /// No yes/no answer; graded like a risk level instead
    Graded(RiskBadge),
}

impl CloudburstBadge {
    #[must_use]
    pub fn from_text(value: &str) -> Self {
        let lowered = value.to_lowercase();
        if lowered.contains("yes") {
            Self::Likely
        } else if lowered.contains("no") {
            Self::Unlikely
        } else {
            Self::Graded(RiskBadge::from_text(value))
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Likely => "Likely",
            Self::Unlikely => "Unlikely",
            Self::Graded(risk) => risk.label(),
        }
    }

    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Likely => "⛈️",
            Self::Unlikely => "☀️",
            Self::Graded(risk) => risk.icon(),
        }
    }

    #[must_use]
    pub const fn color(&self) -> BadgeColor {
        match self {
            Self::Likely => BadgeColor::Red,
            Self::Unlikely => BadgeColor::Green,
            Self::Graded(risk) => risk.color(),
        }
    }
}

/// Icon for a grouped-list subsection.
#[must_use]
pub const fn category_icon(category: SubsectionCategory) -> &'static str {
    match category {
        SubsectionCategory::Residents => "🏠",
        SubsectionCategory::Authorities => "🏛️",
        SubsectionCategory::Monitoring => "📡",
        SubsectionCategory::General => "•",
    }
}
