//! Section kinds and subsection categories recognized in risk reports.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Named block of a risk report.
///
/// Variant order is the header-matching priority: when a line matches more
/// than one section pattern, the earliest variant wins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    FloodRisk,
    CloudburstProbability,
    KeyFactors,
    HistoricalContext,
    Recommendations,
    FuturePrediction,
    MonitoringRecommendations,
}

/// Shape of the canonical value a section kind post-processes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// Single joined string
    Scalar,
    /// Headline value plus free-text rationale
    ValueWithReasoning,
    /// Ordered list of subsection headers and item groups
    Grouped,
}

impl SectionKind {
    /// All kinds in priority order.
    pub const ALL: [Self; 7] = [
        Self::FloodRisk,
        Self::CloudburstProbability,
        Self::KeyFactors,
        Self::HistoricalContext,
        Self::Recommendations,
        Self::FuturePrediction,
        Self::MonitoringRecommendations,
    ];

    /// Stable snake_case key, as used in JSON output and config files.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::FloodRisk => "flood_risk",
            Self::CloudburstProbability => "cloudburst_probability",
            Self::KeyFactors => "key_factors",
            Self::HistoricalContext => "historical_context",
            Self::Recommendations => "recommendations",
            Self::FuturePrediction => "future_prediction",
            Self::MonitoringRecommendations => "monitoring_recommendations",
        }
    }

    /// Human-readable section title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::FloodRisk => "Flood Risk Level",
            Self::CloudburstProbability => "Cloudburst Probability",
            Self::KeyFactors => "Key Risk Factors",
            Self::HistoricalContext => "Historical & Geographical Context",
            Self::Recommendations => "Recommendations",
            Self::FuturePrediction => "Future Prediction (24-72 hrs)",
            Self::MonitoringRecommendations => "Monitoring Recommendations",
        }
    }

    /// The value shape this kind always produces.
    #[must_use]
    pub const fn shape(&self) -> ValueShape {
        match self {
            Self::CloudburstProbability => ValueShape::ValueWithReasoning,
            Self::KeyFactors | Self::Recommendations => ValueShape::Grouped,
            Self::FloodRisk
            | Self::HistoricalContext
            | Self::FuturePrediction
            | Self::MonitoringRecommendations => ValueShape::Scalar,
        }
    }

    /// Look a kind up by its snake_case key (case-insensitive, `-` allowed).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().to_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|k| k.key() == normalized)
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Audience of a recommendation or factor subsection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SubsectionCategory {
    Residents,
    Authorities,
    Monitoring,
    #[default]
    General,
}

impl SubsectionCategory {
    /// Infer a category from keywords in marker text.
    ///
    /// Keywords are checked in the order residents, authorities, monitoring.
    #[must_use]
    pub fn from_keywords(text: &str) -> Option<Self> {
        let lower = text.to_lowercase();
        if lower.contains("resident") {
            Some(Self::Residents)
        } else if lower.contains("authorit") {
            Some(Self::Authorities)
        } else if lower.contains("monitoring") {
            Some(Self::Monitoring)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Residents => "residents",
            Self::Authorities => "authorities",
            Self::Monitoring => "monitoring",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for SubsectionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
