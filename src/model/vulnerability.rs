//! Flood vulnerability index summary and the upstream analysis envelope.
//!
//! Both are produced by external services; the extractor never derives
//! anything from them, they are only carried alongside a parsed report
//! for display.

use serde::{Deserialize, Serialize};

/// Geographic point the summary was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Externally computed flood vulnerability index (FVI) for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilitySummary {
    /// Score on a 0-100 scale
    pub fvi_score: f64,
    /// Risk label, e.g. "Moderate"
    pub risk_level: String,
    /// Contributing factors, most significant first
    #[serde(default)]
    pub key_factors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_name: Option<String>,
}

impl VulnerabilitySummary {
    /// Score clamped into the 0-100 display range.
    #[must_use]
    pub fn clamped_score(&self) -> f64 {
        if self.fvi_score.is_nan() {
            0.0
        } else {
            self.fvi_score.clamp(0.0, 100.0)
        }
    }

    /// Place name, or formatted coordinates when no name is known.
    #[must_use]
    pub fn display_place(&self) -> Option<String> {
        self.place_name.clone().or_else(|| {
            self.location
                .map(|l| format!("Location at {:.4}, {:.4}", l.latitude, l.longitude))
        })
    }
}

/// Response envelope of the upstream `/analysis` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Free-text risk report
    #[serde(default)]
    pub analysis: Option<String>,
    /// Excerpt of the retrieval context the report was generated from
    #[serde(default)]
    pub rag_context: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AnalysisResponse {
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("error"))
            || (self.analysis.is_none() && self.error.is_some())
    }

    /// Recognize an envelope inside arbitrary JSON.
    ///
    /// Only objects carrying an `analysis` string, or an `error` string with
    /// an error status, qualify.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let obj = value.as_object()?;
        let has_analysis = obj.get("analysis").is_some_and(serde_json::Value::is_string);
        let has_error = obj.get("error").is_some_and(serde_json::Value::is_string);
        if !has_analysis && !has_error {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_fvi_payload_ignores_extra_fields() {
        let json = r#"{
            "location": {"latitude": 29.9457, "longitude": 78.1642},
            "fvi_score": 62.5,
            "risk_level": "Moderate",
            "inputs": {"terrain": {"elevation": 1800, "slope": 25}},
            "key_factors": ["High slope", "Moderate rainfall"]
        }"#;
        let summary: VulnerabilitySummary = serde_json::from_str(json).unwrap();
        assert!((summary.fvi_score - 62.5).abs() < f64::EPSILON);
        assert_eq!(summary.risk_level, "Moderate");
        assert_eq!(summary.key_factors.len(), 2);
        assert_eq!(
            summary.display_place().as_deref(),
            Some("Location at 29.9457, 78.1642")
        );
    }

    #[test]
    fn test_clamped_score() {
        let summary = VulnerabilitySummary {
            fvi_score: 140.0,
            risk_level: "High".into(),
            key_factors: vec![],
            location: None,
            place_name: Some("Chamoli".into()),
        };
        assert!((summary.clamped_score() - 100.0).abs() < f64::EPSILON);
        assert_eq!(summary.display_place().as_deref(), Some("Chamoli"));
    }

    #[test]
    fn test_envelope_detection() {
        let ok = serde_json::json!({"analysis": "### 1. Flood Risk Level\nHigh", "status": "success"});
        let env = AnalysisResponse::from_value(&ok).unwrap();
        assert!(!env.is_error());

        let err = serde_json::json!({"error": "Missing place_name or fvi_data", "status": "error"});
        assert!(AnalysisResponse::from_value(&err).unwrap().is_error());

        let other = serde_json::json!({"flood": "high"});
        assert!(AnalysisResponse::from_value(&other).is_none());
    }
}
