//! Extraction behavior tests.
//!
//! Covers header recognition, per-kind post-processing, duplicate handling
//! and the unstructured fallback through the public API.

use hydroprognosis::model::{ContentItem, Group, SectionKind, SectionValue, SubsectionCategory};
use hydroprognosis::parsers::{
    Classification, LineClassifier, ParseEvent, RecordingObserver, SectionAccumulator,
};
use hydroprognosis::{
    extract, extract_document, AppConfig, DuplicatePolicy, ExtractOptions, PatternTable,
    RawReport, ReportExtractor,
};
use serde_json::json;

// ============================================================================
// Header recognition
// ============================================================================

mod headers {
    use super::*;

    #[test]
    fn inline_and_heading_styles_agree() {
        let inline = extract("Flood Risk Level: High").unwrap().unwrap();
        let heading = extract("### 1. **Flood Risk Level**\nHigh").unwrap().unwrap();
        assert_eq!(inline.flood_risk(), Some("High"));
        assert_eq!(heading.flood_risk(), Some("High"));
        assert_eq!(inline, heading);
    }

    #[test]
    fn case_and_trailing_colon_are_ignored() {
        for header in [
            "FLOOD RISK LEVEL",
            "flood risk level:",
            "Flood Risk Level :",
            "**Flood Risk Level:**",
            "## flood risk level",
        ] {
            let report = extract(format!("{header}\nLow")).unwrap();
            assert_eq!(
                report.as_ref().and_then(|r| r.flood_risk()),
                Some("Low"),
                "header {header:?} should open the flood risk section"
            );
        }
    }

    #[test]
    fn narrative_mention_is_not_a_header() {
        assert_eq!(extract("Flood risk is rising along the river.").unwrap(), None);
    }

    #[test]
    fn numbered_bold_variants() {
        let report = extract(
            "**2. Cloudburst Probability**\nNo\n\n3) Key Risk Factors\n- Slope\n\n🌧️ Future Prediction Report (24–72 hrs)\nStable",
        )
        .unwrap()
        .unwrap();
        assert_eq!(report.cloudburst_probability(), Some(("No", "")));
        assert!(report.contains(SectionKind::KeyFactors));
        assert_eq!(report.scalar(SectionKind::FuturePrediction), Some("Stable"));
    }

    #[test]
    fn numbered_headings_with_longer_titles() {
        let report = extract(
            "### 1. Flood Risk Level\nHigh\n### 3. Key Factors Influencing Flood Risk\n- Slope\n### 5. Recommendations for Residents and Authorities\n- Evacuate\n### 6. Future Prediction for the Next 72 Hours\nRain continues",
        )
        .unwrap()
        .unwrap();

        assert_eq!(
            report.kinds().collect::<Vec<_>>(),
            vec![
                SectionKind::FloodRisk,
                SectionKind::KeyFactors,
                SectionKind::Recommendations,
                SectionKind::FuturePrediction,
            ]
        );
        assert_eq!(report.flood_risk(), Some("High"));
        assert_eq!(
            report.groups(SectionKind::KeyFactors),
            Some(
                &[Group::Items {
                    category: SubsectionCategory::General,
                    items: vec![ContentItem::bullet("Slope")],
                }][..]
            )
        );
        assert_eq!(
            report.groups(SectionKind::Recommendations),
            Some(
                &[Group::Items {
                    category: SubsectionCategory::General,
                    items: vec![ContentItem::bullet("Evacuate")],
                }][..]
            )
        );
        assert_eq!(
            report.scalar(SectionKind::FuturePrediction),
            Some("Rain continues")
        );
    }

    #[test]
    fn bare_narrative_still_needs_a_separator() {
        let report = extract("Key Factors:\n- Slope\nRecommendations include staying indoors")
            .unwrap()
            .unwrap();
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn monitoring_recommendations_are_distinct() {
        let report = extract(
            "Recommendations:\n- Stay indoors\nMonitoring Recommendations:\n- Check gauges hourly",
        )
        .unwrap()
        .unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(
            report.scalar(SectionKind::MonitoringRecommendations),
            Some("Check gauges hourly")
        );
    }

    #[test]
    fn pattern_table_reports_every_match() {
        let table = PatternTable::builtin();
        assert_eq!(
            table.matching_kinds("Key Factors:"),
            vec![SectionKind::KeyFactors]
        );
        assert!(table.matching_kinds("Nothing to see").is_empty());
    }
}

// ============================================================================
// Section values
// ============================================================================

mod values {
    use super::*;

    #[test]
    fn cloudburst_value_and_reasoning() {
        let report = extract(
            "Cloudburst Probability: Moderate\n*Reasoning:* heavy rainfall expected",
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            report.get(SectionKind::CloudburstProbability),
            Some(&SectionValue::ValueWithReasoning {
                value: "Moderate".into(),
                reasoning: "heavy rainfall expected".into(),
            })
        );
    }

    #[test]
    fn cloudburst_reasoning_spans_lines() {
        let report = extract(
            "Cloudburst Probability\nYes\nReasoning:\n- warm moist air\n- steep terrain",
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            report.cloudburst_probability(),
            Some(("Yes", "warm moist air steep terrain"))
        );
    }

    #[test]
    fn cloudburst_with_only_reasoning_has_empty_value() {
        let report = extract("Cloudburst Probability:\nReasoning: no convective activity")
            .unwrap()
            .unwrap();
        assert_eq!(
            report.cloudburst_probability(),
            Some(("", "no convective activity"))
        );
    }

    #[test]
    fn reasoning_outside_cloudburst_is_plain_text() {
        let report = extract("Flood Risk Level: High\nReasoning: river above danger mark")
            .unwrap()
            .unwrap();
        assert_eq!(
            report.flood_risk(),
            Some("High Reasoning: river above danger mark")
        );
    }

    #[test]
    fn recommendations_grouped_by_audience() {
        let report = extract(
            "Recommendations:\n**For Residents**\n- Store emergency supplies\n**For Authorities**\n- Issue alerts",
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            report.groups(SectionKind::Recommendations),
            Some(
                &[
                    Group::Header {
                        category: SubsectionCategory::Residents,
                        display_text: "For Residents".into(),
                    },
                    Group::Items {
                        category: SubsectionCategory::Residents,
                        items: vec![ContentItem::bullet("Store emergency supplies")],
                    },
                    Group::Header {
                        category: SubsectionCategory::Authorities,
                        display_text: "For Authorities".into(),
                    },
                    Group::Items {
                        category: SubsectionCategory::Authorities,
                        items: vec![ContentItem::bullet("Issue alerts")],
                    },
                ][..]
            )
        );
    }

    #[test]
    fn key_factor_bold_label() {
        let report = extract("Key Factors:\n- **Rainfall**: 120mm expected")
            .unwrap()
            .unwrap();
        assert_eq!(
            report.groups(SectionKind::KeyFactors),
            Some(
                &[Group::Items {
                    category: SubsectionCategory::General,
                    items: vec![ContentItem::labeled_bullet("Rainfall", "120mm expected")],
                }][..]
            )
        );
    }

    #[test]
    fn items_before_first_marker_are_general() {
        let report = extract("Recommendations:\n- Stay alert\nFor Residents:\n- Move uphill")
            .unwrap()
            .unwrap();
        let groups = report.groups(SectionKind::Recommendations).unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].category(), SubsectionCategory::General);
        assert!(groups[1].is_header());
        assert_eq!(groups[2].category(), SubsectionCategory::Residents);
    }

    #[test]
    fn inner_headings_lose_their_markers() {
        let report = extract("Historical Context:\n#### General Tips\nAvoid riverbanks")
            .unwrap()
            .unwrap();
        assert_eq!(
            report.scalar(SectionKind::HistoricalContext),
            Some("General Tips Avoid riverbanks")
        );
    }

    #[test]
    fn separators_are_skipped() {
        let report = extract("Flood Risk Level:\n---\nLow\n***").unwrap().unwrap();
        assert_eq!(report.flood_risk(), Some("Low"));
    }
}

// ============================================================================
// Sections without content, duplicates, ordering
// ============================================================================

mod structure {
    use super::*;

    #[test]
    fn empty_sections_are_omitted() {
        let report = extract("Flood Risk Level:\nKey Factors:\n- Slope\nRecommendations:")
            .unwrap()
            .unwrap();
        assert_eq!(report.kinds().collect::<Vec<_>>(), vec![SectionKind::KeyFactors]);
        for (_, value) in report.iter() {
            assert!(!value.is_empty());
        }
    }

    #[test]
    fn sections_keep_first_appearance_order() {
        let report = extract("Key Factors:\n- Slope\nFlood Risk Level: Low")
            .unwrap()
            .unwrap();
        assert_eq!(
            report.kinds().collect::<Vec<_>>(),
            vec![SectionKind::KeyFactors, SectionKind::FloodRisk]
        );
    }

    #[test]
    fn duplicate_header_overwrites_by_default() {
        let text = "Flood Risk Level: Low\nKey Factors:\n- Slope\nFlood Risk Level: Severe";
        let report = extract(text).unwrap().unwrap();
        assert_eq!(report.flood_risk(), Some("Severe"));
        assert_eq!(report.kinds().next(), Some(SectionKind::FloodRisk));
    }

    #[test]
    fn duplicate_header_appends_when_configured() {
        let extractor = ReportExtractor::new(
            PatternTable::default(),
            ExtractOptions {
                duplicates: DuplicatePolicy::Append,
            },
        );
        let text = "Key Factors:\n- Slope\nFlood Risk Level: Low\nKey Factors:\n- Rainfall";
        let report = extractor
            .extract(&RawReport::from(text))
            .unwrap()
            .unwrap();
        let groups = report.groups(SectionKind::KeyFactors).unwrap();
        assert_eq!(
            groups,
            &[Group::Items {
                category: SubsectionCategory::General,
                items: vec![ContentItem::bullet("Slope"), ContentItem::bullet("Rainfall")],
            }][..]
        );
    }

    #[test]
    fn empty_later_occurrence_keeps_earlier_value() {
        let report = extract("Flood Risk Level: Low\nFlood Risk Level:").unwrap().unwrap();
        assert_eq!(report.flood_risk(), Some("Low"));
    }

    #[test]
    fn content_before_any_header_is_dropped() {
        let mut observer = RecordingObserver::new();
        let doc = ReportExtractor::default()
            .extract_with_observer(
                &RawReport::from("Intro line\nFlood Risk Level: High"),
                &mut observer,
            )
            .unwrap()
            .unwrap();
        assert_eq!(doc.report.flood_risk(), Some("High"));
        assert_eq!(observer.dropped_count(), 1);
        assert!(observer
            .events()
            .contains(&ParseEvent::Opened(SectionKind::FloodRisk)));
    }
}

// ============================================================================
// Input handling
// ============================================================================

mod inputs {
    use super::*;

    #[test]
    fn empty_and_whitespace_inputs() {
        assert_eq!(extract("").unwrap(), None);
        assert_eq!(extract("   \n\t\n").unwrap(), None);
        assert_eq!(extract_document("").unwrap(), None);
        assert_eq!(extract(serde_json::Value::Null).unwrap(), None);
    }

    #[test]
    fn carriage_return_line_breaks() {
        for text in [
            "Flood Risk Level\r\nHigh\r\nKey Factors:\r\n- Slope",
            "Flood Risk Level\rHigh\rKey Factors:\r- Slope",
        ] {
            let doc = extract_document(text).unwrap().unwrap();
            assert_eq!(doc.report.flood_risk(), Some("High"));
            assert!(doc.report.contains(SectionKind::KeyFactors));
            assert_eq!(doc.text, text);
        }
    }

    #[test]
    fn structured_string_value_is_text() {
        let report = extract(json!("Flood Risk Level: Moderate")).unwrap().unwrap();
        assert_eq!(report.flood_risk(), Some("Moderate"));
    }

    #[test]
    fn structured_object_is_serialized_before_parsing() {
        let raw = RawReport::from_serializable(&json!({"summary": "nothing useful"})).unwrap();
        assert_eq!(ReportExtractor::default().extract(&raw).unwrap(), None);
    }

    #[test]
    fn configured_alias_extends_patterns() {
        let extractor = AppConfig::builder()
            .alias(SectionKind::HistoricalContext, "Past Events")
            .build()
            .extractor()
            .unwrap();
        let report = extractor
            .extract(&RawReport::from("**Past Events:** 2013 Kedarnath floods"))
            .unwrap()
            .unwrap();
        assert_eq!(
            report.scalar(SectionKind::HistoricalContext),
            Some("2013 Kedarnath floods")
        );
    }

    #[test]
    fn accumulator_can_be_driven_directly() {
        let table = PatternTable::default();
        let mut acc = SectionAccumulator::new(
            LineClassifier::new(&table),
            DuplicatePolicy::Overwrite,
            RecordingObserver::new(),
        );
        for line in ["Flood Risk Level", "Severe"] {
            acc.push_line(line);
        }
        assert_eq!(acc.current(), Some(SectionKind::FloodRisk));
        assert_eq!(acc.finish().flood_risk(), Some("Severe"));
    }

    #[test]
    fn classifier_labels() {
        let classifier = LineClassifier::default();
        assert!(classifier.classify("Key Factors:").is_section_start());
        assert_eq!(classifier.classify("---"), Classification::Separator);
        assert_eq!(classifier.classify("- item").label(), "bullet");
        assert_eq!(classifier.classify("For Authorities:").label(), "marker");
    }
}
