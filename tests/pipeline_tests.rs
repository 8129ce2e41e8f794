//! Pipeline and CLI integration tests.
//!
//! These tests exercise the full read → extract → render pipeline,
//! error handling paths, and CLI command handlers with real fixture files.

use hydroprognosis::cli::{run_parse, ParseConfig};
use hydroprognosis::config::{load_config_file, AppConfig, ConfigPreset, Validatable};
use hydroprognosis::pipeline::{
    exit_code_for, exit_codes, load_vulnerability, parse_input, parse_inputs, render_reports,
    InputSource, OutputTarget,
};
use hydroprognosis::reports::ReportFormat;
use hydroprognosis::{DuplicatePolicy, HydroError, ReportExtractor, SectionKind};
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

// ============================================================================
// Parse Stage Tests
// ============================================================================

mod parse_stage {
    use super::*;

    #[test]
    fn parse_markdown_fixture() {
        let parsed = parse_input(
            &InputSource::File(fixture_path("chamoli_markdown.txt")),
            &ReportExtractor::default(),
            true,
        )
        .expect("parse should succeed");

        assert!(parsed.is_structured());
        assert_eq!(parsed.extraction.report.len(), 6);
        assert!(parsed.source.ends_with("chamoli_markdown.txt"));
        assert!(parsed.rag_context.is_none());
    }

    #[test]
    fn parse_analysis_envelope() {
        let parsed = parse_input(
            &InputSource::File(fixture_path("analysis_response.json")),
            &ReportExtractor::default(),
            true,
        )
        .expect("parse should succeed");

        let report = &parsed.extraction.report;
        assert_eq!(report.flood_risk(), Some("Severe"));
        assert_eq!(
            report.cloudburst_probability(),
            Some((
                "Yes",
                "Extreme rainfall over the Bhagirathi catchment with orographic lift."
            ))
        );
        assert!(report.contains(SectionKind::KeyFactors));
        assert!(parsed
            .rag_context
            .as_deref()
            .is_some_and(|c| c.starts_with("CONTEXT FOR UTTARKASHI")));
    }

    #[test]
    fn error_envelope_is_reported() {
        let err = parse_input(
            &InputSource::File(fixture_path("analysis_error.json")),
            &ReportExtractor::default(),
            true,
        )
        .expect_err("error envelope should fail");

        let upstream = err
            .chain()
            .find_map(|e| e.downcast_ref::<HydroError>())
            .expect("error chain should carry a HydroError");
        assert!(matches!(upstream, HydroError::Upstream(msg) if msg.contains("rate limit")));
    }

    #[test]
    fn parse_unstructured_fixture() {
        let parsed = parse_input(
            &InputSource::File(fixture_path("unstructured.txt")),
            &ReportExtractor::default(),
            true,
        )
        .expect("unstructured input is not an error");
        assert!(!parsed.is_structured());
        assert!(parsed.extraction.text.contains("could not generate"));
    }

    #[test]
    fn parse_nonexistent_file_fails() {
        let result = parse_input(
            &InputSource::File(fixture_path("does-not-exist.txt")),
            &ReportExtractor::default(),
            true,
        );
        assert!(result.is_err());
    }

    #[test]
    fn parse_many_preserves_order() {
        let paths = vec![
            fixture_path("rudraprayag_inline.txt"),
            fixture_path("unstructured.txt"),
            fixture_path("chamoli_markdown.txt"),
        ];
        let parsed = parse_inputs(&paths, &ReportExtractor::default(), true).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].extraction.report.flood_risk(), Some("Moderate"));
        assert!(!parsed[1].is_structured());
        assert_eq!(parsed[2].extraction.report.flood_risk(), Some("High"));

        assert_eq!(exit_code_for(&parsed, false), exit_codes::SUCCESS);
        assert_eq!(exit_code_for(&parsed, true), exit_codes::UNSTRUCTURED);
    }

    #[test]
    fn load_vulnerability_fixture() {
        let summary = load_vulnerability(&fixture_path("fvi_chamoli.json")).unwrap();
        assert_eq!(summary.risk_level, "High");
        assert_eq!(summary.key_factors.len(), 3);
        assert_eq!(
            summary.display_place().as_deref(),
            Some("Location at 30.5562, 79.5643")
        );
    }

    #[test]
    fn load_vulnerability_rejects_report_text() {
        assert!(load_vulnerability(&fixture_path("chamoli_markdown.txt")).is_err());
    }
}

// ============================================================================
// Report Stage Tests
// ============================================================================

mod report_stage {
    use super::*;

    fn parsed(name: &str) -> hydroprognosis::pipeline::ParsedInput {
        parse_input(
            &InputSource::File(fixture_path(name)),
            &ReportExtractor::default(),
            true,
        )
        .unwrap()
    }

    #[test]
    fn markdown_with_vulnerability() {
        let config = AppConfig::builder()
            .output_format(ReportFormat::Markdown)
            .build();
        let summary = load_vulnerability(&fixture_path("fvi_chamoli.json")).unwrap();
        let out = render_reports(
            &config,
            &[parsed("chamoli_markdown.txt")],
            Some(&summary),
            &OutputTarget::File(PathBuf::from("unused.md")),
        )
        .unwrap();

        assert!(out.contains("## Vulnerability Index"));
        assert!(out.contains("- **FVI score:** 68.4 / 100"));
        assert!(out.contains("### 🏠 For Residents"));
        assert!(out.contains("- **Rainfall Intensity:** 45 mm/hr bursts recorded at Joshimath."));
    }

    #[test]
    fn summary_without_color_for_files() {
        let config = AppConfig::builder()
            .output_format(ReportFormat::Summary)
            .build();
        let out = render_reports(
            &config,
            &[parsed("rudraprayag_inline.txt")],
            None,
            &OutputTarget::File(PathBuf::from("unused.txt")),
        )
        .unwrap();
        assert!(!out.contains('\x1b'));
        assert!(out.contains("Monitoring Recommendations"));
    }

    #[test]
    fn json_unstructured_includes_raw_text() {
        let config = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .build();
        let out = render_reports(
            &config,
            &[parsed("unstructured.txt")],
            None,
            &OutputTarget::File(PathBuf::from("unused.json")),
        )
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["status"], "unstructured");
        assert!(json["raw_text"]
            .as_str()
            .is_some_and(|t| t.contains("try again")));
    }
}

// ============================================================================
// CLI Handler Tests
// ============================================================================

mod cli_handlers {
    use super::*;

    #[test]
    fn run_parse_writes_markdown_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.md");
        let app = AppConfig::builder()
            .output_format(ReportFormat::Markdown)
            .output_file(Some(output.clone()))
            .quiet(true)
            .build();

        let code = run_parse(
            ParseConfig::new(vec![fixture_path("chamoli_markdown.txt")], app)
                .with_vulnerability(Some(fixture_path("fvi_chamoli.json"))),
        )
        .unwrap();

        assert_eq!(code, exit_codes::SUCCESS);
        let written = std::fs::read_to_string(output).unwrap();
        assert!(written.starts_with("# Flood Risk Report"));
        assert!(written.contains("Location at 30.5562, 79.5643"));
    }

    #[test]
    fn run_parse_strict_preset_fails_on_unstructured() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = AppConfig::from_preset(ConfigPreset::Strict);
        app.output.file = Some(dir.path().join("out.json"));

        let code = run_parse(ParseConfig::new(
            vec![fixture_path("unstructured.txt")],
            app,
        ))
        .unwrap();
        assert_eq!(code, exit_codes::UNSTRUCTURED);
    }

    #[test]
    fn run_parse_missing_fvi_is_error() {
        let app = AppConfig::builder().quiet(true).build();
        let result = run_parse(
            ParseConfig::new(vec![fixture_path("chamoli_markdown.txt")], app)
                .with_vulnerability(Some(fixture_path("missing-fvi.json"))),
        );
        assert!(result.is_err());
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

mod config_files {
    use super::*;

    #[test]
    fn yaml_config_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".hydroprognosis.yaml");
        std::fs::write(
            &path,
            "output:\n  format: markdown\nextraction:\n  duplicates: append\npatterns:\n  aliases:\n    flood_risk:\n      - Flood Hazard\n",
        )
        .unwrap();

        let mut config = load_config_file(&path).unwrap();
        assert!(config.is_valid());
        assert_eq!(config.output.format, ReportFormat::Markdown);
        assert_eq!(config.extraction.duplicates, DuplicatePolicy::Append);

        let cli = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .fail_on_unstructured(true)
            .build();
        config.merge(&cli);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.extraction.duplicates, DuplicatePolicy::Append);
        assert!(config.behavior.fail_on_unstructured);

        let (explicit, loaded_from) = AppConfig::from_file_with_overrides(Some(&path), &cli);
        assert_eq!(loaded_from.as_deref(), Some(path.as_path()));
        assert_eq!(explicit, config);

        let report = config
            .extractor()
            .unwrap()
            .extract(&hydroprognosis::RawReport::from("Flood Hazard: Severe"))
            .unwrap()
            .unwrap();
        assert_eq!(report.flood_risk(), Some("Severe"));
    }
}
