//! Single-pass section accumulation.
//!
//! The accumulator owns the open section and its pending buffer. Every
//! header line flushes the buffer through the post-processor before the new
//! section opens; [`SectionAccumulator::finish`] performs the final flush.

use super::classifier::{Classification, LineClassifier};
use super::extract::DuplicatePolicy;
use super::observer::ParseObserver;
use super::postprocess;
use crate::model::{ContentItem, ParsedReport, SectionKind};
use std::collections::HashMap;

/// Stateful line consumer producing a [`ParsedReport`].
pub struct SectionAccumulator<'a, O: ParseObserver> {
    classifier: LineClassifier<'a>,
    policy: DuplicatePolicy,
    observer: O,
    current: Option<SectionKind>,
    buffer: Vec<ContentItem>,
    /// Items already committed per kind, kept for [`DuplicatePolicy::Append`]
    committed: HashMap<SectionKind, Vec<ContentItem>>,
    report: ParsedReport,
    line_no: usize,
}

impl<'a, O: ParseObserver> SectionAccumulator<'a, O> {
    pub fn new(classifier: LineClassifier<'a>, policy: DuplicatePolicy, observer: O) -> Self {
        Self {
            classifier,
            policy,
            observer,
            current: None,
            buffer: Vec::new(),
            committed: HashMap::new(),
            report: ParsedReport::new(),
            line_no: 0,
        }
    }

    /// Section currently open, if any.
    #[must_use]
    pub const fn current(&self) -> Option<SectionKind> {
        self.current
    }

    /// Feed one raw line.
    pub fn push_line(&mut self, line: &str) {
        self.line_no += 1;
        if line.trim().is_empty() {
            return;
        }

        let classification = self.classifier.classify(line);
        self.observer.on_line(self.line_no, line, &classification);

        match classification {
            Classification::SectionStart(header) => {
                self.commit();
                self.current = Some(header.kind);
                self.observer.on_section_opened(header.kind);
                if let Some(trailing) = header.trailing {
                    self.buffer.push(ContentItem::plain(trailing));
                }
            }
            Classification::Separator => {}
            Classification::Content(item) => {
                let Some(kind) = self.current else {
                    self.observer.on_line_dropped(self.line_no, line);
                    return;
                };
                if item.text().trim().is_empty() {
                    return;
                }
                let item = if kind == SectionKind::CloudburstProbability {
                    item
                } else {
                    item.degrade_reasoning()
                };
                self.buffer.push(item);
            }
        }
    }

    /// Flush the open section and return the finished report.
    #[must_use]
    pub fn finish(mut self) -> ParsedReport {
        self.commit();
        self.report
    }

    fn commit(&mut self) {
        let Some(kind) = self.current else {
            return;
        };
        if self.buffer.is_empty() {
            return;
        }
        let buffer = std::mem::take(&mut self.buffer);

        let items = match self.policy {
            DuplicatePolicy::Overwrite => buffer,
            DuplicatePolicy::Append => {
                let stored = self.committed.entry(kind).or_default();
                stored.extend(buffer);
                stored.clone()
            }
        };

        if let Some(value) = postprocess::process(kind, &items) {
            tracing::debug!(section = kind.key(), items = items.len(), "Committed section");
            self.report.insert(kind, value);
            self.observer.on_section_committed(kind, items.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SectionValue, SubsectionCategory};
    use crate::parsers::observer::{NoopObserver, ParseEvent, RecordingObserver};

    fn run(text: &str, policy: DuplicatePolicy) -> ParsedReport {
        let mut acc = SectionAccumulator::new(LineClassifier::default(), policy, NoopObserver);
        for line in text.lines() {
            acc.push_line(line);
        }
        acc.finish()
    }

    #[test]
    fn test_header_trailing_text_is_first_item() {
        let report = run("Flood Risk Level: High\nRivers are swollen.", DuplicatePolicy::Overwrite);
        assert_eq!(report.flood_risk(), Some("High Rivers are swollen."));
    }

    #[test]
    fn test_lines_before_first_header_are_dropped() {
        let mut observer = RecordingObserver::new();
        let mut acc =
            SectionAccumulator::new(LineClassifier::default(), DuplicatePolicy::Overwrite, &mut observer);
        for line in ["Here is your report.", "", "Flood Risk Level:", "Low"] {
            acc.push_line(line);
        }
        let report = acc.finish();
        assert_eq!(report.flood_risk(), Some("Low"));
        assert_eq!(observer.dropped_count(), 1);
        assert!(observer
            .events()
            .contains(&ParseEvent::Committed {
                kind: SectionKind::FloodRisk,
                item_count: 1
            }));
    }

    #[test]
    fn test_reasoning_degrades_outside_cloudburst() {
        let report = run(
            "Key Factors:\n*Reasoning:* saturated soil",
            DuplicatePolicy::Overwrite,
        );
        assert_eq!(
            report.groups(SectionKind::KeyFactors).unwrap()[0],
            crate::model::Group::Items {
                category: SubsectionCategory::General,
                items: vec![ContentItem::plain("Reasoning: saturated soil")],
            }
        );
    }

    #[test]
    fn test_empty_section_is_omitted() {
        let report = run(
            "Flood Risk Level:\n---\nCloudburst Probability: No",
            DuplicatePolicy::Overwrite,
        );
        assert!(!report.contains(SectionKind::FloodRisk));
        assert_eq!(report.cloudburst_probability(), Some(("No", "")));
    }

    #[test]
    fn test_duplicate_overwrite_keeps_position() {
        let report = run(
            "Flood Risk Level: Low\nHistorical Context: dry valley\nFlood Risk Level: High",
            DuplicatePolicy::Overwrite,
        );
        let kinds: Vec<_> = report.kinds().collect();
        assert_eq!(kinds, vec![SectionKind::FloodRisk, SectionKind::HistoricalContext]);
        assert_eq!(report.flood_risk(), Some("High"));
    }

    #[test]
    fn test_duplicate_append_reprocesses_combined_items() {
        let report = run(
            "Flood Risk Level: Low\nHistorical Context: dry valley\nFlood Risk Level: rising",
            DuplicatePolicy::Append,
        );
        assert_eq!(report.flood_risk(), Some("Low rising"));
        assert_eq!(
            report.get(SectionKind::HistoricalContext),
            Some(&SectionValue::Scalar("dry valley".into()))
        );
    }
}
