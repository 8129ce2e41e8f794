//! Attachable extraction trace hooks.

use super::classifier::Classification;
use crate::model::SectionKind;

/// Receives events while a report is being scanned.
///
/// All hooks default to no-ops, so implementors only override what they need.
pub trait ParseObserver {
    /// Called for every non-empty line after classification.
    fn on_line(&mut self, _line_no: usize, _line: &str, _classification: &Classification) {}

    /// Called when a header opens a section.
    fn on_section_opened(&mut self, _kind: SectionKind) {}

    /// Called after a section's buffer was post-processed into a value.
    fn on_section_committed(&mut self, _kind: SectionKind, _item_count: usize) {}

    /// Called for content lines that arrive while no section is open.
    fn on_line_dropped(&mut self, _line_no: usize, _line: &str) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ParseObserver for NoopObserver {}

/// Observer that forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ParseObserver for TracingObserver {
    fn on_line(&mut self, line_no: usize, line: &str, classification: &Classification) {
        tracing::trace!(line_no, kind = classification.label(), "{line}");
    }

    fn on_section_opened(&mut self, kind: SectionKind) {
        tracing::debug!(section = kind.key(), "Section opened");
    }

    fn on_section_committed(&mut self, kind: SectionKind, item_count: usize) {
        tracing::debug!(section = kind.key(), item_count, "Section committed");
    }

    fn on_line_dropped(&mut self, line_no: usize, line: &str) {
        tracing::trace!(line_no, "Dropped line outside any section: {line}");
    }
}

/// Event captured by [`RecordingObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    Line {
        line_no: usize,
        text: String,
        label: &'static str,
        /// Section that was open after the line was handled
        section: Option<SectionKind>,
    },
    Opened(SectionKind),
    Committed {
        kind: SectionKind,
        item_count: usize,
    },
    Dropped {
        line_no: usize,
        text: String,
    },
}

/// Observer that keeps every event in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    events: Vec<ParseEvent>,
    current: Option<SectionKind>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[ParseEvent] {
        &self.events
    }

    #[must_use]
    pub fn into_events(self) -> Vec<ParseEvent> {
        self.events
    }

    /// Line events only.
    pub fn lines(&self) -> impl Iterator<Item = &ParseEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, ParseEvent::Line { .. }))
    }

    /// Number of lines dropped for lack of an open section.
    #[must_use]
    pub fn dropped_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ParseEvent::Dropped { .. }))
            .count()
    }
}

impl ParseObserver for RecordingObserver {
    fn on_line(&mut self, line_no: usize, line: &str, classification: &Classification) {
        if let Classification::SectionStart(header) = classification {
            self.current = Some(header.kind);
        }
        self.events.push(ParseEvent::Line {
            line_no,
            text: line.to_string(),
            label: classification.label(),
            section: self.current,
        });
    }

    fn on_section_opened(&mut self, kind: SectionKind) {
        self.events.push(ParseEvent::Opened(kind));
    }

    fn on_section_committed(&mut self, kind: SectionKind, item_count: usize) {
        self.events.push(ParseEvent::Committed { kind, item_count });
    }

    fn on_line_dropped(&mut self, line_no: usize, line: &str) {
        self.events.push(ParseEvent::Dropped {
            line_no,
            text: line.to_string(),
        });
    }
}

impl<T: ParseObserver + ?Sized> ParseObserver for &mut T {
    fn on_line(&mut self, line_no: usize, line: &str, classification: &Classification) {
        (**self).on_line(line_no, line, classification);
    }

    fn on_section_opened(&mut self, kind: SectionKind) {
        (**self).on_section_opened(kind);
    }

    fn on_section_committed(&mut self, kind: SectionKind, item_count: usize) {
        (**self).on_section_committed(kind, item_count);
    }

    fn on_line_dropped(&mut self, line_no: usize, line: &str) {
        (**self).on_line_dropped(line_no, line);
    }
}
