//! In-memory model behind the comparison form.
//!
//! The view is a projection of [`FormController`]: the slot list decides
//! how many file inputs are rendered and [`ResultsView`] decides what the
//! results container shows. Nothing here touches the DOM.
//!
//! # Request ordering
//!
//! Submissions may overlap. Each one takes a [`RequestTicket`] from a
//! monotonic counter and only the response carrying the latest ticket is
//! applied; older responses are dropped.

use crate::{AppResult, FileSlot, ProcessResponse, ReportEntry, MIN_SLOTS};

// =============================================================================
// Slots
// =============================================================================

/// Ordered list of file input slots, never shorter than [`MIN_SLOTS`].
#[derive(Clone, Debug, PartialEq)]
pub struct SlotList {
    slots: Vec<FileSlot>,
}

impl SlotList {
    pub fn new() -> Self {
        Self {
            slots: (1..=MIN_SLOTS).map(FileSlot::new).collect(),
        }
    }

    /// Append a slot after the last one, numbered from the new total.
    pub fn add(&mut self) -> FileSlot {
        let slot = FileSlot::new(self.slots.len() + 1);
        self.slots.push(slot);
        slot
    }

    /// Remove the last slot. Returns `false` when at the floor.
    pub fn remove(&mut self) -> bool {
        if self.slots.len() <= MIN_SLOTS {
            return false;
        }
        self.slots.pop();
        true
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn as_slice(&self) -> &[FileSlot] {
        &self.slots
    }
}

impl Default for SlotList {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Request sequencing
// =============================================================================

/// Sequence number of one submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Monotonic ticket dispenser.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn next(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

// =============================================================================
// Results
// =============================================================================

/// What the results container currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResultsView {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A submission is in flight
    Pending,
    /// The core compared the files but returned no pairs
    Empty,
    /// One row per compared pair
    Report(Vec<ReportEntry>),
    /// The request or its decoding failed
    Failed(String),
}

impl ResultsView {
    /// Map a finished request to the view it produces.
    pub fn from_result(result: AppResult<ProcessResponse>) -> Self {
        match result {
            Ok(response) if response.report.is_empty() => ResultsView::Empty,
            Ok(response) => ResultsView::Report(response.report),
            Err(e) => ResultsView::Failed(e.to_string()),
        }
    }

    /// Report rows to render; empty for every non-report state.
    pub fn rows(&self) -> &[ReportEntry] {
        match self {
            ResultsView::Report(rows) => rows,
            _ => &[],
        }
    }

    /// Whether the "Report results" title is shown.
    pub fn has_title(&self) -> bool {
        matches!(self, ResultsView::Empty | ResultsView::Report(_))
    }

    /// Single line shown in place of rows.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ResultsView::Pending => Some("Processing..."),
            ResultsView::Empty => Some("No results"),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ResultsView::Failed(message) => Some(message),
            _ => None,
        }
    }
}

// =============================================================================
// Controller
// =============================================================================

/// State owned by the comparison form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormController {
    slots: SlotList,
    requests: RequestSequence,
    results: ResultsView,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[FileSlot] {
        self.slots.as_slice()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn results(&self) -> &ResultsView {
        &self.results
    }

    pub fn add_slot(&mut self) -> FileSlot {
        self.slots.add()
    }

    pub fn remove_slot(&mut self) -> bool {
        self.slots.remove()
    }

    /// Start a submission: clear previous results and hand out a ticket.
    pub fn begin_submit(&mut self) -> RequestTicket {
        self.results = ResultsView::Pending;
        self.requests.next()
    }

    /// Apply a finished submission. Returns `false` if it was superseded.
    pub fn complete_submit(
        &mut self,
        ticket: RequestTicket,
        result: AppResult<ProcessResponse>,
    ) -> bool {
        if !self.requests.is_latest(ticket) {
            return false;
        }
        self.results = ResultsView::from_result(result);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;

    fn response(entries: &[(&str, &str, f64)]) -> ProcessResponse {
        ProcessResponse {
            report: entries
                .iter()
                .map(|(a, b, s)| ReportEntry {
                    file1: a.to_string(),
                    file2: b.to_string(),
                    similarity: *s,
                })
                .collect(),
        }
    }

    #[test]
    fn test_starts_with_two_slots() {
        let controller = FormController::new();
        let names: Vec<String> = controller.slots().iter().map(|s| s.field_name()).collect();
        assert_eq!(names, vec!["file-1", "file-2"]);
    }

    #[test]
    fn test_add_slots_are_sequential_and_unique() {
        for n in 2..8 {
            let mut controller = FormController::new();
            for _ in 0..n {
                controller.add_slot();
            }
            assert_eq!(controller.slot_count(), n + 2);

            let labels: Vec<String> = controller.slots().iter().map(|s| s.label()).collect();
            let expected: Vec<String> = (1..=n + 2).map(|i| format!("File {}", i)).collect();
            assert_eq!(labels, expected);

            let mut names: Vec<String> = controller.slots().iter().map(|s| s.field_name()).collect();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), n + 2);
        }
    }

    #[test]
    fn test_remove_never_goes_below_two() {
        let mut controller = FormController::new();
        controller.add_slot();
        assert!(controller.remove_slot());
        for _ in 0..10 {
            assert!(!controller.remove_slot());
        }
        assert_eq!(controller.slot_count(), MIN_SLOTS);
    }

    #[test]
    fn test_add_after_remove_reuses_number() {
        let mut controller = FormController::new();
        controller.add_slot();
        controller.add_slot();
        controller.remove_slot();
        let slot = controller.add_slot();
        assert_eq!(slot.field_name(), "file-4");
    }

    #[test]
    fn test_empty_report_shows_placeholder_only() {
        let mut controller = FormController::new();
        let ticket = controller.begin_submit();
        assert!(controller.complete_submit(ticket, Ok(response(&[]))));

        assert_eq!(controller.results(), &ResultsView::Empty);
        assert!(controller.results().rows().is_empty());
        assert!(controller.results().has_title());
        assert_eq!(controller.results().placeholder(), Some("No results"));
        assert_eq!(controller.results().error_message(), None);
    }

    #[test]
    fn test_report_rows_rendered() {
        let mut controller = FormController::new();
        let ticket = controller.begin_submit();
        controller.complete_submit(ticket, Ok(response(&[("a.py", "b.py", 87.456)])));

        let rows = controller.results().rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].file1, "a.py");
        assert_eq!(rows[0].file2, "b.py");
        assert_eq!(rows[0].bar_style(), "width: 87.456%");
        assert_eq!(rows[0].display_percentage(), "87.46%");
        assert!(controller.results().has_title());
        assert_eq!(controller.results().placeholder(), None);
    }

    #[test]
    fn test_resubmit_replaces_rows() {
        let mut controller = FormController::new();
        let first = controller.begin_submit();
        controller.complete_submit(
            first,
            Ok(response(&[("a.py", "b.py", 10.0), ("a.py", "c.py", 20.0)])),
        );
        assert_eq!(controller.results().rows().len(), 2);

        let second = controller.begin_submit();
        assert_eq!(controller.results(), &ResultsView::Pending);
        assert!(controller.results().rows().is_empty());
        assert_eq!(controller.results().placeholder(), Some("Processing..."));
        controller.complete_submit(second, Ok(response(&[("x.py", "y.py", 50.0)])));

        let rows = controller.results().rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].file1, "x.py");
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut controller = FormController::new();
        let first = controller.begin_submit();
        let second = controller.begin_submit();
        assert!(first < second);

        assert!(controller.complete_submit(second, Ok(response(&[("new.py", "b.py", 1.0)]))));
        assert!(!controller.complete_submit(first, Ok(response(&[("old.py", "b.py", 2.0)]))));

        assert_eq!(controller.results().rows()[0].file1, "new.py");
    }

    #[test]
    fn test_failure_renders_error_state() {
        let mut controller = FormController::new();
        let ticket = controller.begin_submit();
        controller.complete_submit(ticket, Err(AppError::Network("connection refused".into())));

        match controller.results() {
            ResultsView::Failed(msg) => assert!(msg.contains("connection refused")),
            other => panic!("unexpected view: {:?}", other),
        }
        assert!(!controller.results().has_title());
        assert!(controller.results().rows().is_empty());
        assert_eq!(controller.results().placeholder(), None);
        assert!(controller.results().error_message().is_some());
    }
}
