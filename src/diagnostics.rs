//! Diagnostic model and the per-run sink checks write into.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

/// One reported problem, anchored to a source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based line number.
    pub line: usize,
    pub message: String,
}

/// Accumulates diagnostics for the unit currently being checked.
///
/// One sink exists per pipeline invocation; it is reset to each unit's name
/// before any check runs, so checks only ever see the diagnostics they
/// themselves add. Checks write to it but never reset it.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    file: String,
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope the sink to a unit, discarding anything left from the last one.
    pub fn reset(&mut self, file: &str) {
        self.file = file.to_string();
        self.diagnostics.clear();
    }

    /// Append a diagnostic. Insertion order is preserved and duplicates are
    /// kept; per-line dedup is the interactive consumer's job.
    pub fn record(&mut self, line: usize, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            line,
            message: message.into(),
        });
    }

    pub fn snapshot(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Name of the unit the sink is currently scoped to.
    pub fn active_file(&self) -> &str {
        &self.file
    }
}

/// A check fault absorbed at the driver boundary.
///
/// Never a user-visible diagnostic: faults are folded into the run report
/// for operators and counted process-wide.
#[derive(Debug, Clone)]
pub struct CheckFailure {
    /// Registry name of the check that faulted.
    pub check: &'static str,
    pub detail: String,
}

static CHECK_FAILURES: AtomicUsize = AtomicUsize::new(0);

/// Bump the process-wide failure counter.
pub fn note_check_failure() {
    CHECK_FAILURES.fetch_add(1, Ordering::Relaxed);
}

/// Total check faults and unreadable units seen by this process.
pub fn check_failure_count() -> usize {
    CHECK_FAILURES.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clears_previous_unit() {
        let mut sink = DiagnosticSink::new();
        sink.reset("A.java");
        sink.record(3, "first");
        assert_eq!(sink.active_file(), "A.java");
        assert_eq!(sink.snapshot().len(), 1);

        sink.reset("B.java");
        assert_eq!(sink.active_file(), "B.java");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_record_preserves_order_and_duplicates() {
        let mut sink = DiagnosticSink::new();
        sink.reset("A.java");
        sink.record(5, "same");
        sink.record(2, "other");
        sink.record(5, "same");

        let lines: Vec<usize> = sink.snapshot().iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![5, 2, 5]);
    }
}
