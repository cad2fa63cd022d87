//! The pipeline driver: parse one named file, run every check, aggregate.
//!
//! `run` is the single entry point both consumers use. Its result is
//! deliberately two-valued: `Some(report)` when at least one diagnostic
//! exists, `None` otherwise. "Nothing wrong was found" and "nothing could
//! be analyzed" are reported identically; both front ends rely on that.

use std::fs;
use std::panic::{self, AssertUnwindSafe};

use crate::check::{self, Check};
use crate::diagnostics::{self, CheckFailure, Diagnostic, DiagnosticSink};
use crate::project::Project;
use crate::syntax::{self, ParseOutcome, JAVA_EXTENSION};

/// Everything one invocation produced.
#[derive(Debug)]
pub struct RunReport {
    /// Simple name of the unit the sink was last scoped to; the
    /// interactive consumer compares it against the file it displays.
    pub file: String,
    /// Aggregated diagnostics, in check-registration order per unit.
    pub diagnostics: Vec<Diagnostic>,
    /// Check faults absorbed during the run. Never user-visible.
    pub failures: Vec<CheckFailure>,
}

/// Analyze every unit named `file_name` with the full registry.
pub fn run(project: &Project, file_name: &str) -> Option<RunReport> {
    let checks = check::registry();
    run_with_checks(project, file_name, &checks)
}

/// Analyze every unit named `file_name` with an explicit check list.
///
/// All units sharing the name are processed in this one invocation, into
/// one sink that is re-scoped per unit. An unreadable unit aborts the
/// whole run with no result; a unit with syntax errors is skipped and the
/// run moves on to the next match.
pub fn run_with_checks(
    project: &Project,
    file_name: &str,
    checks: &[&dyn Check],
) -> Option<RunReport> {
    if !file_name.ends_with(JAVA_EXTENSION) {
        return None;
    }

    let snapshot = project.snapshot();
    let mut sink = DiagnosticSink::new();
    let mut collected: Vec<Diagnostic> = Vec::new();
    let mut failures: Vec<CheckFailure> = Vec::new();
    let mut found_any = false;

    for path in snapshot.matches(file_name) {
        // Scope the sink before parsing so even a failed parse leaves it
        // pointing at the right unit.
        sink.reset(file_name);

        let source = match fs::read(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("stylegate: cannot open {} for reading: {}", path.display(), e);
                diagnostics::note_check_failure();
                return None;
            }
        };

        let unit = match syntax::parse_unit(file_name, &source) {
            Ok(ParseOutcome::Clean(unit)) => unit,
            // Syntax errors are javac's to report; skip this unit only.
            Ok(ParseOutcome::SyntaxErrors) => continue,
            Err(e) => {
                eprintln!("stylegate: parser failure on {}: {}", path.display(), e);
                diagnostics::note_check_failure();
                return None;
            }
        };

        for check in checks {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| check.run(&unit, &mut sink)));
            let detail = match outcome {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => e.to_string(),
                Err(payload) => payload
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "check panicked".to_string()),
            };
            eprintln!("stylegate: check {} failed on {}: {}", check.name(), file_name, detail);
            diagnostics::note_check_failure();
            failures.push(CheckFailure {
                check: check.name(),
                detail,
            });
        }

        if !sink.is_empty() {
            collected.extend_from_slice(sink.snapshot());
            found_any = true;
        }
    }

    if found_any {
        Some(RunReport {
            file: sink.active_file().to_string(),
            diagnostics: collected,
            failures,
        })
    } else {
        None
    }
}
