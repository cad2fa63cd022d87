//! Interactive consumer: maps diagnostics onto displayed source ranges.
//!
//! An editor integration feeds this one displayed fragment at a time; the
//! highlighter re-runs the pipeline (no caching of results, so edits are
//! always seen) and answers with the ranges to mark. A line is flagged at
//! most once per file revision; bumping the revision after an edit makes
//! fixed-then-reintroduced problems show up again.

use std::collections::{HashMap, HashSet};

use crate::pipeline;
use crate::project::Project;

/// Shortest fragment worth highlighting.
const MIN_FRAGMENT_LEN: usize = 3;

/// What kind of text a displayed fragment is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Code,
    Whitespace,
    Comment,
}

/// One displayed syntactic fragment, as the editor sees it.
#[derive(Debug, Clone)]
pub struct Fragment<'a> {
    pub text: &'a str,
    pub kind: FragmentKind,
    /// 1-based line the fragment starts on.
    pub line: usize,
    /// 1-based column of the fragment's first character.
    pub start_col: usize,
}

/// A range to mark in the editor, with the diagnostic's message.
///
/// `start_col` is 1-based inclusive, `end_col` exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    pub line: usize,
    pub start_col: usize,
    pub end_col: usize,
    pub message: String,
}

/// Per-file memory of which lines are already marked.
///
/// Keyed by content revision: a stale revision's lines are dropped the
/// moment a newer revision is seen, so the memory never outlives the text
/// it was computed for and stays bounded by the set of files on screen.
#[derive(Debug, Default)]
pub struct Highlighter {
    flagged: HashMap<String, (u64, HashSet<usize>)>,
}

impl Highlighter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spans to mark for one displayed fragment of `file` at `revision`.
    ///
    /// `line_len` is the length of the fragment's line, used to clip the
    /// span when the fragment runs past the end of its line.
    pub fn annotate(
        &mut self,
        project: &Project,
        file: &str,
        revision: u64,
        fragment: &Fragment<'_>,
        line_len: usize,
    ) -> Vec<HighlightSpan> {
        if fragment.kind != FragmentKind::Code {
            return Vec::new();
        }
        if fragment.text.len() < MIN_FRAGMENT_LEN {
            return Vec::new();
        }

        let Some(report) = pipeline::run(project, file) else {
            return Vec::new();
        };
        // Diagnostics scoped to a different unit never mark this one.
        if report.file != file {
            return Vec::new();
        }

        let entry = self
            .flagged
            .entry(file.to_string())
            .or_insert_with(|| (revision, HashSet::new()));
        if entry.0 != revision {
            *entry = (revision, HashSet::new());
        }

        let fragment_end = fragment.start_col + fragment.text.len();
        let mut spans = Vec::new();
        for diagnostic in &report.diagnostics {
            if diagnostic.line != fragment.line {
                continue;
            }
            if !entry.1.insert(diagnostic.line) {
                continue;
            }
            spans.push(HighlightSpan {
                line: diagnostic.line,
                start_col: fragment.start_col,
                end_col: fragment_end.min(line_len + 1),
                message: diagnostic.message.clone(),
            });
        }
        spans
    }
}
