//! Output formatting for gate results.
//!
//! Two formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};

use crate::gate::GateReport;

/// JSON report structure.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub path: String,
    pub files_checked: usize,
    pub passed: bool,
    pub problems: Vec<JsonProblem>,
    pub check_failures: usize,
}

#[derive(Serialize, Deserialize)]
pub struct JsonProblem {
    pub file: String,
    pub line: usize,
    pub message: String,
}

fn to_json_report(path: &str, report: &GateReport) -> JsonReport {
    let problems: Vec<JsonProblem> = report
        .errors
        .iter()
        .map(|e| JsonProblem {
            file: e.file.clone(),
            line: e.line,
            message: e.message.clone(),
        })
        .collect();

    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path: path.to_string(),
        files_checked: report.files_checked,
        passed: report.passed(),
        problems,
        check_failures: report.check_failures,
    }
}

/// Write results in JSON format.
pub fn write_json(path: &str, report: &GateReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&to_json_report(path, report))?;
    println!("{}", json);
    Ok(())
}

/// Write colored results for a terminal.
pub fn write_pretty(path: &str, report: &GateReport) {
    println!("{} {}", "stylegate".bold(), path.dimmed());
    println!();

    for error in &report.errors {
        println!(
            "  {} {}: {}",
            "error".red().bold(),
            format!("{}:{}", error.file, error.line).bold(),
            error.message
        );
    }
    if !report.errors.is_empty() {
        println!();
    }

    let summary = format!(
        "{} problem(s) in {} file(s)",
        report.errors.len(),
        report.files_checked
    );
    if report.passed() {
        println!("  {} {}", "PASS".green().bold(), summary);
    } else {
        println!("  {} {}", "FAIL".red().bold(), summary);
    }
    if report.check_failures > 0 {
        println!(
            "  {} {} check failure(s) were absorbed; see stderr",
            "note".yellow(),
            report.check_failures
        );
    }
}
