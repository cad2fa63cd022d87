//! Gate consumer: scan a whole project and block the build on any finding.

use std::fmt;

use crate::check::Check;
use crate::pipeline;
use crate::project::Project;

/// One build-blocking error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateError {
    pub file: String,
    pub line: usize,
    pub message: String,
}

impl fmt::Display for GateError {
    /// The exact message format build tooling consumes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}\n{}", self.file, self.line, self.message)
    }
}

/// Result of gating one project.
#[derive(Debug, Default)]
pub struct GateReport {
    pub errors: Vec<GateError>,
    /// Distinct file names the gate visited.
    pub files_checked: usize,
    /// Check faults absorbed along the way.
    pub check_failures: usize,
}

impl GateReport {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Gate every Java file in the project.
///
/// Files whose pipeline result is absent (clean, unparseable, or
/// unreadable) are skipped; the scan always visits every file.
pub fn scan(project: &Project, checks: &[&dyn Check]) -> GateReport {
    let names = project.snapshot().file_names();
    let mut report = GateReport::default();
    for name in names {
        gate_one(project, &name, checks, &mut report);
    }
    report
}

/// Gate a single file by name.
pub fn scan_file(project: &Project, file_name: &str, checks: &[&dyn Check]) -> GateReport {
    let mut report = GateReport::default();
    gate_one(project, file_name, checks, &mut report);
    report
}

fn gate_one(project: &Project, file_name: &str, checks: &[&dyn Check], report: &mut GateReport) {
    report.files_checked += 1;
    let Some(run) = pipeline::run_with_checks(project, file_name, checks) else {
        return;
    };
    report.check_failures += run.failures.len();
    for diagnostic in run.diagnostics {
        report.errors.push(GateError {
            file: file_name.to_string(),
            line: diagnostic.line,
            message: diagnostic.message,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_gate_message_format() {
        let error = GateError {
            file: "Bad.java".to_string(),
            line: 7,
            message: "this expression divides by zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Bad.java: 7\nthis expression divides by zero"
        );
    }

    #[test]
    fn test_absent_files_do_not_stop_the_scan() {
        let temp = TempDir::new().unwrap();
        // Sorted scan order: Broken.java (syntax errors, absent) comes
        // before Late.java, which must still be gated.
        fs::write(temp.path().join("Broken.java"), "class Broken {").unwrap();
        fs::write(temp.path().join("Late.java"), "int x = 1 / 0;").unwrap();
        let project = Project::open(temp.path()).unwrap();

        let checks = check::registry();
        let report = scan(&project, &checks);

        assert_eq!(report.files_checked, 2);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].file, "Late.java");
        assert!(!report.passed());
    }

    #[test]
    fn test_clean_project_passes() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("Fine.java"),
            "public class Fine {\n    private int n;\n\n    public Fine(int n) {\n        this.n = n;\n    }\n}\n",
        )
        .unwrap();
        let project = Project::open(temp.path()).unwrap();

        let checks = check::registry();
        let report = scan(&project, &checks);

        assert!(report.passed());
        assert_eq!(report.files_checked, 1);
    }
}
