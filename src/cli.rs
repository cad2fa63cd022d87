//! Command-line interface for stylegate.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::check;
use crate::config::{self, Config};
use crate::gate;
use crate::project::Project;
use crate::report;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Style and semantics gate for beginner Java code.
///
/// Stylegate parses each Java file, runs a fixed battery of checks for the
/// mistakes javac accepts silently (fall-through switches, == on strings,
/// shadowed fields, stray semicolons, ...), and fails the build when any
/// file has a finding. Files that do not parse are left to javac.
#[derive(Parser)]
#[command(name = "stylegate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Gate a project or a single file
    #[command(visible_alias = "lint")]
    Check(CheckArgs),
    /// List the registered checks in their run order
    Checks,
}

/// Arguments for the check command.
#[derive(Parser)]
pub struct CheckArgs {
    /// Path to check (file or directory)
    pub path: PathBuf,

    /// Path to config YAML file (default: auto-discover in the project root)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

/// Run the check command.
pub fn run_check(args: &CheckArgs) -> anyhow::Result<i32> {
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let metadata = match std::fs::metadata(&args.path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: cannot access path {:?}: {}", args.path, e);
            return Ok(EXIT_ERROR);
        }
    };

    // A single file is gated through its parent directory as the project
    // root, so same-named units elsewhere in that tree are seen too.
    let (root, single_file) = if metadata.is_file() {
        let parent = args
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let name = args
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string());
        (parent, name)
    } else {
        (args.path.clone(), None)
    };

    // An explicit config must parse; a discovered one is best effort.
    let config = match &args.config {
        Some(path) => match Config::parse_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error parsing config: {}", e);
                return Ok(EXIT_ERROR);
            }
        },
        None => match config::discover(&root) {
            Some(path) => match Config::parse_file(&path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error parsing {}: {}", path.display(), e);
                    return Ok(EXIT_ERROR);
                }
            },
            None => Config::default(),
        },
    };

    if let Err(e) = config::validate(&config) {
        eprintln!("Error: invalid config: {}", e);
        return Ok(EXIT_ERROR);
    }

    let project = Project::open(&root)?;
    let checks = config.enabled_checks();

    let gate_report = match &single_file {
        Some(name) => gate::scan_file(&project, name, &checks),
        None => gate::scan(&project, &checks),
    };

    let path_str = args.path.to_string_lossy().to_string();
    match args.format.as_str() {
        "json" => report::write_json(&path_str, &gate_report)?,
        _ => report::write_pretty(&path_str, &gate_report),
    }

    if gate_report.passed() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}

/// Run the checks command.
pub fn run_checks_list() -> anyhow::Result<i32> {
    println!("Registered checks, in run order:");
    println!();
    for check in check::registry() {
        println!("  {:<20} {}", check.name(), check.description());
    }
    println!();
    println!("Disable one with 'disabled_checks' in stylegate.yaml");
    Ok(EXIT_SUCCESS)
}
