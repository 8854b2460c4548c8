use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rayon::prelude::*;
use walkdir::{DirEntry, WalkDir};

use flowlint::error::ParseError;
use flowlint::report::ValidationReport;

/// Static validator for node-graph workflow definitions
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Workflow JSON files, or directories to scan recursively
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Emit one JSON object per file instead of human-readable output
    #[arg(long)]
    json: bool,

    /// Only print files that fail
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let files = collect_files(&cli.paths);
    if files.is_empty() {
        eprintln!("no workflow files found");
        return ExitCode::FAILURE;
    }

    // Documents are independent; validate them in parallel. Collecting from
    // the parallel iterator preserves input order, so output stays stable.
    let results: Vec<(PathBuf, Result<ValidationReport, ParseError>)> = files
        .into_par_iter()
        .map(|path| {
            let result = flowlint::parse::parse_file(&path).map(|doc| flowlint::validate::validate(&doc));
            (path, result)
        })
        .collect();

    let mut all_passed = true;
    for (path, result) in &results {
        match result {
            Ok(report) => {
                if !report.passed {
                    all_passed = false;
                }
                if cli.json {
                    print_json(path, report);
                } else if !cli.quiet || !report.passed {
                    print_human(path, report);
                }
            }
            Err(err) => {
                all_passed = false;
                if cli.json {
                    let line = serde_json::json!({
                        "file": path.display().to_string(),
                        "error": err.to_string(),
                    });
                    println!("{line}");
                } else {
                    eprintln!("{}: ERROR {err}", path.display());
                }
            }
        }
    }

    if all_passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let walker = WalkDir::new(path)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|e| e.depth() == 0 || !is_hidden(e));
            for entry in walker.filter_map(Result::ok) {
                if entry.file_type().is_file()
                    && entry.path().extension().is_some_and(|ext| ext == "json")
                {
                    files.push(entry.into_path());
                }
            }
        } else {
            files.push(path.clone());
        }
    }
    files
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn print_json(path: &PathBuf, report: &ValidationReport) {
    let line = serde_json::json!({
        "file": path.display().to_string(),
        "passed": report.passed,
        "findings": report.findings,
    });
    println!("{line}");
}

fn print_human(path: &PathBuf, report: &ValidationReport) {
    let status = if report.passed { "ok" } else { "FAIL" };
    println!(
        "{}: {status} ({} fatal, {} warning)",
        path.display(),
        report.fatal_count(),
        report.warning_count()
    );
    for finding in &report.findings {
        println!("  {finding}");
    }
}
