//! Command-line interface for cyclocount.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use crate::report;
use crate::scan::{analyze_lines, AnalysisResult};
use crate::source;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Heuristic source metrics without parsing.
///
/// Cyclocount scans C-family source files line by line and reports line
/// counts, comment counts, control-flow construct counts, function counts,
/// and a cyclomatic-complexity estimate. It never builds a syntax tree;
/// the numbers are pattern-matched approximations.
#[derive(Parser)]
#[command(name = "cyclocount")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File or directory to analyze (prompted for when omitted)
    pub path: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Maximum acceptable aggregate complexity (exit non-zero if exceeded)
    #[arg(short, long)]
    pub threshold: Option<u64>,
}

/// Run the analysis described by the parsed arguments.
pub fn run(cli: &Cli) -> anyhow::Result<i32> {
    if cli.format != "pretty" && cli.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            cli.format
        );
        return Ok(EXIT_ERROR);
    }

    let path = match &cli.path {
        Some(p) => p.clone(),
        None => prompt_for_path()?,
    };

    let metadata = match std::fs::metadata(&path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: cannot access path {:?}: {}", path, e);
            return Ok(EXIT_ERROR);
        }
    };

    let targets = if metadata.is_dir() {
        source::collect_files(&path)?
    } else {
        if !source::has_supported_extension(&path) {
            eprintln!(
                "Error: unsupported file type {:?} (expected one of: {})",
                path,
                source::SUPPORTED_EXTENSIONS.join(", ")
            );
            return Ok(EXIT_ERROR);
        }
        vec![path.clone()]
    };

    if targets.is_empty() {
        eprintln!("Warning: no source files to analyze");
        return Ok(EXIT_SUCCESS);
    }

    let results = analyze_files(&targets)?;

    match cli.format.as_str() {
        "json" => report::write_json(&results)?,
        _ => report::write_pretty(&results),
    }

    if let Some(threshold) = cli.threshold {
        let complexity = report::aggregate_complexity(&results);
        if complexity > threshold {
            eprintln!(
                "Complexity {} exceeds threshold {}",
                complexity, threshold
            );
            return Ok(EXIT_FAILED);
        }
    }

    Ok(EXIT_SUCCESS)
}

/// Read each target into lines and scan it.
fn analyze_files(targets: &[PathBuf]) -> anyhow::Result<Vec<(String, AnalysisResult)>> {
    let mut results = Vec::with_capacity(targets.len());

    for target in targets {
        let lines = source::read_lines(target)?;
        let result = analyze_lines(&lines);
        results.push((display_path(target), result));
    }

    Ok(results)
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Interactive fallback when no path argument was given.
fn prompt_for_path() -> anyhow::Result<PathBuf> {
    print!("Enter the filename: ");
    std::io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .context("failed to read filename from stdin")?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        anyhow::bail!("no filename given");
    }
    Ok(PathBuf::from(trimmed))
}
