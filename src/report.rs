//! Output formatting for analysis results.
//!
//! Two formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption
//!
//! The +1 complexity baseline is applied here, at the presentation edge;
//! the scanner's accumulator stores the raw construct count.

use colored::*;
use serde::{Deserialize, Serialize};

use crate::scan::AnalysisResult;

/// Per-file entry in the JSON report.
#[derive(Serialize, Deserialize)]
pub struct FileEntry {
    pub file: String,
    pub total_lines: u64,
    pub comment_lines: u64,
    pub loops: LoopCounts,
    pub conditionals: ConditionalCounts,
    pub functions: u64,
    /// Reported value: raw construct count + 1 baseline.
    pub cyclomatic_complexity: u64,
}

#[derive(Serialize, Deserialize)]
pub struct LoopCounts {
    pub total: u64,
    #[serde(rename = "for")]
    pub for_loops: u64,
    #[serde(rename = "while")]
    pub while_loops: u64,
    #[serde(rename = "do_while")]
    pub do_while_loops: u64,
}

#[derive(Serialize, Deserialize)]
pub struct ConditionalCounts {
    pub total: u64,
    #[serde(rename = "if")]
    pub if_statements: u64,
    #[serde(rename = "else_if")]
    pub else_if_statements: u64,
    #[serde(rename = "else")]
    pub else_statements: u64,
    #[serde(rename = "switch")]
    pub switch_statements: u64,
}

/// Top-level JSON report.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub files_scanned: usize,
    pub files: Vec<FileEntry>,
    /// Aggregate over all files; complexity is the summed raw construct
    /// count plus a single +1 baseline for the whole input.
    pub totals: FileEntry,
}

fn file_entry(file: &str, result: &AnalysisResult) -> FileEntry {
    FileEntry {
        file: file.to_string(),
        total_lines: result.total_lines,
        comment_lines: result.comment_lines,
        loops: LoopCounts {
            total: result.total_loops(),
            for_loops: result.for_loops,
            while_loops: result.while_loops,
            do_while_loops: result.do_while_loops,
        },
        conditionals: ConditionalCounts {
            total: result.total_conditionals(),
            if_statements: result.if_statements,
            else_if_statements: result.else_if_statements,
            else_statements: result.else_statements,
            switch_statements: result.switch_statements,
        },
        functions: result.functions,
        cyclomatic_complexity: result.reported_complexity(),
    }
}

fn merged(files: &[(String, AnalysisResult)]) -> AnalysisResult {
    let mut totals = AnalysisResult::new();
    for (_, result) in files {
        totals.merge(result);
    }
    totals
}

/// Write results in JSON format.
pub fn write_json(files: &[(String, AnalysisResult)]) -> anyhow::Result<()> {
    let report = JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        files_scanned: files.len(),
        files: files
            .iter()
            .map(|(file, result)| file_entry(file, result))
            .collect(),
        totals: file_entry("(all)", &merged(files)),
    };

    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

/// Write results as colored terminal output.
pub fn write_pretty(files: &[(String, AnalysisResult)]) {
    for (file, result) in files {
        println!("{}", file.bold());
        print_result(result);
        println!();
    }

    if files.len() > 1 {
        println!("{} ({} files)", "Totals".bold().underline(), files.len());
        print_result(&merged(files));
        println!();
    }
}

fn print_result(result: &AnalysisResult) {
    println!("  Total lines: {}", result.total_lines);
    println!("  Total comments: {}", result.comment_lines);
    println!();
    println!("  Total loops: {}", result.total_loops());
    println!("    For loops: {}", result.for_loops);
    println!("    While loops: {}", result.while_loops);
    println!("    Do-while loops: {}", result.do_while_loops);
    println!();
    println!(
        "  Total conditional statements: {}",
        result.total_conditionals()
    );
    println!("    If statements: {}", result.if_statements);
    println!("    Else-if statements: {}", result.else_if_statements);
    println!("    Else statements: {}", result.else_statements);
    println!("    Switch statements: {}", result.switch_statements);
    println!();
    println!("  Total functions: {}", result.functions);
    println!(
        "  Cyclomatic complexity: {}",
        result.reported_complexity().to_string().cyan()
    );
}

/// Aggregate complexity across files as reported to the user: the summed
/// raw construct counts plus one baseline.
pub fn aggregate_complexity(files: &[(String, AnalysisResult)]) -> u64 {
    merged(files).reported_complexity()
}
