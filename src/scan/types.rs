//! Core types for scan results.

use serde::{Deserialize, Serialize};

/// Accumulated metrics for one scanned source.
///
/// All counters start at zero and only ever grow while a scan is running.
/// `complexity` holds the raw sum of counted constructs; the conventional
/// baseline path is added by [`reported_complexity`](Self::reported_complexity),
/// not stored here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Every line read, regardless of classification.
    pub total_lines: u64,
    /// Lines classified as comments (line or block).
    pub comment_lines: u64,
    pub for_loops: u64,
    pub while_loops: u64,
    pub do_while_loops: u64,
    pub if_statements: u64,
    pub else_if_statements: u64,
    pub else_statements: u64,
    pub switch_statements: u64,
    pub functions: u64,
    /// Raw construct count, without the +1 baseline.
    pub complexity: u64,
}

impl AnalysisResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all loop counters.
    pub fn total_loops(&self) -> u64 {
        self.for_loops + self.while_loops + self.do_while_loops
    }

    /// Sum of all conditional counters.
    pub fn total_conditionals(&self) -> u64 {
        self.if_statements + self.else_if_statements + self.else_statements + self.switch_statements
    }

    /// Cyclomatic complexity as presented to the user: constructs + 1.
    pub fn reported_complexity(&self) -> u64 {
        self.complexity + 1
    }

    /// Fold another file's counts into this one (batch mode aggregation).
    pub fn merge(&mut self, other: &AnalysisResult) {
        self.total_lines += other.total_lines;
        self.comment_lines += other.comment_lines;
        self.for_loops += other.for_loops;
        self.while_loops += other.while_loops;
        self.do_while_loops += other.do_while_loops;
        self.if_statements += other.if_statements;
        self.else_if_statements += other.else_if_statements;
        self.else_statements += other.else_statements;
        self.switch_statements += other.switch_statements;
        self.functions += other.functions;
        self.complexity += other.complexity;
    }
}
