//! The line scanner.
//!
//! Consumes a file one line at a time, classifies each line as comment or
//! code, and runs the construct detectors on code lines. The only state
//! carried across lines is a single "inside a block comment" bit; there is
//! no look-ahead and no syntax tree.

use super::context::in_comment_or_string;
use super::patterns::{
    ConstructKind, Detector, CONDITIONAL_DETECTORS, FUNCTION_DETECTOR, LOOP_DETECTORS,
};
use super::types::AnalysisResult;

/// Scan a sequence of lines and accumulate structural metrics.
///
/// One forward pass; each line is fully processed before the next is read.
/// The returned complexity excludes the conventional +1 baseline, which the
/// report layer adds via [`AnalysisResult::reported_complexity`].
pub fn analyze_lines<I>(lines: I) -> AnalysisResult
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut result = AnalysisResult::new();
    let mut in_block_comment = false;

    for line in lines {
        let line = line.as_ref();
        result.total_lines += 1;

        // Carried block-comment state wins over everything else.
        if in_block_comment {
            result.comment_lines += 1;
            if line.contains("*/") {
                in_block_comment = false;
            }
            continue;
        }

        // A line containing an opener is a comment line and leaves the
        // block open going into the next line, even when the same line
        // also contains the terminator. Line-granularity quirk, kept.
        if line.contains("/*") {
            result.comment_lines += 1;
            in_block_comment = true;
            continue;
        }

        if line.contains("//") {
            result.comment_lines += 1;
            continue;
        }

        detect_constructs(line, &mut result);
    }

    result
}

/// Run the detector groups against a code line.
///
/// The loop group and the conditional group each count at most one match
/// per line (first detector in the group wins); the function detector is
/// independent of both. Every accepted match also bumps the complexity
/// accumulator.
fn detect_constructs(line: &str, result: &mut AnalysisResult) {
    if let Some(kind) = first_match(line, &LOOP_DETECTORS) {
        count_construct(kind, result);
    }

    if let Some(kind) = first_match(line, &CONDITIONAL_DETECTORS) {
        count_construct(kind, result);
    }

    if let Some(m) = FUNCTION_DETECTOR.pattern.find(line) {
        if !in_comment_or_string(line, m.start()) {
            count_construct(FUNCTION_DETECTOR.kind, result);
        }
    }
}

/// First detector in `group` whose pattern matches outside of any
/// string/comment context on the line. Each detector derives its own match
/// offset and queries the context classifier with it.
fn first_match(line: &str, group: &[Detector]) -> Option<ConstructKind> {
    for detector in group {
        if let Some(m) = detector.pattern.find(line) {
            if !in_comment_or_string(line, m.start()) {
                return Some(detector.kind);
            }
        }
    }
    None
}

fn count_construct(kind: ConstructKind, result: &mut AnalysisResult) {
    match kind {
        ConstructKind::ForLoop => result.for_loops += 1,
        ConstructKind::WhileLoop => result.while_loops += 1,
        ConstructKind::DoWhileLoop => result.do_while_loops += 1,
        ConstructKind::IfStatement => result.if_statements += 1,
        ConstructKind::ElseIfStatement => result.else_if_statements += 1,
        ConstructKind::ElseStatement => result.else_statements += 1,
        ConstructKind::SwitchStatement => result.switch_statements += 1,
        ConstructKind::Function => result.functions += 1,
    }
    result.complexity += 1;
}
