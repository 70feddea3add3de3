//! Cyclocount - heuristic source metrics without parsing.
//!
//! Cyclocount approximates structural metrics for C-family source files -
//! line counts, comment density, control-flow construct counts, function
//! counts, and a cyclomatic-complexity estimate - by scanning line by line
//! with pattern matching. No syntax tree is ever built; the numbers are
//! deliberate approximations with documented blind spots (nested block
//! comments, raw strings, multi-line signatures).
//!
//! # Architecture
//!
//! - `scan`: the core scanner - context classifier, pattern catalog, and
//!   the line-oriented state machine that accumulates counts
//! - `source`: input collaborator - extension validation, file reading,
//!   directory walking
//! - `report`: output formatting (pretty, JSON); applies the +1 baseline
//! - `cli`: argument parsing and command flow

pub mod cli;
pub mod report;
pub mod scan;
pub mod source;

pub use scan::{analyze_lines, in_comment_or_string, AnalysisResult, ConstructKind};
pub use source::{has_supported_extension, read_lines, SourceError, SUPPORTED_EXTENSIONS};
