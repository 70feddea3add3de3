//! Heuristic line-oriented scanning.
//!
//! No syntax tree is ever built: the scanner classifies each line as
//! comment or code with one bit of cross-line state, and matches code
//! lines against a fixed catalog of construct patterns, each gated by a
//! within-line string/comment context check.

mod context;
mod patterns;
mod scanner;
mod types;

pub use context::in_comment_or_string;
pub use patterns::{ConstructKind, Detector, CONDITIONAL_DETECTORS, FUNCTION_DETECTOR, LOOP_DETECTORS};
pub use scanner::analyze_lines;
pub use types::AnalysisResult;
