//! The construct pattern catalog.
//!
//! A fixed, process-wide set of regexes, one per detectable construct,
//! compiled once. Detector groups are explicit ordered slices so the
//! first-match-wins tie-break is visible in one place rather than buried
//! in a chain of if/else fallthroughs.

use lazy_static::lazy_static;
use regex::Regex;

/// The construct kinds the scanner can recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructKind {
    ForLoop,
    WhileLoop,
    DoWhileLoop,
    IfStatement,
    ElseIfStatement,
    ElseStatement,
    SwitchStatement,
    Function,
}

impl ConstructKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstructKind::ForLoop => "for loop",
            ConstructKind::WhileLoop => "while loop",
            ConstructKind::DoWhileLoop => "do-while loop",
            ConstructKind::IfStatement => "if statement",
            ConstructKind::ElseIfStatement => "else-if statement",
            ConstructKind::ElseStatement => "else statement",
            ConstructKind::SwitchStatement => "switch statement",
            ConstructKind::Function => "function",
        }
    }
}

/// A single entry in a detector group: which counter a pattern feeds.
pub struct Detector {
    pub kind: ConstructKind,
    pub pattern: &'static Regex,
}

lazy_static! {
    static ref FOR_LOOP: Regex = Regex::new(r"\bfor\s*\(").unwrap();
    static ref WHILE_LOOP: Regex = Regex::new(r"\bwhile\s*\(").unwrap();
    static ref DO_WHILE_LOOP: Regex = Regex::new(r"\bdo\s*\{").unwrap();
    static ref IF_STATEMENT: Regex = Regex::new(r"\bif\s*\(").unwrap();
    static ref ELSE_IF_STATEMENT: Regex = Regex::new(r"\belse\s+if\s*\(").unwrap();
    static ref ELSE_STATEMENT: Regex = Regex::new(r"\belse\b").unwrap();
    static ref SWITCH_STATEMENT: Regex = Regex::new(r"\bswitch\s*\(").unwrap();

    /// Function-shape heuristic: a `type name ( args ) {` signature on one
    /// line. Known to miss multi-line signatures and to over-match control
    /// structures preceded by a type-like token; kept deliberately broad.
    static ref FUNCTION_SHAPE: Regex =
        Regex::new(r"\b[A-Za-z_][A-Za-z0-9_]*\s+[A-Za-z_][A-Za-z0-9_]*\s*\([^)]*\)\s*\{").unwrap();

    /// Loop detectors, evaluated in order; at most one counts per line.
    pub static ref LOOP_DETECTORS: Vec<Detector> = vec![
        Detector { kind: ConstructKind::ForLoop, pattern: &FOR_LOOP },
        Detector { kind: ConstructKind::WhileLoop, pattern: &WHILE_LOOP },
        Detector { kind: ConstructKind::DoWhileLoop, pattern: &DO_WHILE_LOOP },
    ];

    /// Conditional detectors, evaluated in order; at most one counts per
    /// line. `else if` must outrank both `if` and bare `else`, which it
    /// textually contains.
    pub static ref CONDITIONAL_DETECTORS: Vec<Detector> = vec![
        Detector { kind: ConstructKind::ElseIfStatement, pattern: &ELSE_IF_STATEMENT },
        Detector { kind: ConstructKind::IfStatement, pattern: &IF_STATEMENT },
        Detector { kind: ConstructKind::ElseStatement, pattern: &ELSE_STATEMENT },
        Detector { kind: ConstructKind::SwitchStatement, pattern: &SWITCH_STATEMENT },
    ];

    /// The function detector runs independently of the loop and conditional
    /// groups: a one-line function body can also contain a conditional.
    pub static ref FUNCTION_DETECTOR: Detector = Detector {
        kind: ConstructKind::Function,
        pattern: &FUNCTION_SHAPE,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_conditional(line: &str) -> Option<ConstructKind> {
        CONDITIONAL_DETECTORS
            .iter()
            .find(|d| d.pattern.is_match(line))
            .map(|d| d.kind)
    }

    #[test]
    fn test_loop_patterns_match_basic_forms() {
        assert!(FOR_LOOP.is_match("for (int i = 0; i < n; i++) {"));
        assert!(WHILE_LOOP.is_match("while (x > 0) {"));
        assert!(DO_WHILE_LOOP.is_match("do {"));
    }

    #[test]
    fn test_word_boundaries_prevent_substring_matches() {
        assert!(!FOR_LOOP.is_match("before(x);"));
        assert!(!WHILE_LOOP.is_match("meanwhile(y);"));
        assert!(!IF_STATEMENT.is_match("notify(z);"));
    }

    #[test]
    fn test_else_if_outranks_if_and_else() {
        assert_eq!(
            first_conditional("if (x) { } else if (y) { }"),
            Some(ConstructKind::ElseIfStatement)
        );
        assert_eq!(
            first_conditional("if (x) {"),
            Some(ConstructKind::IfStatement)
        );
        assert_eq!(
            first_conditional("} else {"),
            Some(ConstructKind::ElseStatement)
        );
        assert_eq!(
            first_conditional("switch (op) {"),
            Some(ConstructKind::SwitchStatement)
        );
    }

    #[test]
    fn test_function_shape_matches_one_line_definition() {
        assert!(FUNCTION_SHAPE.is_match("int add(int a, int b) {"));
        assert!(FUNCTION_SHAPE.is_match("static void reset(void) {"));
        assert!(!FUNCTION_SHAPE.is_match("add(1, 2);"));
        assert!(!FUNCTION_SHAPE.is_match("int x = 5;"));
    }

    #[test]
    fn test_function_shape_over_matches_typed_control_lines() {
        // Documented imprecision: a type-like token before a control keyword
        // satisfies the word-word-parens-brace shape.
        assert!(FUNCTION_SHAPE.is_match("unsigned while (x) {"));
    }
}
