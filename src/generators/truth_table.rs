//! Truth table questions.

use super::QuestionDraft;
use crate::naming::random_id;
use crate::question::{BloomLevel, QuestionFrontmatter, QuestionMetadata};
use rand::Rng;

struct TruthTableVariation {
    variables: &'static [&'static str],
    expression: &'static str,
    /// Sub-expression columns shown between the inputs and the result.
    intermediates: &'static [&'static str],
    show_inputs: bool,
    concepts: &'static str,
    focus_point: &'static str,
    hint_text: &'static str,
    extra_task: &'static str,
    difficulty: u8,
}

const VARIATIONS: [TruthTableVariation; 9] = [
    TruthTableVariation {
        variables: &["A", "B"],
        expression: "A && B",
        intermediates: &[],
        show_inputs: true,
        concepts: "basic AND operation",
        focus_point: "both inputs must be true for the result to be true",
        hint_text: "AND is only true when both inputs are true",
        extra_task: "What percentage of the rows result in true?",
        difficulty: 1,
    },
    TruthTableVariation {
        variables: &["P", "Q"],
        expression: "P || Q",
        intermediates: &[],
        show_inputs: true,
        concepts: "basic OR operation",
        focus_point: "only one input needs to be true for the result to be true",
        hint_text: "OR is false only when both inputs are false",
        extra_task: "Compare this truth table with the AND truth table",
        difficulty: 1,
    },
    TruthTableVariation {
        variables: &["X", "Y"],
        expression: "X ^ Y",
        intermediates: &[],
        show_inputs: true,
        concepts: "XOR (exclusive OR) operation",
        focus_point: "XOR is true when inputs are different",
        hint_text: "XOR is true when exactly one input is true",
        extra_task: "How does XOR differ from regular OR?",
        difficulty: 1,
    },
    TruthTableVariation {
        variables: &["P", "Q"],
        expression: "!P || Q  // P implies Q",
        intermediates: &["!P"],
        show_inputs: true,
        concepts: "logical implication (if P then Q)",
        focus_point: "implication is false only when P is true and Q is false",
        hint_text: "Think about when 'if P then Q' would be false",
        extra_task: "Why is !P || Q equivalent to 'if P then Q'?",
        difficulty: 2,
    },
    TruthTableVariation {
        variables: &["A", "B"],
        expression: "!(A && !B)",
        intermediates: &["!B", "A && !B"],
        show_inputs: true,
        concepts: "multiple NOT operations",
        focus_point: "how NOT distributes over AND/OR",
        hint_text: "First find !B, then A && !B, finally apply outer NOT",
        extra_task: "Convert this to an equivalent expression without using NOT",
        difficulty: 2,
    },
    TruthTableVariation {
        variables: &["X", "Y", "Z"],
        expression: "X && Y || Z",
        intermediates: &["X && Y"],
        show_inputs: true,
        concepts: "operator precedence without parentheses",
        focus_point: "AND has higher precedence than OR",
        hint_text: "First find X && Y, then combine with Z using OR",
        extra_task: "How would parentheses around 'Y || Z' change the results?",
        difficulty: 2,
    },
    TruthTableVariation {
        variables: &["P", "Q", "R"],
        expression: "(P ^ Q) && !R",
        intermediates: &["P ^ Q", "!R"],
        show_inputs: false,
        concepts: "XOR with other operations",
        focus_point: "XOR precedence and combination with NOT",
        hint_text: "First compute P ^ Q, then !R, finally combine with AND",
        extra_task: "When does this expression evaluate to true?",
        difficulty: 3,
    },
    TruthTableVariation {
        variables: &["A", "B", "C"],
        expression: "(A && B) -> C  // equivalent to !(A && B) || C",
        intermediates: &["A && B", "!(A && B)"],
        show_inputs: false,
        concepts: "complex implication with multiple conditions",
        focus_point: "breaking down complex implications",
        hint_text: "First find A && B, then apply the implication",
        extra_task: "Write this using only AND, OR, and NOT operators",
        difficulty: 3,
    },
    TruthTableVariation {
        variables: &["P", "Q", "R"],
        expression: "!(P && Q) || (Q ^ !R)",
        intermediates: &["P && Q", "!R", "Q ^ !R"],
        show_inputs: false,
        concepts: "nested operations with multiple operators",
        focus_point: "order of operations with multiple operator types",
        hint_text: "Break this into smaller sub-expressions",
        extra_task: "How many intermediate steps are needed?",
        difficulty: 3,
    },
];

/// A rendered markdown table split into the pieces the template expects.
#[derive(Debug, Clone, PartialEq)]
pub struct TruthTable {
    pub headers: String,
    pub separator: String,
    pub rows: String,
}

fn table_line<S: AsRef<str>>(cells: &[S]) -> String {
    let mut line = String::from("|");
    for cell in cells {
        line.push(' ');
        line.push_str(cell.as_ref());
        line.push_str(" |");
    }
    line
}

/// Build a blank truth table over `variables`.
///
/// Row `i` assigns `T` to variable `j` when bit `j` of `i` is set. Input
/// cells are left blank unless `show_inputs`; intermediate and result
/// cells are always blank.
pub fn truth_table(variables: &[&str], intermediates: &[&str], show_inputs: bool) -> TruthTable {
    let mut headers: Vec<&str> = Vec::with_capacity(variables.len() + intermediates.len() + 1);
    headers.extend_from_slice(variables);
    headers.extend_from_slice(intermediates);
    headers.push("Result");

    let dashes: Vec<String> = headers.iter().map(|h| "-".repeat(h.len().max(3))).collect();

    let mut rows = Vec::with_capacity(1 << variables.len());
    for i in 0..(1usize << variables.len()) {
        let mut cells: Vec<&str> = Vec::with_capacity(headers.len());
        for j in 0..variables.len() {
            cells.push(match (show_inputs, i & (1 << j) != 0) {
                (false, _) => " ",
                (true, true) => "T",
                (true, false) => "F",
            });
        }
        cells.extend(std::iter::repeat_n(" ", intermediates.len() + 1));
        rows.push(table_line(&cells));
    }

    TruthTable {
        headers: table_line(&headers),
        separator: table_line(&dashes),
        rows: rows.join("\n"),
    }
}

fn instructions(difficulty: u8) -> &'static str {
    match difficulty {
        1 => "Complete the Result column in the truth table below.",
        2 => "Complete the intermediate steps and Result column in the truth table below.",
        _ => "Fill in all values in the truth table below, showing your work in the intermediate columns.",
    }
}

/// Complete a truth table for a randomly chosen boolean expression.
pub fn truth_table_question<R: Rng + ?Sized>(rng: &mut R) -> QuestionDraft {
    let variation = &VARIATIONS[rng.random_range(0..VARIATIONS.len())];
    let table = truth_table(
        variation.variables,
        variation.intermediates,
        variation.show_inputs,
    );

    let frontmatter = QuestionFrontmatter::new(
        random_id("truth_table", rng),
        QuestionMetadata::new(
            "expressions",
            BloomLevel::Analyze,
            variation.difficulty,
            &["boolean", "truth-tables", "operators"],
        ),
    );

    QuestionDraft {
        frontmatter,
        template: "truth_table.md",
        replacements: vec![
            ("EXPRESSION", variation.expression.to_string()),
            (
                "TABLE_INSTRUCTIONS",
                instructions(variation.difficulty).to_string(),
            ),
            ("COLUMN_HEADERS", table.headers),
            ("HEADER_SEPARATOR", table.separator),
            ("TABLE_ROWS", table.rows),
            ("CONCEPTS", variation.concepts.to_string()),
            ("FOCUS_POINT", variation.focus_point.to_string()),
            ("HINT_TEXT", variation.hint_text.to_string()),
            ("EXTRA_TASK", variation.extra_task.to_string()),
        ],
    }
}
