//! Expression evaluation questions: boolean, numeric, and mixed.
//!
//! Numeric step-by-step answers use C# semantics: integer `/` truncates
//! toward zero and `%` takes the sign of the dividend.

use super::{QuestionDraft, pick};
use crate::naming::random_id;
use crate::question::{BloomLevel, QuestionFrontmatter, QuestionMetadata};
use rand::Rng;

struct BooleanVariation {
    expression: &'static str,
    initial_values: &'static str,
    evaluation_steps: &'static str,
    concepts: &'static str,
    focus_point: &'static str,
    hint_text: &'static str,
    extra_task: &'static str,
    difficulty: u8,
}

const BOOLEAN_VARIATIONS: [BooleanVariation; 3] = [
    BooleanVariation {
        expression: "true || false && false",
        initial_values: "All values are boolean literals",
        evaluation_steps: "1. false && false = false\n2. true || false = true",
        concepts: "operator precedence with AND (&&) and OR (||)",
        focus_point: "AND has higher precedence than OR",
        hint_text: "Evaluate AND operations before OR operations",
        extra_task: "How would adding parentheses around 'true || false' change the result?",
        difficulty: 1,
    },
    BooleanVariation {
        expression: "(x > 5) && (y++ < 10)",
        initial_values: "x = 3, y = 7",
        evaluation_steps: "1. x > 5 = false\n2. Second part not evaluated due to short-circuiting",
        concepts: "short-circuit evaluation of boolean expressions",
        focus_point: "the right side of AND won't execute if the left is false",
        hint_text: "Consider what happens when the left side of && is false",
        extra_task: "What will be the value of y after this expression is evaluated?",
        difficulty: 2,
    },
    BooleanVariation {
        expression: "!(a && b) || (c && !b)",
        initial_values: "a = true, b = false, c = true",
        evaluation_steps: "1. !b = true\n2. a && b = false\n3. !(false) = true\n4. c && true = true\n5. true || true = true",
        concepts: "De Morgan's Law and operator precedence",
        focus_point: "how NOT affects boolean expressions",
        hint_text: "Apply NOT operations first, then evaluate AND, finally OR",
        extra_task: "Rewrite this expression using De Morgan's Law",
        difficulty: 3,
    },
];

/// Evaluate a boolean expression with precedence, short-circuit, or De Morgan.
pub fn boolean_expression_question<R: Rng + ?Sized>(rng: &mut R) -> QuestionDraft {
    let variation = &BOOLEAN_VARIATIONS[rng.random_range(0..BOOLEAN_VARIATIONS.len())];

    let frontmatter = QuestionFrontmatter::new(
        random_id("bool_expr", rng),
        QuestionMetadata::new(
            "expressions",
            BloomLevel::Analyze,
            variation.difficulty,
            &["boolean", "operators", "precedence"],
        ),
    );

    QuestionDraft {
        frontmatter,
        template: "boolean_expression.md",
        replacements: vec![
            ("EXPRESSION", variation.expression.to_string()),
            ("INITIAL_VALUES", variation.initial_values.to_string()),
            ("EVALUATION_STEPS", variation.evaluation_steps.to_string()),
            ("CONCEPTS", variation.concepts.to_string()),
            ("FOCUS_POINT", variation.focus_point.to_string()),
            ("HINT_TEXT", variation.hint_text.to_string()),
            ("EXTRA_TASK", variation.extra_task.to_string()),
        ],
    }
}

/// A generated arithmetic expression and its evaluation steps.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericExpression {
    pub expression: String,
    pub steps: String,
}

impl NumericExpression {
    fn new(expression: String, steps: String) -> Self {
        Self { expression, steps }
    }
}

/// Generate a random expression of complexity 1 (integer precedence),
/// 2 (integer division and remainder), or 3 (mixed int/double).
pub fn numeric_expression<R: Rng + ?Sized>(rng: &mut R, complexity: u8) -> NumericExpression {
    match complexity {
        1 => {
            let a: i64 = rng.random_range(5..=20);
            let b: i64 = rng.random_range(2..=10);
            let c: i64 = rng.random_range(2..=8);
            let options = vec![
                NumericExpression::new(
                    format!("{} + {} * {}", a, b, c),
                    format!("{} * {} = {}\n{} + {} = {}", b, c, b * c, a, b * c, a + b * c),
                ),
                NumericExpression::new(
                    format!("{} - {} / {}", a, b, c),
                    format!("{} / {} = {}\n{} - {} = {}", b, c, b / c, a, b / c, a - b / c),
                ),
                NumericExpression::new(
                    format!("{} * ({} + {})", a, b, c),
                    format!("{} + {} = {}\n{} * {} = {}", b, c, b + c, a, b + c, a * (b + c)),
                ),
            ];
            pick(rng, options)
        }
        2 => {
            let a: i64 = rng.random_range(10..=30);
            let b: i64 = rng.random_range(2..=6);
            let c: i64 = rng.random_range(3..=9);
            let neg_a = -a;
            let options = vec![
                NumericExpression::new(
                    format!("({} / {}) * {} + {} % {}", a, b, c, a, b),
                    format!(
                        "{a} / {b} = {q}\n{a} % {b} = {r}\n({q}) * {c} = {p}\n{p} + {r} = {s}",
                        a = a,
                        b = b,
                        c = c,
                        q = a / b,
                        r = a % b,
                        p = (a / b) * c,
                        s = (a / b) * c + a % b
                    ),
                ),
                NumericExpression::new(
                    format!("{} % {} + {} * ({} / {})", neg_a, b, c, a, b),
                    format!(
                        "{n} % {b} = {r}\n{a} / {b} = {q}\n{c} * {q} = {p}\n{r} + {p} = {s}",
                        n = neg_a,
                        a = a,
                        b = b,
                        c = c,
                        r = neg_a % b,
                        q = a / b,
                        p = c * (a / b),
                        s = neg_a % b + c * (a / b)
                    ),
                ),
                NumericExpression::new(
                    format!("({} + {}) / {} * ({} % {})", a, b, c, a, c),
                    format!(
                        "{a} + {b} = {sum}\n{a} % {c} = {r}\n({sum}) / {c} = {q}\n{q} * {r} = {p}",
                        a = a,
                        b = b,
                        c = c,
                        sum = a + b,
                        r = a % c,
                        q = (a + b) / c,
                        p = ((a + b) / c) * (a % c)
                    ),
                ),
            ];
            pick(rng, options)
        }
        _ => {
            let a: i64 = rng.random_range(5..=15);
            let b = round_tenths(rng.random_range(1.5..=4.5));
            let c: i64 = rng.random_range(2..=8);
            let d = round_tenths(rng.random_range(0.1..=0.9));
            let (af, cf) = (a as f64, c as f64);
            let options = vec![
                NumericExpression::new(
                    format!("{} / {:.1} + {} * {:.1}", a, b, c, d),
                    format!(
                        "{} / {:.1} = {:.2}\n{} * {:.1} = {:.2}\n{:.2} + {:.2} = {:.2}",
                        a,
                        b,
                        af / b,
                        c,
                        d,
                        cf * d,
                        af / b,
                        cf * d,
                        af / b + cf * d
                    ),
                ),
                NumericExpression::new(
                    format!("({} + {}) / {:.1} - {:.1} * {}", a, c, b, d, c),
                    format!(
                        "{} + {} = {}\n{:.1} * {} = {:.2}\n({}) / {:.1} = {:.2}\n{:.2} - {:.2} = {:.2}",
                        a,
                        c,
                        a + c,
                        d,
                        c,
                        d * cf,
                        a + c,
                        b,
                        (af + cf) / b,
                        (af + cf) / b,
                        d * cf,
                        (af + cf) / b - d * cf
                    ),
                ),
                NumericExpression::new(
                    format!("{} * {:.1} / ({:.1} + {})", a, d, b, c),
                    format!(
                        "{} * {:.1} = {:.2}\n{:.1} + {} = {:.2}\n{:.2} / {:.2} = {:.2}",
                        a,
                        d,
                        af * d,
                        b,
                        c,
                        b + cf,
                        af * d,
                        b + cf,
                        (af * d) / (b + cf)
                    ),
                ),
            ];
            pick(rng, options)
        }
    }
}

fn round_tenths(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

struct NumericLevel {
    complexity: u8,
    data_types: &'static str,
    concepts: &'static str,
    focus_point: &'static str,
    hint_text: &'static str,
    extra_task: &'static str,
}

const NUMERIC_LEVELS: [NumericLevel; 3] = [
    NumericLevel {
        complexity: 1,
        data_types: "All integers",
        concepts: "operator precedence with arithmetic operators",
        focus_point: "multiplication and division before addition and subtraction",
        hint_text: "Remember PEMDAS (Parentheses, Exponents, Multiplication/Division, Addition/Subtraction)",
        extra_task: "How would adding parentheses around the first two numbers change the result?",
    },
    NumericLevel {
        complexity: 2,
        data_types: "All integers",
        concepts: "integer division truncation and modulo operator",
        focus_point: "how integer division discards the remainder",
        hint_text: "Remember that integer division truncates the decimal part",
        extra_task: "What would be different if these were floating-point numbers?",
    },
    NumericLevel {
        complexity: 3,
        data_types: "Mixed integers and doubles",
        concepts: "type conversion in mixed arithmetic",
        focus_point: "how mixing integers and doubles affects the result type",
        hint_text: "When mixing integers and doubles, the result is always a double",
        extra_task: "What would happen if you changed all numbers to integers?",
    },
];

/// Evaluate a randomized arithmetic expression step by step.
pub fn numeric_expression_question<R: Rng + ?Sized>(rng: &mut R) -> QuestionDraft {
    let level = &NUMERIC_LEVELS[rng.random_range(0..NUMERIC_LEVELS.len())];
    let generated = numeric_expression(rng, level.complexity);

    let frontmatter = QuestionFrontmatter::new(
        random_id("num_expr", rng),
        QuestionMetadata::new(
            "expressions",
            BloomLevel::Analyze,
            level.complexity,
            &["arithmetic", "operators", "precedence"],
        ),
    );

    QuestionDraft {
        frontmatter,
        template: "numeric_expression.md",
        replacements: vec![
            ("EXPRESSION", generated.expression),
            ("EVALUATION_STEPS", generated.steps),
            ("DATA_TYPES", level.data_types.to_string()),
            ("CONCEPTS", level.concepts.to_string()),
            ("FOCUS_POINT", level.focus_point.to_string()),
            ("HINT_TEXT", level.hint_text.to_string()),
            ("EXTRA_TASK", level.extra_task.to_string()),
        ],
    }
}

struct MixedVariation {
    expression: &'static str,
    variable_definitions: &'static str,
    initial_values: &'static str,
    evaluation_steps: &'static str,
    concepts: &'static str,
    focus_points: &'static str,
    hint_text: &'static str,
    extra_task: &'static str,
    difficulty: u8,
}

const MIXED_VARIATIONS: [MixedVariation; 2] = [
    MixedVariation {
        expression: "(x + 5 > y * 2) && (z % 2 == 0)",
        variable_definitions: "x: int\ny: int\nz: int",
        initial_values: "x = 10\ny = 3\nz = 4",
        evaluation_steps: "1. x + 5 = 15\n2. y * 2 = 6\n3. 15 > 6 = true\n4. z % 2 = 0\n5. 0 == 0 = true\n6. true && true = true",
        concepts: "mixing arithmetic and boolean operations",
        focus_points: "arithmetic before comparison, comparison before boolean operations",
        hint_text: "Evaluate arithmetic first, then comparisons, then boolean operations",
        extra_task: "What values of x, y, and z would make this expression false?",
        difficulty: 2,
    },
    MixedVariation {
        expression: "Math.Abs((0.1 + 0.2) - 0.3) < 0.0001",
        variable_definitions: "All floating-point operations",
        initial_values: "Using floating-point literals",
        evaluation_steps: "1. 0.1 + 0.2 ≈ 0.30000000000000004\n2. 0.30000000000000004 - 0.3 ≈ 0.00000000000000004\n3. Math.Abs(0.00000000000000004) < 0.0001 = true",
        concepts: "floating-point precision and comparison",
        focus_points: "why direct equality comparison with floating-point numbers is problematic",
        hint_text: "Floating-point arithmetic isn't always exact",
        extra_task: "Why is using Math.Abs and a small epsilon better than direct equality comparison?",
        difficulty: 3,
    },
];

/// Evaluate an expression mixing arithmetic, comparison, and logic.
pub fn mixed_expression_question<R: Rng + ?Sized>(rng: &mut R) -> QuestionDraft {
    let variation = &MIXED_VARIATIONS[rng.random_range(0..MIXED_VARIATIONS.len())];

    let frontmatter = QuestionFrontmatter::new(
        random_id("mixed_expr", rng),
        QuestionMetadata::new(
            "expressions",
            BloomLevel::Analyze,
            variation.difficulty,
            &["mixed", "operators", "precedence", "comparison"],
        ),
    );

    QuestionDraft {
        frontmatter,
        template: "mixed_expression.md",
        replacements: vec![
            ("EXPRESSION", variation.expression.to_string()),
            ("VARIABLE_DEFINITIONS", variation.variable_definitions.to_string()),
            ("INITIAL_VALUES", variation.initial_values.to_string()),
            ("EVALUATION_STEPS", variation.evaluation_steps.to_string()),
            ("CONCEPTS", variation.concepts.to_string()),
            ("FOCUS_POINTS", variation.focus_points.to_string()),
            ("HINT_TEXT", variation.hint_text.to_string()),
            ("EXTRA_TASK", variation.extra_task.to_string()),
        ],
    }
}
