//! Variable questions: assignment vs. equality, scope, and state tracking.

use super::QuestionDraft;
use crate::naming::random_id;
use crate::question::{BloomLevel, QuestionFrontmatter, QuestionMetadata};
use rand::Rng;

/// Prose attached to one difficulty level of a variable question.
struct Guidance {
    concepts: &'static str,
    focus_point: &'static str,
    hint_text: &'static str,
    extra_task: &'static str,
}

/// One markdown state-table row; `None` marks a variable not yet declared.
fn state_row(line: u32, values: &[Option<i64>]) -> String {
    let mut row = format!("| {} |", line);
    for value in values {
        match value {
            Some(v) => row.push_str(&format!(" {} |", v)),
            None => row.push_str(" - |"),
        }
    }
    row
}

fn state_separator(columns: usize) -> String {
    let mut sep = String::from("|--------|");
    for _ in 0..columns {
        sep.push_str("---|");
    }
    sep
}

fn guidance_replacements(guidance: &Guidance) -> [(&'static str, String); 4] {
    [
        ("CONCEPTS", guidance.concepts.to_string()),
        ("FOCUS_POINT", guidance.focus_point.to_string()),
        ("HINT_TEXT", guidance.hint_text.to_string()),
        ("EXTRA_TASK", guidance.extra_task.to_string()),
    ]
}

fn variables_frontmatter<R: Rng + ?Sized>(
    rng: &mut R,
    prefix: &str,
    difficulty: u8,
    tags: &[&str],
) -> QuestionFrontmatter {
    QuestionFrontmatter::new(
        random_id(prefix, rng),
        QuestionMetadata::new("variables", BloomLevel::Analyze, difficulty, tags),
    )
}

const ASSIGNMENT_GUIDANCE: [(&str, Guidance); 3] = [
    (
        "This code is attempting to compare two numbers",
        Guidance {
            concepts: "the difference between assignment (=) and equality comparison (==)",
            focus_point: "using = in an if condition performs assignment, not comparison",
            hint_text: "The = operator always performs assignment and returns the assigned value",
            extra_task: "What would happen if you changed the = to == in the if condition?",
        },
    ),
    (
        "This code is trying to implement a counting loop",
        Guidance {
            concepts: "assignment operators in loop conditions",
            focus_point: "assignment in a while condition creates an infinite loop if the assigned value is non-zero",
            hint_text: "Think about what value is being assigned and returned in the while condition",
            extra_task: "How many times will this loop execute? Why?",
        },
    ),
    (
        "This code is checking for equality between three variables",
        Guidance {
            concepts: "nested conditions with assignments",
            focus_point: "how assignments cascade through nested conditions",
            hint_text: "Track how each assignment changes the values of x, y, and z",
            extra_task: "Rewrite this code to correctly check for equality between all three variables",
        },
    ),
];

/// Spot `=` written where `==` was meant.
pub fn assignment_question<R: Rng + ?Sized>(rng: &mut R) -> QuestionDraft {
    let difficulty: u8 = rng.random_range(1..=3);

    let (code, initial_values, state_table) = match difficulty {
        1 => {
            let x: i64 = rng.random_range(5..=15);
            let y: i64 = rng.random_range(1..=10);
            (
                format!(
                    "int x = {x};\nint y = {y};\nif (x = y)\n{{\n    Console.WriteLine($\"x is {y}\");\n}}\nConsole.WriteLine($\"x is now {{x}}\");"
                ),
                format!("x: {}, y: {}", x, y),
                [
                    "| Line # | x | y |".to_string(),
                    state_separator(2),
                    state_row(1, &[Some(x), None]),
                    state_row(2, &[Some(x), Some(y)]),
                    state_row(3, &[Some(y), Some(y)]),
                    state_row(6, &[Some(y), Some(y)]),
                ]
                .join("\n"),
            )
        }
        2 => {
            let a: i64 = rng.random_range(1..=10);
            let b: i64 = rng.random_range(11..=20);
            (
                format!(
                    "int a = {a};\nint b = {b};\nwhile (a = b)\n{{\n    Console.WriteLine(a);\n    b--;\n}}"
                ),
                format!("a: {}, b: {}", a, b),
                // Left for the student to fill in.
                ["| Line # | a | b |".to_string(), state_separator(2)].join("\n"),
            )
        }
        _ => {
            let x: i64 = rng.random_range(1..=5);
            let y: i64 = rng.random_range(6..=10);
            let z: i64 = rng.random_range(11..=15);
            (
                format!(
                    "int x = {x};\nint y = {y};\nint z = {z};\nif (x = y)\n{{\n    if (y = z)\n    {{\n        Console.WriteLine(\"All equal\");\n    }}\n}}\nConsole.WriteLine($\"x={{x}}, y={{y}}, z={{z}}\");"
                ),
                format!("x: {}, y: {}, z: {}", x, y, z),
                [
                    "| Line # | x | y | z |".to_string(),
                    state_separator(3),
                    state_row(1, &[Some(x), None, None]),
                    state_row(2, &[Some(x), Some(y), None]),
                    state_row(3, &[Some(x), Some(y), Some(z)]),
                ]
                .join("\n"),
            )
        }
    };

    let (context, guidance) = &ASSIGNMENT_GUIDANCE[usize::from(difficulty - 1)];
    let frontmatter = variables_frontmatter(
        rng,
        "var_assign",
        difficulty,
        &["variables", "assignment", "equality", "operators"],
    );

    let mut replacements = vec![
        ("CODE_SNIPPET", code),
        ("INITIAL_VALUES", initial_values),
        ("STATE_TABLE", state_table),
        ("CONTEXT", context.to_string()),
    ];
    replacements.extend(guidance_replacements(guidance));

    QuestionDraft {
        frontmatter,
        template: "variable_assignment_equality.md",
        replacements,
    }
}

const SCOPE_GUIDANCE: [Guidance; 3] = [
    Guidance {
        concepts: "basic variable scope and block visibility",
        focus_point: "variables declared inside a block are only accessible within that block",
        hint_text: "Pay attention to the curly braces - they define the boundaries of variable scope",
        extra_task: "What would happen if you tried to access y after the closing brace?",
    },
    Guidance {
        concepts: "variable shadowing and name resolution",
        focus_point: "inner variables with the same name hide (shadow) outer variables",
        hint_text: "When two variables have the same name, the innermost one is used",
        extra_task: "How could you access the outer x value inside the block?",
    },
    Guidance {
        concepts: "nested scopes and multiple variable shadowing",
        focus_point: "how variable shadowing works across multiple nested scopes",
        hint_text: "Track each variable's visibility level by level",
        extra_task: "Add code to access each version of variable 'a' where possible",
    },
];

/// Trace which declaration each name refers to across nested blocks.
pub fn scope_question<R: Rng + ?Sized>(rng: &mut R) -> QuestionDraft {
    let difficulty: u8 = rng.random_range(1..=3);

    let (code, analysis, trace) = match difficulty {
        1 => {
            let x: i64 = rng.random_range(5..=15);
            let y: i64 = rng.random_range(1..=10);
            (
                format!(
                    "int x = {x};\n{{\n    int y = {y};\n    Console.WriteLine($\"Inside: x={{x}}, y={{y}}\");\n}}\nConsole.WriteLine($\"Outside: x={{x}}\");"
                ),
                "Variable x:\n- Scope: Lines 1-6\n- Accessible: Throughout entire code\n- No shadowing\n\n\
                 Variable y:\n- Scope: Lines 3-4\n- Accessible: Only inside the block\n- No shadowing"
                    .to_string(),
                format!(
                    "Line 1: x = {x}\nLine 3: y = {y}\nLine 4: prints \"Inside: x={x}, y={y}\"\nLine 6: prints \"Outside: x={x}\""
                ),
            )
        }
        2 => {
            let x: i64 = rng.random_range(5..=15);
            let inner_x: i64 = rng.random_range(20..=30);
            (
                format!(
                    "int x = {x};\n{{\n    int x = {inner_x};\n    Console.WriteLine($\"Inside: x={{x}}\");\n}}\nConsole.WriteLine($\"Outside: x={{x}}\");"
                ),
                "Variable x (outer):\n- Scope: Lines 1-6\n- Accessible: Lines 1-2 and 5-6\n- Shadowed in lines 3-4\n\n\
                 Variable x (inner):\n- Scope: Lines 3-4\n- Shadows outer x\n- Only accessible inside the block"
                    .to_string(),
                format!(
                    "Line 1: outer x = {x}\nLine 3: inner x = {inner_x} (shadows outer x)\nLine 4: prints \"Inside: x={inner_x}\"\nLine 6: prints \"Outside: x={x}\""
                ),
            )
        }
        _ => {
            let a: i64 = rng.random_range(1..=5);
            let b: i64 = rng.random_range(6..=10);
            let c: i64 = rng.random_range(11..=15);
            (
                format!(
                    "int a = {a};\n{{\n    int b = {b};\n    {{\n        int a = {c};\n        Console.WriteLine($\"Inner: a={{a}}, b={{b}}\");\n    }}\n    Console.WriteLine($\"Middle: a={{a}}, b={{b}}\");\n}}\nConsole.WriteLine($\"Outer: a={{a}}\");"
                ),
                "Variable a (outer):\n- Scope: Lines 1-10\n- Shadowed in lines 5-7\n\n\
                 Variable b:\n- Scope: Lines 3-9\n- Accessible in all inner blocks\n\n\
                 Variable a (inner):\n- Scope: Lines 5-7\n- Shadows outer a"
                    .to_string(),
                format!(
                    "Line 1: outer a = {a}\nLine 3: b = {b}\nLine 5: inner a = {c}\nLine 6: prints \"Inner: a={c}, b={b}\"\nLine 8: prints \"Middle: a={a}, b={b}\"\nLine 10: prints \"Outer: a={a}\""
                ),
            )
        }
    };

    let frontmatter = variables_frontmatter(
        rng,
        "var_scope",
        difficulty,
        &["variables", "scope", "shadowing", "lifetime"],
    );

    let mut replacements = vec![
        ("CODE_SNIPPET", code),
        ("SCOPE_ANALYSIS", analysis),
        ("EXECUTION_TRACE", trace),
    ];
    replacements.extend(guidance_replacements(
        &SCOPE_GUIDANCE[usize::from(difficulty - 1)],
    ));

    QuestionDraft {
        frontmatter,
        template: "variable_scope.md",
        replacements,
    }
}

const STATE_GUIDANCE: [Guidance; 3] = [
    Guidance {
        concepts: "basic variable state changes and dependencies",
        focus_point: "how each assignment affects variable values",
        hint_text: "Track each variable's value line by line",
        extra_task: "What would happen if you swapped lines 4 and 5?",
    },
    Guidance {
        concepts: "conditional execution and state changes",
        focus_point: "how conditions affect which state changes occur",
        hint_text: "First determine which branch executes, then track changes",
        extra_task: "What would be the final values if the initial values were swapped?",
    },
    Guidance {
        concepts: "complex variable dependencies and state tracking",
        focus_point: "how changes to one variable affect subsequent operations",
        hint_text: "Pay attention to the order of assignments and how each value depends on previous values",
        extra_task: "Explain why the final values grow so large",
    },
];

fn final_state(names: &[&str], values: &[i64], causes: [&str; 3]) -> String {
    let mut out = String::from("Final values:");
    for (name, value) in names.iter().zip(values) {
        out.push_str(&format!("\n{} = {}", name, value));
    }
    out.push_str("\n\nChanges occurred due to:");
    for (i, cause) in causes.iter().enumerate() {
        out.push_str(&format!("\n{}. {}", i + 1, cause));
    }
    out
}

/// Track every variable's value after each executed line.
pub fn state_question<R: Rng + ?Sized>(rng: &mut R) -> QuestionDraft {
    let difficulty: u8 = rng.random_range(1..=3);

    let (code, headers, rows, analysis) = match difficulty {
        1 => {
            let x: i64 = rng.random_range(5..=15);
            let y: i64 = rng.random_range(1..=10);
            let z = x + y;
            let x2 = z - y;
            let y2 = x2 - z;
            (
                format!("int x = {x};\nint y = {y};\nint z = x + y;\nx = z - y;\ny = x - z;"),
                "x | y | z",
                vec![
                    state_row(1, &[Some(x), None, None]),
                    state_row(2, &[Some(x), Some(y), None]),
                    state_row(3, &[Some(x), Some(y), Some(z)]),
                    state_row(4, &[Some(x2), Some(y), Some(z)]),
                    state_row(5, &[Some(x2), Some(y2), Some(z)]),
                ],
                final_state(
                    &["x", "y", "z"],
                    &[x2, y2, z],
                    [
                        "Initial assignments",
                        "Addition operation",
                        "Subtraction and reassignment",
                    ],
                ),
            )
        }
        2 => {
            let a: i64 = rng.random_range(1..=10);
            let b: i64 = rng.random_range(5..=15);
            let code = format!(
                "int a = {a};\nint b = {b};\nif (a < b)\n{{\n    a = b;\n    b = a / 2;\n}}\nelse\n{{\n    b = a;\n    a = b * 2;\n}}"
            );
            let mut rows = vec![
                state_row(1, &[Some(a), None]),
                state_row(2, &[Some(a), Some(b)]),
            ];
            let (final_a, final_b) = if a < b {
                rows.push(state_row(5, &[Some(b), Some(b)]));
                rows.push(state_row(6, &[Some(b), Some(b / 2)]));
                (b, b / 2)
            } else {
                rows.push(state_row(10, &[Some(a), Some(a)]));
                rows.push(state_row(11, &[Some(a * 2), Some(a)]));
                (a * 2, a)
            };
            let branch = if a < b { "if" } else { "else" };
            (
                code,
                "a | b",
                rows,
                final_state(
                    &["a", "b"],
                    &[final_a, final_b],
                    [
                        "Initial assignments",
                        "Conditional execution (a < b)",
                        &format!("Sequential assignments in {} block", branch),
                    ],
                ),
            )
        }
        _ => {
            let x: i64 = rng.random_range(2..=5);
            let y: i64 = rng.random_range(3..=7);
            let z: i64 = rng.random_range(4..=8);
            let x2 = y * z;
            let y2 = z * x2;
            let z2 = x2 * y2;
            (
                format!("int x = {x};\nint y = {y};\nint z = {z};\nx = y * z;\ny = z * x;\nz = x * y;"),
                "x | y | z",
                vec![
                    state_row(1, &[Some(x), None, None]),
                    state_row(2, &[Some(x), Some(y), None]),
                    state_row(3, &[Some(x), Some(y), Some(z)]),
                    state_row(4, &[Some(x2), Some(y), Some(z)]),
                    state_row(5, &[Some(x2), Some(y2), Some(z)]),
                    state_row(6, &[Some(x2), Some(y2), Some(z2)]),
                ],
                final_state(
                    &["x", "y", "z"],
                    &[x2, y2, z2],
                    [
                        "Initial assignments",
                        "Multiplication and dependencies",
                        "Order of operations affecting final values",
                    ],
                ),
            )
        }
    };

    let columns = headers.split(" | ").count();
    let mut table_rows = vec![state_separator(columns)];
    table_rows.extend(rows);

    let frontmatter = variables_frontmatter(
        rng,
        "var_state",
        difficulty,
        &["variables", "state", "tracking", "assignment"],
    );

    let mut replacements = vec![
        ("CODE_SNIPPET", code),
        ("VARIABLE_HEADERS", headers.to_string()),
        ("STATE_TABLE_ROWS", table_rows.join("\n")),
        ("FINAL_STATE_ANALYSIS", analysis),
    ];
    replacements.extend(guidance_replacements(
        &STATE_GUIDANCE[usize::from(difficulty - 1)],
    ));

    QuestionDraft {
        frontmatter,
        template: "variable_state.md",
        replacements,
    }
}
