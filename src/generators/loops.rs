//! Loop questions: tracing a simple loop and spotting off-by-one errors.

use super::{QuestionDraft, pick};
use crate::naming::random_id;
use crate::question::{BloomLevel, QuestionFrontmatter, QuestionMetadata};
use rand::Rng;

const ARRAY_NAMES: [&str; 4] = ["numbers", "values", "data", "items"];

/// An "apply" question asking what a counted `for` loop does.
pub fn loop_question<R: Rng + ?Sized>(rng: &mut R) -> QuestionDraft {
    let start: u32 = rng.random_range(1..=5);
    let end: u32 = rng.random_range(6..=15);
    let id = random_id("gen_loop", rng);

    let code_snippet = format!(
        "```csharp\nfor(int i = {}; i < {}; i++) {{ /* ... */ }}\n```",
        start, end
    );
    let question_text = format!(
        "Explain what this loop does for i = {} to {}.",
        start,
        end - 1
    );

    let mut frontmatter = QuestionFrontmatter::new(
        id,
        QuestionMetadata::new("loops", BloomLevel::Apply, 2, &["loops", "iteration"]),
    );
    frontmatter.question_text = Some(question_text.clone());
    frontmatter.code_snippet = Some(code_snippet.clone());

    QuestionDraft {
        frontmatter,
        template: "apply_code.md",
        replacements: vec![
            ("CODE_SNIPPET", code_snippet),
            ("QUESTION_TEXT", question_text),
        ],
    }
}

struct OffByOneVariation {
    loop_code: String,
    intention: String,
    hint_focus: &'static str,
    difficulty: u8,
}

/// An "analyze" question showing a loop whose bounds miss the stated intent.
pub fn off_by_one_question<R: Rng + ?Sized>(rng: &mut R) -> QuestionDraft {
    let start: u32 = rng.random_range(1..=5);
    let end: u32 = rng.random_range(start + 3..=start + 8);
    let size: u32 = rng.random_range(5..=10);
    let process_array = pick(rng, ARRAY_NAMES.to_vec());
    let print_array = pick(rng, ARRAY_NAMES.to_vec());

    let variations = vec![
        OffByOneVariation {
            loop_code: format!(
                "for(int i = {}; i < {}; i++) {{ Console.WriteLine(i); }}",
                start, end
            ),
            intention: format!("print the numbers {} through {}", start, end),
            hint_focus: "termination",
            difficulty: 2,
        },
        OffByOneVariation {
            loop_code: format!(
                "for(int i = 0; i <= {}; i++) {{ Console.WriteLine(i); }}",
                end
            ),
            intention: format!("print the numbers 1 through {}", end),
            hint_focus: "starting",
            difficulty: 2,
        },
        OffByOneVariation {
            loop_code: format!(
                "for(int i = 1; i <= {}; i++) {{ {}[i] = i * 2; }}",
                size, process_array
            ),
            intention: format!(
                "fill an array of size {} with even numbers (2, 4, 6, etc.)",
                size
            ),
            hint_focus: "array indexing",
            difficulty: 3,
        },
        OffByOneVariation {
            loop_code: format!(
                "for(int i = 0; i < {0}.Length - 1; i++) {{ Console.WriteLine({0}[i]); }}",
                print_array
            ),
            intention: "print all elements in the array".to_string(),
            hint_focus: "array length calculation",
            difficulty: 3,
        },
        OffByOneVariation {
            loop_code: "for(int i = 0; i < (size + 1) / 2; i++) { Process(i); }".to_string(),
            intention: "process half of the elements (rounded up)".to_string(),
            hint_focus: "division expression",
            difficulty: 4,
        },
        OffByOneVariation {
            loop_code: "while(start + offset < end - 1) { Process(start + offset++); }"
                .to_string(),
            intention: "process all values between start and end".to_string(),
            hint_focus: "compound condition",
            difficulty: 4,
        },
    ];
    let variation = pick(rng, variations);

    let frontmatter = QuestionFrontmatter::new(
        random_id("off_by_one", rng),
        QuestionMetadata::new(
            "loops",
            BloomLevel::Analyze,
            variation.difficulty,
            &["loops", "off-by-one", "debugging"],
        ),
    );

    QuestionDraft {
        frontmatter,
        template: "loop_off_by_one_concept.md",
        replacements: vec![
            ("LOOP_CODE", variation.loop_code),
            ("INTENTION", variation.intention),
            ("HINT_FOCUS", variation.hint_focus.to_string()),
        ],
    }
}
