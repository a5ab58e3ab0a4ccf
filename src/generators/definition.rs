//! Knowledge questions built from extracted textbook definitions.

use super::QuestionDraft;
use crate::extract::Definition;
use crate::naming::definition_id;
use crate::question::{BloomLevel, QuestionFrontmatter, QuestionMetadata};

/// Build a recall question for one definition.
pub fn definition_question(definition: &Definition) -> QuestionDraft {
    let lower = definition.title.to_lowercase();

    let mut frontmatter = QuestionFrontmatter::new(
        definition_id(&definition.title),
        QuestionMetadata::new(
            "definitions",
            BloomLevel::Knowledge,
            1,
            &["definitions", "concepts", "terminology"],
        ),
    );
    frontmatter.title = Some(definition.title.clone());

    QuestionDraft {
        frontmatter,
        template: "knowledge_definition.md",
        replacements: vec![
            ("CONCEPT_TITLE", definition.title.clone()),
            ("CONCEPT_DEFINITION", definition.body.clone()),
            (
                "EXAMPLE_USAGE",
                format!(
                    "Provide an example where understanding {} is crucial in programming.",
                    lower
                ),
            ),
            (
                "RELATED_CONCEPTS",
                "List related programming concepts and explain their relationships.".to_string(),
            ),
            (
                "COMMON_MISCONCEPTIONS",
                format!("What are common misconceptions about {}?", lower),
            ),
            (
                "PRACTICAL_IMPLICATIONS",
                format!("How does {} affect program behavior and design?", lower),
            ),
        ],
    }
}
