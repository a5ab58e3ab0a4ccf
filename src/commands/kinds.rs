//! Implementation of the `quizgen kinds` command.

use crate::error::Result;
use crate::generators::QuestionKind;

/// Execute the `quizgen kinds` command.
///
/// Lists every generator kind with its id prefix, topic, bloom level and template.
pub fn cmd_kinds() -> Result<()> {
    println!(
        "{:<20} {:<12} {:<12} {:<8} {}",
        "KIND", "ID PREFIX", "TOPIC", "BLOOM", "TEMPLATE"
    );
    for &kind in QuestionKind::all() {
        println!(
            "{:<20} {:<12} {:<12} {:<8} {}",
            kind.name(),
            kind.id_prefix(),
            kind.topic(),
            kind.bloom_level().to_string(),
            kind.template()
        );
    }
    Ok(())
}
