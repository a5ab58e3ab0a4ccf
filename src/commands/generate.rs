//! Implementation of the `quizgen generate` command.

use super::{make_rng, print_paths, resolve_path};
use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::generators::{Generator, QuestionKind};
use crate::template::TemplateStore;
use std::path::PathBuf;
use tracing::info;

/// Execute the `quizgen generate` command.
///
/// Generates `count` batches of the requested kinds (every kind when none
/// are given) and prints each written path.
pub fn cmd_generate(config: &Config, args: GenerateArgs) -> Result<Vec<PathBuf>> {
    let templates = TemplateStore::new(resolve_path(args.templates_dir, &config.templates_dir));
    let generator = Generator::new(templates, resolve_path(args.output_dir, &config.output_dir));
    let mut rng = make_rng(args.seed);

    let kinds: &[QuestionKind] = if args.kinds.is_empty() {
        QuestionKind::all()
    } else {
        &args.kinds
    };

    let mut written = Vec::with_capacity(kinds.len() * args.count as usize);
    for _ in 0..args.count {
        for &kind in kinds {
            written.push(generator.generate(kind, &mut rng)?);
        }
    }

    info!(
        count = written.len(),
        dir = %generator.output_dir().display(),
        "generated questions"
    );
    print_paths(&written);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::shipped_templates_dir;
    use crate::error::QuizError;
    use crate::question::QuestionFile;
    use tempfile::TempDir;

    fn args(kinds: Vec<QuestionKind>, count: u32, out: &std::path::Path) -> GenerateArgs {
        GenerateArgs {
            kinds,
            count,
            output_dir: Some(out.to_path_buf()),
            templates_dir: Some(shipped_templates_dir()),
            seed: Some(31),
        }
    }

    #[test]
    fn test_generate_all_kinds_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let written = cmd_generate(&Config::default(), args(vec![], 1, temp_dir.path())).unwrap();

        assert_eq!(written.len(), QuestionKind::all().len());
        for (path, kind) in written.iter().zip(QuestionKind::all()) {
            let question = QuestionFile::load(path).unwrap();
            assert!(question.frontmatter.id.starts_with(kind.id_prefix()));
        }
    }

    #[test]
    fn test_generate_selected_kinds_repeated() {
        let temp_dir = TempDir::new().unwrap();
        let written = cmd_generate(
            &Config::default(),
            args(vec![QuestionKind::TruthTable], 3, temp_dir.path()),
        )
        .unwrap();

        assert_eq!(written.len(), 3);
        assert!(written.iter().all(|p| {
            p.file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("truth_table_")
        }));
    }

    #[test]
    fn test_generate_uses_configured_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            output_dir: temp_dir.path().join("from_config").display().to_string(),
            templates_dir: shipped_templates_dir().display().to_string(),
            ..Config::default()
        };
        let args = GenerateArgs {
            kinds: vec![QuestionKind::Loop],
            count: 1,
            output_dir: None,
            templates_dir: None,
            seed: Some(1),
        };

        let written = cmd_generate(&config, args).unwrap();
        assert!(written[0].starts_with(temp_dir.path().join("from_config")));
    }

    #[test]
    fn test_generate_missing_templates() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = args(vec![QuestionKind::Loop], 1, temp_dir.path());
        args.templates_dir = Some(temp_dir.path().join("no_templates"));

        let err = cmd_generate(&Config::default(), args).unwrap_err();
        assert!(matches!(err, QuizError::TemplateError(_)));
    }
}
