//! Tests for config functionality.

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::question::BloomLevel;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.templates_dir, "templates");
    assert_eq!(config.output_dir, "questions");
    assert_eq!(config.textbook_dir, "textbook");
    assert_eq!(config.assignment_path, "assignment.md");
    assert_eq!(config.assignment.num_knowledge_questions, 1);
    assert_eq!(config.assignment.num_programmatic_questions, 1);
    assert_eq!(config.assignment.num_conceptual_questions, 0);
    assert!(config.assignment.topics.is_empty());
    assert!(config.assignment.bloom_levels.is_empty());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();

    // Should use all defaults
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
output_dir: out/questions
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.output_dir, "out/questions");
    assert_eq!(config.templates_dir, "templates");
    assert_eq!(config.assignment.num_programmatic_questions, 1);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
templates_dir: tpl
output_dir: q
textbook_dir: book
assignment_path: week1.md
assignment:
  num_knowledge_questions: 3
  num_programmatic_questions: 2
  num_conceptual_questions: 1
  topics:
    - definitions
    - variables
  bloom_levels:
    - knowledge
    - analyze
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.templates_dir, "tpl");
    assert_eq!(config.output_dir, "q");
    assert_eq!(config.textbook_dir, "book");
    assert_eq!(config.assignment_path, "week1.md");
    assert_eq!(config.assignment.num_knowledge_questions, 3);
    assert_eq!(config.assignment.num_programmatic_questions, 2);
    assert_eq!(config.assignment.num_conceptual_questions, 1);
    assert_eq!(config.assignment.topics, vec!["definitions", "variables"]);
    assert_eq!(
        config.assignment.bloom_levels,
        vec![BloomLevel::Knowledge, BloomLevel::Analyze]
    );
}

#[test]
fn test_partial_assignment_section_defaults_to_zero() {
    let yaml = r#"
assignment:
  num_conceptual_questions: 2
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.assignment.num_knowledge_questions, 0);
    assert_eq!(config.assignment.num_programmatic_questions, 0);
    assert_eq!(config.assignment.num_conceptual_questions, 2);
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
output_dir: q
future_option: true
assignment:
  shuffle: yes
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.output_dir, "q");
}

#[test]
fn test_validation_empty_path() {
    let result = Config::from_yaml("templates_dir: ''\n");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("templates_dir"));

    let result = Config::from_yaml("assignment_path: '  '\n");
    assert!(result.unwrap_err().to_string().contains("assignment_path"));
}

#[test]
fn test_validation_blank_topic() {
    let yaml = r#"
assignment:
  topics: ["loops", ""]
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("assignment.topics"));
}

#[test]
fn test_invalid_bloom_level_rejected() {
    let yaml = r#"
assignment:
  bloom_levels: [evaluate]
"#;
    assert!(Config::from_yaml(yaml).is_err());
}

#[test]
fn test_invalid_yaml() {
    let result = Config::from_yaml("output_dir: [unclosed");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("failed to parse"));
}

#[test]
fn test_roundtrip_yaml() {
    let original = Config::default();
    let parsed = Config::from_yaml(&serde_yaml::to_string(&original).unwrap()).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn test_discover_uses_file_in_dir() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "output_dir: found\n").unwrap();

    let config = Config::discover(None, temp_dir.path()).unwrap();
    assert_eq!(config.output_dir, "found");
}

#[test]
fn test_discover_defaults_without_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::discover(None, temp_dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_discover_explicit_path_must_exist() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("custom.yaml");

    let err = Config::discover(Some(&missing), temp_dir.path()).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}
