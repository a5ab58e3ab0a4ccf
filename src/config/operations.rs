//! Config loading, validation, and utility operations.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{QuizError, Result};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            QuizError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Otherwise `quizgen.yaml` in `dir` is used
    /// when present, and defaults when it is not.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "loading config");
            Self::load(&candidate)
        } else {
            debug!("no config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| QuizError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - every directory and path field is non-empty
    /// - `assignment.topics` entries are non-empty
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("templates_dir", &self.templates_dir),
            ("output_dir", &self.output_dir),
            ("textbook_dir", &self.textbook_dir),
            ("assignment_path", &self.assignment_path),
        ] {
            if value.trim().is_empty() {
                return Err(QuizError::UserError(format!(
                    "config validation failed: {} must not be empty",
                    name
                )));
            }
        }

        if self.assignment.topics.iter().any(|t| t.trim().is_empty()) {
            return Err(QuizError::UserError(
                "config validation failed: assignment.topics entries must be non-empty"
                    .to_string(),
            ));
        }

        Ok(())
    }
}
