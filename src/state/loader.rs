//! State file loading.
//!
//! This module reads infrastructure state from YAML or JSON files and
//! decodes it into [`InfraState`] values for the diff engine.

use std::path::Path;
use tracing::{debug, info};

use crate::error::{Result, StateError};

use super::types::{InfraState, STATE_VERSION};

/// Loader for infrastructure state files.
#[derive(Debug, Default)]
pub struct StateLoader;

impl StateLoader {
    /// Creates a new state loader.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Loads state from a file, selecting the format by extension.
    ///
    /// Files ending in `.json` are parsed as JSON; everything else is
    /// parsed as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or carries an
    /// unsupported state version.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<InfraState> {
        let path = path.as_ref();
        info!("Loading state from: {}", path.display());

        if !path.exists() {
            return Err(StateError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| StateError::parse(format!("Failed to read file: {e}"), path.display().to_string()))?;

        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let state = if is_json {
            self.parse_json(&content, Some(path))?
        } else {
            self.parse_yaml(&content, Some(path))?
        };

        Self::check_version(&state)?;
        Ok(state)
    }

    /// Parses state from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn parse_yaml(&self, content: &str, source: Option<&Path>) -> Result<InfraState> {
        debug!("Parsing YAML state");

        let state: InfraState = serde_yaml::from_str(content).map_err(|e| {
            let location = source.map(|p| p.display().to_string());
            StateError::ParseError {
                message: format!("YAML parse error: {e}"),
                location,
            }
        })?;

        debug!("Parsed state for project: {}", state.project);
        Ok(state)
    }

    /// Parses state from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn parse_json(&self, content: &str, source: Option<&Path>) -> Result<InfraState> {
        debug!("Parsing JSON state");

        let state: InfraState = serde_json::from_str(content).map_err(|e| {
            let location = source.map(|p| p.display().to_string());
            StateError::ParseError {
                message: format!("JSON parse error: {e}"),
                location,
            }
        })?;

        debug!("Parsed state for project: {}", state.project);
        Ok(state)
    }

    /// Checks that the state format version is supported.
    fn check_version(state: &InfraState) -> Result<()> {
        if state.version == STATE_VERSION {
            Ok(())
        } else {
            Err(StateError::VersionMismatch {
                expected: STATE_VERSION.to_string(),
                found: state.version.clone(),
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InfraDiffError;
    use std::io::Write;

    const SAMPLE_YAML: &str = "\
version: \"1.0\"
project: analytics
resources:
  - kind: dynamo_table
    project: analytics
    name: orders_table
    region: us-east
    ttl: 3600
";

    #[test]
    fn test_parse_yaml_state() {
        let loader = StateLoader::new();
        let state = loader.parse_yaml(SAMPLE_YAML, None).unwrap();

        assert_eq!(state.project, "analytics");
        assert_eq!(state.len(), 1);
        assert_eq!(state.resources[0].name(), "orders_table");
    }

    #[test]
    fn test_load_file_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("current.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SAMPLE_YAML.as_bytes()).unwrap();

        let loader = StateLoader::new();
        let state = loader.load_file(&path).unwrap();

        assert_eq!(state.project, "analytics");
    }

    #[test]
    fn test_load_missing_file() {
        let loader = StateLoader::new();
        let result = loader.load_file("/nonexistent/state.yaml");

        assert!(matches!(
            result,
            Err(InfraDiffError::State(StateError::FileNotFound { .. }))
        ));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let loader = StateLoader::new();
        let result = loader.parse_yaml("version: [unclosed", None);

        assert!(matches!(
            result,
            Err(InfraDiffError::State(StateError::ParseError { .. }))
        ));
    }

    #[test]
    fn test_version_mismatch_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.yaml");
        std::fs::write(&path, "version: \"0.9\"\nproject: analytics\n").unwrap();

        let loader = StateLoader::new();
        let result = loader.load_file(&path);

        assert!(matches!(
            result,
            Err(InfraDiffError::State(StateError::VersionMismatch { .. }))
        ));
    }
}
