use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const CONFIG_FILE_NAME: &str = "rostergen.toml";

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when loading or saving the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}': {1}")]
    ReadError(String, std::io::Error),

    #[error("Failed to parse config file '{0}': {1}")]
    ParseError(String, toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Failed to write config file: {0}")]
    WriteError(#[from] std::io::Error),
}

// =============================================================================
// Generator Configuration
// =============================================================================

/// Settings for the sample member generators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible output; random when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Number of transferred members to generate
    #[serde(default = "default_member_count")]
    pub transferred_count: usize,

    /// Number of prospective gains to generate
    #[serde(default = "default_member_count")]
    pub prospective_count: usize,
}

fn default_member_count() -> usize {
    7
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            transferred_count: default_member_count(),
            prospective_count: default_member_count(),
        }
    }
}

// =============================================================================
// Roster Configuration
// =============================================================================

/// Rostergen configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Raw roster text file
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// JSON output file
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Substring that marks the first line as a column header
    #[serde(default = "default_header_marker")]
    pub header_marker: String,

    /// Sample generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,
}

fn default_input() -> PathBuf {
    PathBuf::from("roster_raw.txt")
}

fn default_output() -> PathBuf {
    PathBuf::from("roster_data.json")
}

fn default_header_marker() -> String {
    "lname".to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            header_marker: default_header_marker(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl RosterConfig {
    /// Load config from `rostergen.toml` under `project_root`, or defaults if absent
    pub fn load(project_root: &Path) -> ConfigResult<Self> {
        let config_path = project_root.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    /// Load config from an explicit path; the file must exist
    pub fn load_from(config_path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(config_path)
            .map_err(|e| ConfigError::ReadError(config_path.display().to_string(), e))?;
        toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(config_path.display().to_string(), e))
    }

    /// Save config to `rostergen.toml` under `project_root`
    pub fn save(&self, project_root: &Path) -> ConfigResult<()> {
        std::fs::create_dir_all(project_root)?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(project_root.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = RosterConfig::load(temp_dir.path()).unwrap();

        assert_eq!(config, RosterConfig::default());
        assert_eq!(config.input, PathBuf::from("roster_raw.txt"));
        assert_eq!(config.output, PathBuf::from("roster_data.json"));
        assert_eq!(config.header_marker, "lname");
        assert_eq!(config.generator.transferred_count, 7);
        assert_eq!(config.generator.prospective_count, 7);
        assert_eq!(config.generator.seed, None);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "input = \"data/roster.txt\"\n\n[generator]\nseed = 42\n",
        )
        .unwrap();

        let config = RosterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.input, PathBuf::from("data/roster.txt"));
        assert_eq!(config.output, PathBuf::from("roster_data.json"));
        assert_eq!(config.generator.seed, Some(42));
        assert_eq!(config.generator.transferred_count, 7);
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = RosterConfig::default();
        config.header_marker = "LNAME".to_string();
        config.generator.prospective_count = 3;

        config.save(temp_dir.path()).unwrap();
        let loaded = RosterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_malformed_config_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "input = [unterminated").unwrap();

        let err = RosterConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_, _)));
    }

    #[test]
    fn test_load_from_missing_path_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = RosterConfig::load_from(&temp_dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_, _)));
    }
}
