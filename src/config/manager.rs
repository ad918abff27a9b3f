use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::chat::GREETING;
use crate::paths;
use crate::responses::{ResponseTable, ResponseTableError};

/// Settings in the `[devmate]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevmateConfig {
    /// Greeting seeded at the start of each chat session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
    /// Reply used when no keyword matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_response: Option<String>,
}

/// A user-defined keyword response (one `[[responses]]` entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomResponse {
    /// Trigger keyword, matched case-insensitively as a substring.
    pub keyword: String,
    /// Reply text.
    pub response: String,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/devmate/config.toml`:
///
/// ```toml
/// [devmate]
/// greeting = "Hi! What are we building today?"
///
/// [[responses]]
/// keyword = "rust"
/// response = "Rust is a great fit for systems work!"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub devmate: DevmateConfig,
    /// Custom responses in match order.
    #[serde(default)]
    pub responses: Vec<CustomResponse>,
}

impl ConfigFile {
    /// Builds the response table: built-ins first, then custom entries.
    pub fn response_table(&self) -> Result<ResponseTable, ResponseTableError> {
        ResponseTable::with_custom(&self.responses, self.devmate.default_response.as_deref())
    }

    /// Greeting to seed sessions with, falling back to [`GREETING`] when unset or blank.
    pub fn greeting(&self) -> &str {
        self.devmate
            .greeting
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .unwrap_or(GREETING)
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a config manager for the default location.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/devmate/config.toml`
    /// or `~/.config/devmate/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager for an explicit file path.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Uses `path` when given, otherwise the default location.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(Self::new, |p| Ok(Self::with_path(p)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    /// Loads the config, returning defaults when the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(ConfigFile::default());
        }
        self.load()
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        crate::fs::atomic_write(&self.config_path, &contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::responses::DEFAULT_RESPONSE;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager::with_path(temp_dir.path().join("config.toml"))
    }

    fn sample_config() -> ConfigFile {
        ConfigFile {
            devmate: DevmateConfig {
                greeting: Some("Hey!".to_string()),
                default_response: None,
            },
            responses: vec![
                CustomResponse {
                    keyword: "rust".to_string(),
                    response: "Rust is a great fit for systems work!".to_string(),
                },
                CustomResponse {
                    keyword: "go".to_string(),
                    response: "Go keeps services simple.".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = sample_config();
        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded, config);
        // Order survives the round trip.
        assert_eq!(loaded.responses[0].keyword, "rust");
        assert_eq!(loaded.responses[1].keyword, "go");
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("nested/dir/config.toml"));

        manager.save(&ConfigFile::default()).unwrap();
        assert!(manager.config_path().exists());
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        assert_eq!(manager.load_or_default().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_load_or_default_rejects_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[[responses]]\nkeyword = ").unwrap();

        let err = manager.load_or_default().unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_parse_config_from_toml() {
        let toml_str = r#"
[devmate]
default_response = "Try asking about Rust."

[[responses]]
keyword = "Rust"
response = "Rust is a great fit for systems work!"
"#;

        let config: ConfigFile = toml::from_str(toml_str).unwrap();
        assert_eq!(config.greeting(), GREETING);

        let table = config.response_table().unwrap();
        assert_eq!(table.select("rust?"), "Rust is a great fit for systems work!");
        assert_eq!(table.select("hello"), "Try asking about Rust.");
    }

    #[test]
    fn test_empty_config_uses_builtins() {
        let config: ConfigFile = toml::from_str("").unwrap();
        let table = config.response_table().unwrap();

        assert_eq!(table.entries().len(), 3);
        assert_eq!(table.default_response(), DEFAULT_RESPONSE);
    }

    #[test]
    fn test_greeting_override() {
        assert_eq!(sample_config().greeting(), "Hey!");

        let mut config = sample_config();
        config.devmate.greeting = Some("   ".to_string());
        assert_eq!(config.greeting(), GREETING);
    }

    #[test]
    fn test_response_table_reports_conflict() {
        let mut config = sample_config();
        config.responses.push(CustomResponse {
            keyword: "TEST".to_string(),
            response: "shadowing".to_string(),
        });

        let err = config.response_table().unwrap_err();
        assert_eq!(err, ResponseTableError::BuiltinConflict("test".to_string()));
    }
}
