// Rust guideline compliant 2026-02-06

//! Configuration management for mdmerge.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the optional configuration file inside the target directory.
const CONFIG_FILE: &str = ".mdmerge.toml";

/// Configuration for merge behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name of the aggregate output file.
    #[serde(default = "default_output")]
    pub output: String,

    /// File name excluded from merging (case-sensitive exact match).
    #[serde(default = "default_exclude")]
    pub exclude: String,

    /// Suffix a file name must carry to qualify as a candidate.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Whether to sort candidate names lexicographically before appending.
    ///
    /// Off by default: candidates otherwise append in directory-listing
    /// order, which is filesystem-dependent. Enable this to make the
    /// aggregate deterministic.
    #[serde(default)]
    pub sort: bool,
}

/// Default aggregate output file name.
fn default_output() -> String {
    "cheatsheet.md".to_string()
}

/// Default excluded file name.
fn default_exclude() -> String {
    "README.md".to_string()
}

/// Default candidate suffix.
fn default_extension() -> String {
    ".md".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            exclude: default_exclude(),
            extension: default_extension(),
            sort: false,
        }
    }
}

impl Config {
    /// Loads configuration for a target directory.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<dir>/.mdmerge.toml`
    /// 3. Environment variables with `MDMERGE_` prefix
    ///
    /// # Arguments
    ///
    /// * `dir` - The target directory
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        // Try to load from config file
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let file_config: Config = toml::from_str(&content)
                .map_err(|e| crate::Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
            config = file_config;
        }

        // Apply environment variable overrides
        config.apply_env_overrides()?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `MDMERGE_OUTPUT` - Aggregate output file name
    /// - `MDMERGE_EXCLUDE` - Excluded file name
    /// - `MDMERGE_EXTENSION` - Candidate suffix
    /// - `MDMERGE_SORT` - Sort candidates lexicographically (true/false)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("MDMERGE_OUTPUT") {
            self.output = val;
        }

        if let Ok(val) = std::env::var("MDMERGE_EXCLUDE") {
            self.exclude = val;
        }

        if let Ok(val) = std::env::var("MDMERGE_EXTENSION") {
            self.extension = val;
        }

        if let Ok(val) = std::env::var("MDMERGE_SORT") {
            self.sort = val.parse().map_err(|_| {
                crate::Error::InvalidConfig("MDMERGE_SORT must be true or false".to_string())
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - output is empty
    /// - extension is empty or does not start with a dot
    fn validate(&self) -> Result<()> {
        if self.output.is_empty() {
            return Err(crate::Error::InvalidConfig(
                "output must not be empty".to_string(),
            ));
        }

        if self.extension.is_empty() || !self.extension.starts_with('.') {
            return Err(crate::Error::InvalidConfig(format!(
                "extension must start with a dot, got {:?}",
                self.extension
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard, OnceLock};
    use tempfile::TempDir;

    /// Serializes tests that touch the process-global environment.
    fn env_lock() -> MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }

    fn clear_all_env_vars() {
        std::env::remove_var("MDMERGE_OUTPUT");
        std::env::remove_var("MDMERGE_EXCLUDE");
        std::env::remove_var("MDMERGE_EXTENSION");
        std::env::remove_var("MDMERGE_SORT");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output, "cheatsheet.md");
        assert_eq!(config.exclude, "README.md");
        assert_eq!(config.extension, ".md");
        assert!(!config.sort);
    }

    #[test]
    fn test_config_load_missing_file() {
        let _guard = env_lock();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.output, "cheatsheet.md");
        assert_eq!(config.exclude, "README.md");
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = env_lock();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".mdmerge.toml");
        let content = r#"
output = "combined.md"
exclude = "INDEX.md"
extension = ".markdown"
sort = true
"#;
        std::fs::write(&config_path, content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.output, "combined.md");
        assert_eq!(config.exclude, "INDEX.md");
        assert_eq!(config.extension, ".markdown");
        assert!(config.sort);
    }

    #[test]
    fn test_config_partial_file_keeps_defaults() {
        let _guard = env_lock();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".mdmerge.toml");
        std::fs::write(&config_path, "sort = true").unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert!(config.sort);
        assert_eq!(config.output, "cheatsheet.md");
        assert_eq!(config.extension, ".md");
    }

    #[test]
    fn test_config_validation_empty_output() {
        let _guard = env_lock();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".mdmerge.toml");
        std::fs::write(&config_path, r#"output = """#).unwrap();

        let result = Config::load(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_config_validation_bad_extension() {
        let _guard = env_lock();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".mdmerge.toml");
        std::fs::write(&config_path, r#"extension = "md""#).unwrap();

        let result = Config::load(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_config_env_override_output() {
        let _guard = env_lock();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("MDMERGE_OUTPUT", "all.md");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.output, "all.md");

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_override_sort() {
        let _guard = env_lock();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("MDMERGE_SORT", "true");
        let config = Config::load(temp_dir.path()).unwrap();
        assert!(config.sort);

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_sort() {
        let _guard = env_lock();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("MDMERGE_SORT", "invalid");
        let result = Config::load(temp_dir.path());
        assert!(result.is_err());

        clear_all_env_vars();
    }

    #[test]
    fn test_config_file_overridden_by_env() {
        let _guard = env_lock();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".mdmerge.toml");
        std::fs::write(&config_path, r#"output = "combined.md""#).unwrap();

        std::env::set_var("MDMERGE_OUTPUT", "all.md");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.output, "all.md");

        clear_all_env_vars();
    }
}
