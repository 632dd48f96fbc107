//! Configuration types for lint-style.

use crate::ledger::DEFAULT_LEDGER_PATH;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Name of the configuration file at the repository root.
pub const CONFIG_FILE_NAME: &str = "lint-style.toml";

/// Top-level configuration for lint-style.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Which files a full scan covers.
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Where the exception ledger lives.
    #[serde(default)]
    pub exceptions: ExceptionsConfig,

    /// Per-rule configurations, keyed by rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Loads `lint-style.toml` from `root`, falling back to defaults when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from_root(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!("Loading config: {}", path.display());
            Self::from_file(&path)
        } else {
            tracing::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, root.display());
            Ok(Self::default())
        }
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the configuration for a rule, if any.
    #[must_use]
    pub fn rule(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.rules.get(rule_name)
    }

    /// Location of the exception ledger for a repository rooted at `root`.
    #[must_use]
    pub fn ledger_path(&self, root: &Path) -> PathBuf {
        root.join(&self.exceptions.path)
    }
}

/// File-discovery policy for full scans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Directories or files to scan, relative to the repository root.
    #[serde(default = "default_include")]
    pub include: Vec<PathBuf>,

    /// File extensions to lint, without the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns matched against root-relative paths.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            include: default_include(),
            extensions: default_extensions(),
            exclude: Vec::new(),
            respect_gitignore: true,
        }
    }
}

/// Exception ledger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExceptionsConfig {
    /// Ledger file path, relative to the repository root.
    #[serde(default = "default_ledger_path")]
    pub path: PathBuf,
}

impl Default for ExceptionsConfig {
    fn default() -> Self {
        Self {
            path: default_ledger_path(),
        }
    }
}

fn default_include() -> Vec<PathBuf> {
    vec![PathBuf::from(".")]
}

fn default_extensions() -> Vec<String> {
    vec!["lean".to_string()]
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from(DEFAULT_LEDGER_PATH)
}

fn default_true() -> bool {
    true
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Gets an integer option with a default value.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.options
            .get(key)
            .and_then(toml::Value::as_integer)
            .unwrap_or(default)
    }

    /// Gets a string option with a default value.
    #[must_use]
    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.options
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or(default)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.discovery.respect_gitignore);
        assert_eq!(config.discovery.extensions, vec!["lean".to_string()]);
        assert_eq!(
            config.exceptions.path,
            PathBuf::from("scripts/style-exceptions.txt")
        );
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[discovery]
include = ["src", "archive"]
exclude = ["**/.lake/**"]

[exceptions]
path = "lint/exceptions.txt"

[rules.line-length]
max_length = 120

[rules.trailing-whitespace]
enabled = false
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(
            config.discovery.include,
            vec![PathBuf::from("src"), PathBuf::from("archive")]
        );
        assert_eq!(config.discovery.extensions, vec!["lean".to_string()]);
        assert!(config.is_rule_enabled("line-length"));
        assert!(!config.is_rule_enabled("trailing-whitespace"));
        assert!(config.is_rule_enabled("copyright-header"));

        let rule_config = config.rule("line-length").unwrap();
        assert_eq!(rule_config.get_int("max_length", 100), 120);
        assert_eq!(
            config.ledger_path(Path::new("/repo")),
            PathBuf::from("/repo/lint/exceptions.txt")
        );
    }

    #[test]
    fn test_parse_error() {
        let err = Config::parse("[discovery\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_from_root_without_file_uses_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = Config::load_from_root(tmp.path()).unwrap();
        assert_eq!(config.discovery.include, vec![PathBuf::from(".")]);
    }
}
