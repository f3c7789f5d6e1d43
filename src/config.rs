//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::constants::config_file;
use crate::core::error::{Result, UrlexError};

/// Runtime options threaded explicitly through every component.
///
/// Every field is optional so that a partial `.urlex.toml` merges cleanly
/// under CLI arguments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Cookie string forwarded verbatim as the `Cookie` header
    pub cookie: Option<String>,

    /// One custom header in `Name: Value` form
    pub header: Option<String>,

    /// HTTP/HTTPS proxy URL
    pub proxy: Option<String>,

    /// Print only extracted URLs
    pub url_only: Option<bool>,

    /// Print only extracted paths
    pub path_only: Option<bool>,

    /// Suppress banner and section headers
    pub silent: Option<bool>,

    /// Skip TLS certificate verification even without a proxy
    pub insecure: Option<bool>,
}

impl Config {
    /// Load configuration from file, validating the TOML content
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UrlexError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            UrlexError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        // Check for .urlex.toml in current directory
        if let Ok(config) = Self::load_from_file(config_file::FILE_NAME) {
            return config;
        }

        // Check for .urlex.toml in parent directories
        for i in 1..=config_file::PARENT_SEARCH_DEPTH {
            let path = format!("{}{}", "../".repeat(i), config_file::FILE_NAME);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref cookie) = cli_config.cookie {
            self.cookie = Some(cookie.clone());
        }
        if let Some(ref header) = cli_config.header {
            self.header = Some(header.clone());
        }
        if let Some(ref proxy) = cli_config.proxy {
            self.proxy = Some(proxy.clone());
        }
        if cli_config.url_only {
            self.url_only = Some(true);
        }
        if cli_config.path_only {
            self.path_only = Some(true);
        }
        if cli_config.silent {
            self.silent = Some(true);
        }
        if cli_config.insecure {
            self.insecure = Some(true);
        }
    }

    pub fn url_only(&self) -> bool {
        self.url_only.unwrap_or(false)
    }

    pub fn path_only(&self) -> bool {
        self.path_only.unwrap_or(false)
    }

    pub fn silent(&self) -> bool {
        self.silent.unwrap_or(false)
    }

    pub fn insecure(&self) -> bool {
        self.insecure.unwrap_or(false)
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default, Clone)]
pub struct CliConfig {
    pub file: Option<String>,
    pub cookie: Option<String>,
    pub header: Option<String>,
    pub proxy: Option<String>,
    pub url_only: bool,
    pub path_only: bool,
    pub silent: bool,
    pub insecure: bool,
    pub verbose: bool,
    pub config_file: Option<String>,
    pub no_config: bool,
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::io::Write;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_default_config_is_empty() {
        let config = Config::default();

        assert!(config.cookie.is_none());
        assert!(config.header.is_none());
        assert!(config.proxy.is_none());
        assert!(!config.url_only());
        assert!(!config.path_only());
        assert!(!config.silent());
        assert!(!config.insecure());
    }

    #[test]
    fn test_load_from_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(
            br#"
            cookie = "session=abc123"
            proxy = "http://127.0.0.1:8080"
            silent = true
            "#,
        )?;

        let config = Config::load_from_file(file.path())?;

        assert_eq!(config.cookie.as_deref(), Some("session=abc123"));
        assert_eq!(config.proxy.as_deref(), Some("http://127.0.0.1:8080"));
        assert!(config.silent());
        assert!(config.header.is_none());
        Ok(())
    }

    #[test]
    fn test_load_from_file__when_invalid_toml() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"cookie = [unterminated")?;

        let result = Config::load_from_file(file.path());

        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Invalid TOML"));
        Ok(())
    }

    #[test]
    fn test_load_from_file__when_missing_file() {
        let result = Config::load_from_file("definitely-not-a-config.toml");

        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Could not read config file"));
    }

    #[test]
    fn test_merge_with_cli__cli_takes_precedence() {
        let mut config = Config {
            cookie: Some("from-file".to_string()),
            proxy: Some("http://file-proxy:8080".to_string()),
            ..Config::default()
        };
        let cli_config = CliConfig {
            cookie: Some("from-cli".to_string()),
            silent: true,
            ..CliConfig::default()
        };

        config.merge_with_cli(&cli_config);

        assert_eq!(config.cookie.as_deref(), Some("from-cli"));
        // Untouched by CLI, file value survives
        assert_eq!(config.proxy.as_deref(), Some("http://file-proxy:8080"));
        assert!(config.silent());
    }

    #[test]
    fn test_merge_with_cli__false_flags_do_not_override() {
        let mut config = Config {
            url_only: Some(true),
            ..Config::default()
        };

        config.merge_with_cli(&CliConfig::default());

        assert!(config.url_only());
    }
}
