//! Configuration management for strap.
//!
//! Parses `strap.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `output.path` supports `${VAR}` (errors if unset) and `${VAR:-default}`.
//! The expanded path is resolved against the config file's directory.

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use strap_html::{AttributePolicy, HelperOptions};

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override fragment accumulation.
    pub accumulate: Option<bool>,
    /// Override the attribute omission policy.
    pub attribute_policy: Option<AttributePolicy>,
    /// Override the output file.
    pub output: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "strap.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Helper session settings.
    pub helper: HelperConfig,
    /// Output settings as written in TOML.
    output: OutputConfigRaw,

    /// Resolved output file; `None` writes to stdout.
    #[serde(skip)]
    pub output_path: Option<PathBuf>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// `[helper]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// Buffer fragments for a final render.
    pub accumulate: bool,
    /// Which attribute values are dropped from markup.
    pub attribute_policy: AttributePolicy,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            accumulate: true,
            attribute_policy: AttributePolicy::Loose,
        }
    }
}

impl HelperConfig {
    /// Session options for a [`strap_html::Helper`].
    #[must_use]
    pub fn helper_options(&self) -> HelperOptions {
        HelperOptions {
            accumulate: self.accumulate,
            attribute_policy: self.attribute_policy,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutputConfigRaw {
    path: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`output.path`").
        field: String,
        /// Error message (e.g., "${`OUT_DIR`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `strap.toml` in the current directory and its parents, falling
    /// back to defaults.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if parsing,
    /// expansion or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(accumulate) = settings.accumulate {
            self.helper.accumulate = accumulate;
        }
        if let Some(policy) = settings.attribute_policy {
            self.helper.attribute_policy = policy;
        }
        if let Some(output) = &settings.output {
            self.output_path = Some(output.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::discover_from(&cwd)
    }

    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.validate()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `output.path` is present but empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.output.path
            && path.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "output.path cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.output.path {
            self.output.path = Some(expand::expand_output_path(path)?);
        }
        Ok(())
    }

    /// Resolve the output path against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.output_path = self.output.path.as_deref().map(|p| config_dir.join(p));
    }
}
