// crates/verifier-harness-config/src/config.rs
// ============================================================================
// Module: Verifier Harness Configuration
// Description: Configuration loading and validation for the verifier harness.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: verifier-harness-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! An explicitly named file (flag or environment) must exist; when only the
//! default filename is in play and it is absent, built-in defaults apply.
//! Unknown fields and out-of-range values fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;
use verifier_harness_core::ArgumentMode;
use verifier_harness_core::EntryPoint;
use verifier_harness_core::PLACEHOLDER_ENTRY_NAME;
use verifier_harness_core::PLACEHOLDER_ENTRY_PARAMS;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "verifier-harness.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "VERIFIER_HARNESS_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Verifier harness configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// Argument interpretation settings.
    #[serde(default)]
    pub arguments: ArgumentsConfig,
    /// Entry point settings.
    #[serde(default)]
    pub entry: EntryConfig,
    /// Where the configuration came from (not serialized).
    #[serde(skip)]
    pub source: ConfigSource,
}

impl HarnessConfig {
    /// Loads configuration using the flag path or [`CONFIG_ENV_VAR`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let env_path = env::var(CONFIG_ENV_VAR).ok();
        Self::load_from(path, env_path.as_deref())
    }

    /// Loads configuration from an explicit path, an environment-provided
    /// path, or the default filename, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an explicit file is missing, a file is
    /// oversized or not UTF-8, parsing fails, or validation fails.
    pub fn load_from(path: Option<&Path>, env_path: Option<&str>) -> Result<Self, ConfigError> {
        let (resolved, explicit) = resolve_path(path, env_path)?;
        validate_path(&resolved)?;
        let bytes = match fs::read(&resolved) {
            Ok(bytes) => bytes,
            Err(err) if !explicit && err.kind() == ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(ConfigError::Io(format!("{}: {err}", resolved.display())));
            }
        };
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let mut config = Self::from_toml_str(content)?;
        config.source = ConfigSource::File(resolved);
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.arguments.validate()?;
        self.entry.validate()
    }

    /// Builds the configured entry point.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the entry point settings are invalid.
    pub fn entry_point(&self) -> Result<EntryPoint, ConfigError> {
        self.entry.to_entry_point()
    }
}

/// Origin of a loaded configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in defaults; no file was read.
    #[default]
    Defaults,
    /// Parsed from the given file.
    File(PathBuf),
}

/// Argument interpretation configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArgumentsConfig {
    /// Interpretation applied when `--binary` is not given.
    #[serde(default)]
    pub mode: ArgumentMode,
    /// Widest accepted binary argument; unbounded when unset.
    #[serde(default)]
    pub max_width: Option<usize>,
}

impl ArgumentsConfig {
    /// Validates argument settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_width == Some(0) {
            return Err(ConfigError::Invalid(
                "arguments.max_width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Entry point configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryConfig {
    /// Entry point name.
    #[serde(default = "default_entry_name")]
    pub name: String,
    /// Ordered parameter names.
    #[serde(default = "default_entry_params")]
    pub params: Vec<String>,
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            name: default_entry_name(),
            params: default_entry_params(),
        }
    }
}

impl EntryConfig {
    /// Validates entry settings.
    fn validate(&self) -> Result<(), ConfigError> {
        self.to_entry_point().map(|_| ())
    }

    /// Builds an [`EntryPoint`] from these settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the name or parameters are rejected.
    pub fn to_entry_point(&self) -> Result<EntryPoint, ConfigError> {
        EntryPoint::new(self.name.clone(), self.params.iter().cloned())
            .map_err(|err| ConfigError::Invalid(format!("entry: {err}")))
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Default entry point name.
fn default_entry_name() -> String {
    PLACEHOLDER_ENTRY_NAME.to_string()
}

/// Default entry point parameters.
fn default_entry_params() -> Vec<String> {
    PLACEHOLDER_ENTRY_PARAMS.iter().map(ToString::to_string).collect()
}

/// Resolves the config path and whether it was explicitly requested.
fn resolve_path(
    path: Option<&Path>,
    env_path: Option<&str>,
) -> Result<(PathBuf, bool), ConfigError> {
    if let Some(path) = path {
        return Ok((path.to_path_buf(), true));
    }
    if let Some(env_path) = env_path {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok((PathBuf::from(env_path), true));
    }
    Ok((PathBuf::from(DEFAULT_CONFIG_NAME), false))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}
