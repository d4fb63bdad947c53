//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/cpm-chain/cpm-chain.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `CPMCHAIN_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, OutputFormat, Variant};

pub const ENV_PREFIX: &str = "CPMCHAIN";

/// Command sent through the chain when none is given.
pub const DEFAULT_COMMAND: &str = "Hello from Rust!";

/// Unified configuration for cpm-chain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Chain to build (default: hal)
    pub variant: Variant,
    /// Command for `run` when none is given on the command line
    pub command: String,
    /// Output format (default: text)
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            command: DEFAULT_COMMAND.to_string(),
            format: OutputFormat::default(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub variant: Option<Variant>,
    pub command: Option<String>,
    pub format: Option<OutputFormat>,
}

/// Get the XDG config directory for cpm-chain.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cpm-chain").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("cpm-chain.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            variant: overlay.variant.unwrap_or(self.variant),
            command: overlay
                .command
                .clone()
                .unwrap_or_else(|| self.command.clone()),
            format: overlay.format.unwrap_or(self.format),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("config: global {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("config: explicit {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        Self::apply_env_overrides(current, Environment::with_prefix(ENV_PREFIX))
    }

    /// Apply `CPMCHAIN_*` variables from `env` as explicit overrides.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Some(val) = optional_string(&config, "variant")? {
            settings.variant = val.parse()?;
        }
        if let Some(val) = optional_string(&config, "command")? {
            settings.command = val;
        }
        if let Some(val) = optional_string(&config, "format")? {
            settings.format = val.parse()?;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# cpm-chain configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/cpm-chain/cpm-chain.toml
#   Explicit: --config <FILE>
#   Env:      CPMCHAIN_* environment variables (CPMCHAIN_VARIANT, ...)

# Chain to build: "hal" (osal -> crypto -> spi) or "project" (ProjectC -> ProjectB -> ProjectA)
# variant = "hal"

# Command sent through the chain by `run`
# command = "Hello from Rust!"

# Output format: "text" or "json"
# format = "text"
"#
        .to_string()
    }
}

/// `None` when `key` is unset; any other lookup failure is an error.
fn optional_string(config: &Config, key: &str) -> Result<Option<String>, ApplicationError> {
    match config.get_string(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(vars: &[(&str, &str)]) -> Environment {
        let mut map = config::Map::new();
        for (k, v) in vars {
            map.insert((*k).to_string(), (*v).to_string());
        }
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn given_defaults_then_hal_text_and_default_command() {
        let settings = Settings::default();
        assert_eq!(settings.variant, Variant::Hal);
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.command, DEFAULT_COMMAND);
    }

    #[test]
    fn given_partial_overlay_when_merging_then_unspecified_fields_kept() {
        let overlay = RawSettings {
            variant: Some(Variant::Project),
            command: None,
            format: None,
        };

        let merged = Settings::default().merge_with(&overlay);

        assert_eq!(merged.variant, Variant::Project);
        assert_eq!(merged.command, DEFAULT_COMMAND);
        assert_eq!(merged.format, OutputFormat::Text);
    }

    #[test]
    fn given_env_vars_when_applying_overrides_then_replace_values() {
        let env = env_with(&[
            ("CPMCHAIN_VARIANT", "project"),
            ("CPMCHAIN_COMMAND", "from env"),
            ("CPMCHAIN_FORMAT", "json"),
        ]);

        let settings = Settings::apply_env_overrides(Settings::default(), env).unwrap();

        assert_eq!(settings.variant, Variant::Project);
        assert_eq!(settings.command, "from env");
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn given_invalid_env_variant_when_applying_overrides_then_errors() {
        let env = env_with(&[("CPMCHAIN_VARIANT", "gpio")]);

        let result = Settings::apply_env_overrides(Settings::default(), env);

        assert!(matches!(
            result,
            Err(ApplicationError::InvalidSetting { key: "variant", .. })
        ));
    }

    #[test]
    fn given_settings_when_serializing_then_toml_uses_lowercase_names() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("variant = \"hal\""));
        assert!(toml.contains("format = \"text\""));
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.variant.is_none());
    }

    #[test]
    fn given_unset_key_when_reading_optional_then_none() {
        let config = Config::builder().build().unwrap();
        assert_eq!(optional_string(&config, "variant").unwrap(), None);
    }

    #[test]
    fn given_non_string_value_when_reading_optional_then_config_error() {
        let config = Config::builder()
            .set_override("command.nested", "x")
            .unwrap()
            .build()
            .unwrap();

        let result = optional_string(&config, "command");

        assert!(
            matches!(result, Err(ApplicationError::Config { .. })),
            "expected config error, got {:?}",
            result
        );
    }
}
