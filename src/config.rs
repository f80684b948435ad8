//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/exprtree/exprtree.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `EXPRTREE_*` prefix, `__` between section and key

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::DiagramStyle;
use crate::errors::{SettingsError, SettingsResult};

/// Prefix of environment overrides, e.g. `EXPRTREE_REPL__QUIT`.
pub const ENV_PREFIX: &str = "EXPRTREE";

/// Diagram glyphs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// Gap filler between a left child and its right sibling
    pub connector: String,
    /// Marker for absent slots
    pub absent: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        let style = DiagramStyle::default();
        Self {
            connector: style.connector.to_string(),
            absent: style.absent.to_string(),
        }
    }
}

impl RenderSettings {
    /// Validates the glyphs and turns them into a [`DiagramStyle`].
    pub fn diagram_style(&self) -> SettingsResult<DiagramStyle> {
        Ok(DiagramStyle {
            connector: single_char("render.connector", &self.connector)?,
            absent: single_char("render.absent", &self.absent)?,
        })
    }
}

fn single_char(key: &'static str, value: &str) -> SettingsResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(SettingsError::InvalidGlyph {
            key,
            value: value.to_string(),
        }),
    }
}

/// Interactive loop settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReplSettings {
    /// Printed before each input line
    pub prompt: String,
    /// Case-insensitive line that ends the loop
    pub quit: String,
}

impl Default for ReplSettings {
    fn default() -> Self {
        Self {
            prompt: "Enter Infix Expression:".into(),
            quit: "N".into(),
        }
    }
}

/// Unified configuration for exprtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    pub render: RenderSettings,
    pub repl: ReplSettings,
}

/// Get the XDG config directory for exprtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "exprtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("exprtree.toml"))
}

/// Environment source for `EXPRTREE_*` overrides.
pub fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> SettingsResult<Self> {
        Self::load_from(global_config_path().as_deref(), config_file, env_source())
    }

    /// Load settings from explicit layers.
    ///
    /// A missing `global` file is skipped, a missing `local` file is an error.
    #[instrument(level = "debug", skip(env))]
    pub fn load_from(
        global: Option<&Path>,
        local: Option<&Path>,
        env: Environment,
    ) -> SettingsResult<Self> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("render.connector", defaults.render.connector)
            .map_err(config_err)?
            .set_default("render.absent", defaults.render.absent)
            .map_err(config_err)?
            .set_default("repl.prompt", defaults.repl.prompt)
            .map_err(config_err)?
            .set_default("repl.quit", defaults.repl.quit)
            .map_err(config_err)?;

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(local_path) = local {
            if !local_path.exists() {
                return Err(SettingsError::FileNotFound(local_path.to_path_buf()));
            }
            debug!("local config: {}", local_path.display());
            builder = builder.add_source(File::from(local_path).required(true));
        }

        let config = builder.add_source(env).build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> SettingsResult<()> {
        self.render.diagram_style()?;
        if self.repl.quit.trim().is_empty() {
            return Err(SettingsError::EmptyValue { key: "repl.quit" });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> SettingsResult<String> {
        toml::to_string_pretty(self).map_err(|e| SettingsError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# exprtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/exprtree/exprtree.toml
#   File:   exprtree --config <FILE>
#   Env:    EXPRTREE_* environment variables, e.g. EXPRTREE_RENDER__CONNECTOR

[render]
# Fills the gap between a left child and its right sibling (one character)
# connector = "`"

# Marks absent slots in the diagram (one character)
# absent = ":"

[repl]
# Printed before each input line
# prompt = "Enter Infix Expression:"

# Line that ends the interactive loop (case-insensitive)
# quit = "N"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> SettingsError {
    SettingsError::Config {
        message: e.to_string(),
    }
}
