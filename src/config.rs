//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/jiractx/jiractx.toml`
//! 3. Explicit config file passed by the caller
//! 4. Environment variables: `JIRACTX_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, ApplicationResult};

const ENV_PREFIX: &str = "JIRACTX";

/// Unified configuration for jiractx.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Number of most recent comments in a context report
    pub comment_limit: usize,
    /// Default cap on field search results
    pub search_limit: usize,
    /// Default cap on field listings
    pub list_limit: usize,
    /// Tracker CLI executable
    pub jira_command: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            comment_limit: 5,
            search_limit: 20,
            list_limit: 50,
            jira_command: "jira".into(),
        }
    }
}

/// Get the XDG config directory for jiractx.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "jiractx").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("jiractx.toml"))
}

impl Settings {
    /// Load settings with layered precedence from the process environment.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist if given
    pub fn load(config_file: Option<&Path>) -> ApplicationResult<Self> {
        Self::load_from(global_config_path().as_deref(), config_file, None)
    }

    /// Load settings from explicit sources.
    ///
    /// `env` replaces the process environment as the source of `JIRACTX_*`
    /// overrides when given.
    pub fn load_from(
        global_file: Option<&Path>,
        config_file: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> ApplicationResult<Self> {
        let defaults = Config::try_from(&Settings::default()).map_err(config_err)?;
        let mut builder = Config::builder().add_source(defaults);

        if let Some(global) = global_file {
            builder = builder.add_source(File::from(global).required(false));
        }
        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# jiractx configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/jiractx/jiractx.toml
#   File:   explicit path given by the caller
#   Env:    JIRACTX_* environment variables (e.g. JIRACTX_COMMENT_LIMIT=10)

# Most recent comments included in a context report
# comment_limit = 5

# Default cap on field search results
# search_limit = 20

# Default cap on field listings
# list_limit = 50

# Tracker CLI executable
# jira_command = "jira"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
