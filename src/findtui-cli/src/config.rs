//! Configuration file discovery and loading.
//!
//! ```toml
//! program = "gfind"
//! dialect = "gnu"
//! catalog = "/etc/findtui/extra-options.toml"
//! completion_base_dir = "/srv/data"
//! ```
//!
//! Every field is optional. Command-line flags take precedence over the
//! file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use findtui_catalog::{Catalog, Dialect};
use findtui_command::DEFAULT_PROGRAM;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::GlobalArgs;

/// Configuration file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable for a custom config file path.
pub const FINDTUI_CONFIG_ENV: &str = "FINDTUI_CONFIG";

/// Environment variable for a custom config directory.
pub const FINDTUI_HOME_ENV: &str = "FINDTUI_HOME";

/// Directory under the home directory used when nothing else is set.
const DEFAULT_HOME_DIR: &str = ".findtui";

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FindtuiConfig {
    /// Program name the command line starts with.
    pub program: Option<String>,
    /// Built-in option table to start from.
    pub dialect: Option<Dialect>,
    /// Extra TOML catalog merged over the built-in one.
    pub catalog: Option<PathBuf>,
    /// Directory relative path completions are resolved against.
    pub completion_base_dir: Option<PathBuf>,
}

impl FindtuiConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid findtui configuration")
    }
}

/// Picks the config file to read.
///
/// Checks in order: the explicit `--config` path, `FINDTUI_CONFIG`,
/// `FINDTUI_HOME/config.toml`, then `~/.findtui/config.toml`. Empty
/// variables are ignored.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    env_config: Option<String>,
    env_home: Option<String>,
    home_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env_config.filter(|v| !v.is_empty()) {
        debug!(path = %path, "Using FINDTUI_CONFIG");
        return Some(PathBuf::from(path));
    }
    if let Some(home) = env_home.filter(|v| !v.is_empty()) {
        debug!(path = %home, "Using FINDTUI_HOME");
        return Some(PathBuf::from(home).join(CONFIG_FILE));
    }
    home_dir.map(|home| home.join(DEFAULT_HOME_DIR).join(CONFIG_FILE))
}

/// Loads the configuration.
///
/// A missing file is an error only when it was named explicitly with
/// `--config`; a missing default file yields the default configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<FindtuiConfig> {
    let path = resolve_config_path(
        explicit,
        std::env::var(FINDTUI_CONFIG_ENV).ok(),
        std::env::var(FINDTUI_HOME_ENV).ok(),
        dirs::home_dir(),
    );
    let Some(path) = path else {
        return Ok(FindtuiConfig::default());
    };
    load_config_file(&path, explicit.is_some())
}

/// Reads one config file. `required` turns a missing file into an error.
pub fn load_config_file(path: &Path, required: bool) -> Result<FindtuiConfig> {
    if !required && !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return Ok(FindtuiConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    debug!(path = %path.display(), "Loaded config file");
    FindtuiConfig::from_toml(&text).with_context(|| format!("In {}", path.display()))
}

/// Effective settings after merging flags over the config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub program: String,
    pub dialect: Dialect,
    pub catalog: Catalog,
    pub base_dir: Option<PathBuf>,
}

impl Settings {
    /// Loads the config file named by the flags (or the default one) and
    /// applies the flags over it.
    pub fn load(args: &GlobalArgs) -> Result<Self> {
        let config = load_config(args.config.as_deref())?;
        Self::resolve(args, config)
    }

    /// Applies command-line flags over `config` and builds the catalog.
    pub fn resolve(args: &GlobalArgs, config: FindtuiConfig) -> Result<Self> {
        let program = args
            .program
            .clone()
            .or(config.program)
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
        let dialect = args
            .dialect
            .map(Dialect::from)
            .or(config.dialect)
            .unwrap_or_default();

        let mut catalog = Catalog::builtin(dialect)
            .with_context(|| format!("Built-in {dialect} catalog is invalid"))?;
        if let Some(path) = &config.catalog {
            let extra = Catalog::load(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?;
            catalog
                .merge(&extra)
                .with_context(|| format!("Cannot merge catalog {}", path.display()))?;
            debug!(path = %path.display(), options = extra.len(), "Merged extra catalog");
        }

        Ok(Self {
            program,
            dialect,
            catalog,
            base_dir: config.completion_base_dir,
        })
    }
}
