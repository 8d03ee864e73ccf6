//! User configuration loaded from `config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::CalculatorState;
use crate::error::ConfigError;

const APP_DIR: &str = "keycalc";
const CONFIG_FILE: &str = "config.toml";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `EnvFilter` directive, e.g. `"warn"` or `"keycalc=trace"`.
    pub log_level: String,
    /// Start sessions with inverse trig enabled.
    pub inverse_trig: bool,
    /// Start sessions with the function panel expanded.
    pub show_functions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            inverse_trig: false,
            show_functions: false,
        }
    }
}

impl Config {
    /// Default location: `<config dir>/keycalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// The state a new session starts from.
    pub fn initial_state(&self) -> CalculatorState {
        CalculatorState::with_modes(self.inverse_trig, self.show_functions)
    }
}
