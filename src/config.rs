//! Settings for the command-line front end.
//!
//! Values come from the environment (a `.env` file is loaded first by
//! `main`); command-line flags override them.

use std::env;

/// log4rs configuration file used when none is set.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

pub const ENV_OUTPUT: &str = "IPV4_CALC_OUTPUT";
pub const ENV_LOG_CONFIG: &str = "IPV4_CALC_LOG_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output: OutputFormat,
    pub log_config: String,
    /// Settings that were present but rejected; logged once logging is up.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputFormat::Table,
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Read settings from the process environment.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup`; unknown values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(value) = lookup(ENV_OUTPUT) {
            match value.parse() {
                Ok(output) => config.output = output,
                Err(e) => config.warnings.push(format!("Ignoring {ENV_OUTPUT}: {e}")),
            }
        }
        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            if !path.trim().is_empty() {
                config.log_config = path;
            }
        }
        config
    }
}
