//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HmsResult;

use super::loader::{self, ConfigWarning};

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit NDJSON events instead of text
    #[serde(default)]
    pub json: bool,

    /// Decimal places when printing minutes and hours
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            precision: default_precision(),
        }
    }
}

fn default_precision() -> usize {
    4
}

/// Unit printed by `hmscalc convert`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ConvertUnit {
    Seconds,
    Minutes,
    Hours,
    Tuple,
    Map,
    #[default]
    All,
}

impl ConvertUnit {
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "s" | "sec" | "secs" | "seconds" => Some(Self::Seconds),
            "m" | "min" | "mins" | "minutes" => Some(Self::Minutes),
            "h" | "hr" | "hrs" | "hours" => Some(Self::Hours),
            "tuple" => Some(Self::Tuple),
            "map" | "dict" => Some(Self::Map),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

impl std::fmt::Display for ConvertUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConvertUnit::Seconds => "seconds",
            ConvertUnit::Minutes => "minutes",
            ConvertUnit::Hours => "hours",
            ConvertUnit::Tuple => "tuple",
            ConvertUnit::Map => "map",
            ConvertUnit::All => "all",
        };
        f.write_str(name)
    }
}

/// `convert` command configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConvertConfig {
    #[serde(default)]
    pub unit: ConvertUnit,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub convert: ConvertConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> HmsResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> HmsResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the explicit path, `./hmscalc.toml`, the user config, or
    /// defaults, then apply environment overrides.
    ///
    /// An explicit path that fails to load is an error; an implicit location
    /// that fails is reported as [`ConfigWarning::Skipped`] and the next
    /// layer is tried.
    pub fn discover(explicit: Option<&Path>) -> HmsResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit)
    }

    /// Apply environment variable overrides (HMSCALC_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
