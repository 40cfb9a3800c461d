//! Configuration module for hmscalc
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (HMSCALC_*)
//! 3. Explicit `--config` file, or `./hmscalc.toml`
//! 4. User config (~/.config/hmscalc/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_env, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, ConvertConfig, ConvertUnit, OutputConfig};
