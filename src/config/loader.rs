//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HmsError, HmsResult};

use super::types::{Config, ConvertUnit};

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "hmscalc.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Key not recognised by [`Config`]; its value was ignored
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// An implicitly discovered file failed to load and the next layer was used
    Skipped { file: PathBuf, reason: String },
}

impl ConfigWarning {
    pub fn file(&self) -> &Path {
        match self {
            ConfigWarning::UnknownKey { file, .. } | ConfigWarning::Skipped { file, .. } => file,
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> HmsResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| HmsError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config layers and apply environment overrides.
pub fn discover(explicit: Option<&Path>) -> HmsResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let mut collected = Vec::new();
    let candidates = std::iter::once(PathBuf::from(PROJECT_CONFIG_FILE))
        .chain(dirs_config_dir().map(|dir| dir.join("hmscalc/config.toml")));

    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                collected.extend(warnings);
                return Ok((with_env_overrides(config), collected));
            }
            Err(err) => collected.push(skipped_warning(candidate, err)),
        }
    }

    Ok((with_env_overrides(Config::default()), collected))
}

fn skipped_warning(file: PathBuf, err: HmsError) -> ConfigWarning {
    let reason = match err {
        HmsError::InvalidConfig { message, .. } => message,
        other => other.to_string(),
    };
    ConfigWarning::Skipped { file, reason }
}

/// Apply environment variable overrides (HMSCALC_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup.
///
/// Unparseable values are ignored and the existing setting is kept.
pub fn apply_env(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // HMSCALC_PRECISION
    if let Some(precision) = lookup("HMSCALC_PRECISION") {
        if let Ok(precision) = precision.trim().parse::<usize>() {
            config.output.precision = precision;
        }
    }

    // HMSCALC_UNIT
    if let Some(unit) = lookup("HMSCALC_UNIT") {
        if let Some(unit) = ConvertUnit::parse_lenient(&unit) {
            config.convert.unit = unit;
        }
    }

    // HMSCALC_JSON
    if let Some(val) = lookup("HMSCALC_JSON") {
        config.output.json = val.to_lowercase() != "false" && val != "0";
    }

    config
}

/// User config directory, honouring `XDG_CONFIG_HOME` on every platform
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["output", "json", "precision", "convert", "unit"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
