use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Config;

pub const DEFAULT_CONFIG: &str = "config.toml";

pub fn load_config(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// An explicit path must exist; otherwise fall back to `config.toml` if present, then defaults.
pub fn resolve_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => load_config(p),
        None if Path::new(DEFAULT_CONFIG).is_file() => load_config(Path::new(DEFAULT_CONFIG)),
        None => Ok(Config::default()),
    }
}
