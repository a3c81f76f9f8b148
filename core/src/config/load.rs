use std::path::Path;

use super::types::AppConfig;
use crate::errors::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "approvals.toml";

/// Reads `path`, or `approvals.toml` in the working directory when present,
/// then applies `APPROVALS_*` environment overrides, trims and validates.
pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut cfg = match path {
        Some(p) => read_file(p)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            read_file(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => AppConfig::default(),
    };

    apply_overrides(&mut cfg, |key| std::env::var(key).ok());
    cfg.normalize();
    cfg.validate()?;
    Ok(cfg)
}

fn read_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<AppConfig>(&s).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn apply_overrides(cfg: &mut AppConfig, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("APPROVALS_OWNERS_FILE") {
        if !v.trim().is_empty() {
            cfg.declarations.owners_file = v.trim().to_string();
        }
    }
    if let Some(v) = var("APPROVALS_DEPENDENCIES_FILE") {
        if !v.trim().is_empty() {
            cfg.declarations.dependencies_file = v.trim().to_string();
        }
    }
    if let Some(v) = var("APPROVALS_LOG_LEVEL") {
        if !v.trim().is_empty() {
            cfg.logging.level = v.trim().to_string();
        }
    }
}
