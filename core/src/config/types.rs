use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub declarations: DeclarationConfig,

    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Trims values that name files so they match what is on disk.
    pub fn normalize(&mut self) {
        self.declarations.normalize();
        self.logging.level = self.logging.level.trim().to_string();
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.declarations.validate()
    }
}

/// Names of the per-directory declaration files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeclarationConfig {
    #[serde(default = "default_owners_file")]
    pub owners_file: String,

    #[serde(default = "default_dependencies_file")]
    pub dependencies_file: String,
}

fn default_owners_file() -> String {
    "OWNERS".to_string()
}

fn default_dependencies_file() -> String {
    "DEPENDENCIES".to_string()
}

impl Default for DeclarationConfig {
    fn default() -> Self {
        Self {
            owners_file: default_owners_file(),
            dependencies_file: default_dependencies_file(),
        }
    }
}

impl DeclarationConfig {
    pub fn normalize(&mut self) {
        self.owners_file = self.owners_file.trim().to_string();
        self.dependencies_file = self.dependencies_file.trim().to_string();
    }

    /// Names are used verbatim as file names, so padding is rejected here
    /// rather than looked up literally.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, name) in [
            ("owners_file", &self.owners_file),
            ("dependencies_file", &self.dependencies_file),
        ] {
            if name.trim() != name.as_str() {
                return Err(ConfigError::Validation(format!(
                    "declarations.{key} has surrounding whitespace: {name:?}"
                )));
            }
            if name.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "declarations.{key} must not be empty"
                )));
            }
            if name == "." || name == ".." || name.contains(['/', std::path::MAIN_SEPARATOR]) {
                return Err(ConfigError::Validation(format!(
                    "declarations.{key} must be a plain file name, got {name:?}"
                )));
            }
        }
        if self.owners_file == self.dependencies_file {
            return Err(ConfigError::Validation(
                "declarations.owners_file and declarations.dependencies_file must differ".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cache per-directory resolutions for the duration of one check.
    #[serde(default = "default_memoize")]
    pub memoize: bool,
}

fn default_memoize() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            memoize: default_memoize(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
