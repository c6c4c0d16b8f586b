use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::Level;

pub mod validator;

use crate::cli::Cli;
use crate::projector::{Placeholders, Projector};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub preview: PreviewSettings,
    #[serde(default)]
    pub seed: SeedSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingSettings {
    /// Parsed maximum log level
    pub fn max_level(&self) -> Result<Level, anyhow::Error> {
        Level::from_str(&self.level)
            .map_err(|_| anyhow::anyhow!("Unknown log level: {}", self.level))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PreviewSettings {
    #[serde(default)]
    pub placeholders: Placeholders,
}

impl PreviewSettings {
    pub fn projector(&self) -> Projector {
        Projector::new(self.placeholders.clone())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeedSettings {
    /// Seed tree loaded at startup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Settings {
    /// Create settings from CLI arguments (config file plus CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::load(cli.config.clone())?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    /// Load `schemapad.{toml,yaml,json}` from `root`
    pub fn from_root(root: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let config_path = root.as_ref().join("schemapad");
        let settings = Self::load(config_path)?;
        settings.validate()?;
        Ok(settings)
    }

    fn load(config_path: PathBuf) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(config_path).required(false))
            .set_default("logging.level", default_log_level())?
            .set_default("preview.placeholders.string", crate::projector::STRING_PLACEHOLDER)?
            .set_default("preview.placeholders.number", crate::projector::NUMBER_PLACEHOLDER)?
            .build()?;

        Ok(s.try_deserialize()?)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(level) = &cli.log_level {
            self.logging.level = level.clone();
        }
        if let Some(seed) = &cli.seed {
            self.seed.path = Some(seed.clone());
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}
