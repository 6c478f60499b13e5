use config::Config;
use error_stack::{report, ResultExt};
use serde::Deserialize;
use serde_path_to_error::{Deserializer as PathDeserializer, Segment, Track};
use thiserror::Error;

use crate::domain::report::ReportTemplate;

pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "Config";
pub const ENV_PREFIX: &str = "CHARITY_REPORT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}'")]
    ReadFailed(String),
    #[error("Invalid configuration at field '{0}'")]
    InvalidField(String),
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub database: super::database_config::DatabaseConfig,
    pub sheets: super::sheets_config::SpreadsheetConfig,
    #[serde(default)]
    pub report: ReportTemplate,
}

impl AppConfig {
    /// Loads the file named by `CONFIG_PATH` (default `Config`), overridden by
    /// `CHARITY_REPORT__SECTION__KEY` environment variables.
    pub fn load() -> error_stack::Result<Self, ConfigError> {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &str) -> error_stack::Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(config::File::with_name(config_path))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .change_context_lazy(|| ConfigError::ReadFailed(config_path.to_string()))?;

        let value = config
            .try_deserialize::<serde_json::Value>()
            .change_context_lazy(|| ConfigError::ReadFailed(config_path.to_string()))?;

        Self::from_value(value)
    }

    /// Deserializes an already-parsed configuration tree, reporting the path of
    /// the first offending field.
    pub fn from_value(value: serde_json::Value) -> error_stack::Result<Self, ConfigError> {
        use serde::de::IntoDeserializer;

        let mut track = Track::new();
        let path_de = PathDeserializer::new(value.into_deserializer(), &mut track);
        AppConfig::deserialize(path_de).map_err(|error| {
            let path_str = track
                .path()
                .iter()
                .map(|seg| match seg {
                    Segment::Seq { index } => format!("[{}]", index),
                    Segment::Map { key } => format!(".{}", key),
                    Segment::Enum { variant } => format!("::{}", variant),
                    Segment::Unknown => String::from("<?>"),
                })
                .collect::<String>();
            report!(ConfigError::InvalidField(
                path_str.trim_start_matches('.').to_string()
            ))
            .attach_printable(error.to_string())
        })
    }
}
