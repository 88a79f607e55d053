use anyhow::Result;
use chrono_tz::Tz;
use config::{Config, ConfigBuilder, FileFormat, builder::DefaultState};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub time: TimeConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeConfig {
    /// IANA zone name used instead of the host zone, e.g. `Asia/Kolkata`.
    pub zone: Option<String>,
}

impl TimeConfig {
    /// ## Summary
    /// Resolves the configured zone name, if any.
    ///
    /// ## Errors
    /// Returns `CoreError::UnknownTimezone` if the name is not a known IANA zone.
    pub fn resolve_zone(&self) -> CoreResult<Option<Tz>> {
        self.zone
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_e| CoreError::UnknownTimezone(name.to_string()))
            })
            .transpose()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads `Settings` from an optional `config.toml` overlaid by environment
    /// variables. `TIME_ZONE=Asia/Kolkata` sets `time.zone`; an environment
    /// value wins over the same key in the file.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::layered(
            config::File::with_name("config.toml").required(false),
            Self::environment(),
        )
    }

    fn environment() -> config::Environment {
        config::Environment::default()
            .convert_case(config::Case::Snake)
            .separator("_")
            .ignore_empty(true)
            .try_parsing(true)
    }

    fn layered<F>(file: F, environment: config::Environment) -> Result<Self>
    where
        F: config::Source + Send + Sync + 'static,
    {
        Ok(Self::builder()?
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Builds a `Settings` from TOML text layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the TOML is malformed or does not match `Settings`.
    pub fn from_toml(toml: &str) -> Result<Self> {
        Ok(Self::builder()?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder().set_default("logging.level", "debug")?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
