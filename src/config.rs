use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::MatchingDomain;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub fixtures: FixtureSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_domain")]
    pub domain: MatchingDomain,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self { domain: default_domain() }
    }
}

fn default_domain() -> MatchingDomain { MatchingDomain::Developer }

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureSettings {
    #[serde(default = "default_fixture_path")]
    pub path: String,
}

impl Default for FixtureSettings {
    fn default() -> Self {
        Self { path: default_fixture_path() }
    }
}

fn default_fixture_path() -> String { "data/roster.toml".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PROCONNECT_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PROCONNECT__SESSION__DOMAIN -> session.domain
            .add_source(
                Environment::with_prefix("PROCONNECT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PROCONNECT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Shorthand environment overrides
///
/// PROCONNECT_FIXTURES replaces fixtures.path, PROCONNECT_DOMAIN replaces session.domain.
fn apply_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(path) = env::var("PROCONNECT_FIXTURES") {
        builder = builder.set_override("fixtures.path", path)?;
    }
    if let Ok(domain) = env::var("PROCONNECT_DOMAIN") {
        builder = builder.set_override("session.domain", domain)?;
    }

    builder.build()
}
