use std::{env, net::SocketAddr, path::Path, sync::OnceLock};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
///
/// Contains all configuration settings for the catalog service,
/// including server, catalog and tracing settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Distribution metadata configuration
    pub distribution: DistributionConfig,
    /// Server configuration settings
    pub server: ServerConfig,
    /// Catalog store configuration
    pub catalog: CatalogConfig,
    /// Tracing configuration
    pub tracing: TracingConfig,
}

/// Server configuration settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// GraphQL HTTP server bind address
    pub http_address: SocketAddr,
}

/// Catalog store configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Whether to populate the store with the built-in authors and books
    pub seed: bool,
    /// Whether books must reference an existing author on add and update
    pub enforce_author_references: bool,
}

/// Tracing configuration.
///
/// Controls how tracing data is output from the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum TracingConfig {
    /// Log events only, spans are not exported
    Memory,
    /// Standard output span exporter
    Stdout,
}

/// Distribution metadata configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DistributionConfig {
    /// Distribution name
    pub name: String,
    /// Distribution version
    pub version: Option<String>,
}

const CONFIG_PATH_ENV: &str = "CATALOG_CONFIG_PATH";
const ENV_PREFIX: &str = "CATALOG";
const VERSION: &str = env!("CARGO_PKG_VERSION");

const DISTRIBUTION_NAME_KEY: &str = "distribution.name";
const DISTRIBUTION_VERSION_KEY: &str = "distribution.version";
const SERVER_HTTP_ADDRESS_KEY: &str = "server.http_address";
const CATALOG_SEED_KEY: &str = "catalog.seed";
const CATALOG_ENFORCE_AUTHOR_REFERENCES_KEY: &str = "catalog.enforce_author_references";
const TRACING_KIND_KEY: &str = "tracing.kind";

impl AppConfig {
    /// Gets the global application configuration instance.
    ///
    /// Uses a static `OnceLock` to ensure the configuration is loaded only once.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration cannot be loaded.
    pub fn get() -> &'static Self {
        static INSTANCE: OnceLock<AppConfig> = OnceLock::new();
        INSTANCE.get_or_init(|| Self::load().unwrap())
    }

    /// Loads configuration from defaults, files and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load() -> AppResult<Self> {
        Self::load_from(
            env::var(CONFIG_PATH_ENV).ok().as_deref(),
            Environment::with_prefix(ENV_PREFIX).separator("__"),
        )
    }

    /// Loads configuration from the files under `config_path` and the given
    /// environment source.
    ///
    /// Without a `config_path` files are looked up in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load_from(config_path: Option<&str>, environment: Environment) -> AppResult<Self> {
        let config_dir = Path::new(config_path.unwrap_or("config"));

        let mut config_builder = Config::builder()
            .set_default(DISTRIBUTION_NAME_KEY, "catalog-service")?
            .set_default(DISTRIBUTION_VERSION_KEY, VERSION)?
            .set_default(SERVER_HTTP_ADDRESS_KEY, "0.0.0.0:5000")?
            .set_default(CATALOG_SEED_KEY, true)?
            .set_default(CATALOG_ENFORCE_AUTHOR_REFERENCES_KEY, false)?
            .set_default(TRACING_KIND_KEY, "Stdout")?;

        // Initial "default" configuration file
        let default_path = config_dir.join("default");
        config_builder = config_builder
            .add_source(File::with_name(&default_path.to_string_lossy()).required(false));

        // Add in a local configuration file
        // This file shouldn't be checked in to git
        let local_path = config_dir.join("local");
        config_builder = config_builder
            .add_source(File::with_name(&local_path.to_string_lossy()).required(false));

        // Add override settings file.
        if let Some(override_path) = config_path {
            config_builder =
                config_builder.add_source(File::with_name(override_path).required(false));
        }

        // Add in settings from the environment (with a prefix of CATALOG)
        config_builder = config_builder.add_source(environment);

        Ok(config_builder.build()?.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use config::Map;

    use super::*;

    const MISSING_CONFIG_PATH: &str = "missing-config-dir";

    fn environment<const N: usize>(vars: [(&str, &str); N]) -> Environment {
        let source: Map<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .source(Some(source))
    }

    #[test]
    fn load_defaults() {
        let config = AppConfig::load_from(Some(MISSING_CONFIG_PATH), environment([])).unwrap();
        assert_eq!(config.distribution.name, "catalog-service");
        assert_eq!(config.distribution.version.as_deref(), Some(VERSION));
        assert_eq!(config.server.http_address, "0.0.0.0:5000".parse().unwrap());
        assert!(config.catalog.seed);
        assert!(!config.catalog.enforce_author_references);
        assert!(matches!(config.tracing, TracingConfig::Stdout));
    }

    #[test]
    fn environment_overrides() {
        let config = AppConfig::load_from(
            Some(MISSING_CONFIG_PATH),
            environment([
                ("CATALOG__SERVER__HTTP_ADDRESS", "127.0.0.1:8080"),
                ("CATALOG__CATALOG__SEED", "false"),
                ("CATALOG__CATALOG__ENFORCE_AUTHOR_REFERENCES", "true"),
                ("CATALOG__TRACING__KIND", "Memory"),
            ]),
        )
        .unwrap();
        assert_eq!(config.server.http_address, "127.0.0.1:8080".parse().unwrap());
        assert!(!config.catalog.seed);
        assert!(config.catalog.enforce_author_references);
        assert!(matches!(config.tracing, TracingConfig::Memory));
    }
}
