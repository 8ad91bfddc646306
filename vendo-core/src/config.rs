use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub application: ApplicationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationConfig {
    pub name: String,
    pub version: String,
    pub environment: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Environment-specific file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // E.g. `VENDO__SERVER__PORT=9090`
            .add_source(config::Environment::with_prefix("VENDO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

/// Application identity, fixed once loaded. Consumers receive it by value
/// or reference instead of reaching for a global registry.
#[derive(Debug, Clone)]
pub struct AppInfo {
    name: String,
    version: String,
    environment: String,
}

impl AppInfo {
    pub fn new(name: String, version: String, environment: String) -> Self {
        Self {
            name,
            version,
            environment,
        }
    }

    pub fn from_config(config: &ApplicationConfig) -> Self {
        Self::new(
            config.name.clone(),
            config.version.clone(),
            config.environment.clone(),
        )
    }

    /// Looks up a property by key over the fixed key set. Unrecognized keys
    /// answer with a sentinel string rather than failing.
    pub fn property(&self, key: &str) -> String {
        match key.to_lowercase().as_str() {
            "name" | "application" | "application.name" => self.name.clone(),
            "version" | "application.version" => self.version.clone(),
            "environment" | "application.environment" => self.environment.clone(),
            other => format!("property not found: {}", other),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// One-line identity report.
    pub fn summary(&self) -> String {
        format!(
            "Application: {} | Version: {} | Environment: {}",
            self.name, self.version, self.environment
        )
    }
}
