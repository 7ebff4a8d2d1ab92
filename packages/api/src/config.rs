//! Remote service configuration from environment variables.

use thiserror::Error;

/// Environment variable naming the service endpoint.
pub const SERVICE_URL_VAR: &str = "COURSEHUB_SERVICE_URL";
/// Environment variable naming the public API key.
pub const SERVICE_KEY_VAR: &str = "COURSEHUB_SERVICE_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),
}

/// The two values every request to the Remote Data Service needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base URL of the hosted service, without a trailing slash.
    pub service_url: String,
    /// Public (anonymous-role) API key sent with every request.
    pub service_key: String,
}

impl ServiceConfig {
    /// Read the configuration, failing fast with the name of whatever is
    /// missing rather than proceeding with null credentials.
    ///
    /// On native targets the process environment wins (with `.env` support);
    /// compile-time values are the fallback. On wasm only the compile-time
    /// values exist — they are baked into the bundle at build time, the same
    /// way the hosted service's browser SDKs inline their public config.
    pub fn from_env() -> Result<Self, ConfigError> {
        let service_url = read_var(SERVICE_URL_VAR, option_env!("COURSEHUB_SERVICE_URL"))?;
        let service_key = read_var(SERVICE_KEY_VAR, option_env!("COURSEHUB_SERVICE_KEY"))?;

        Ok(Self {
            service_url: service_url.trim_end_matches('/').to_string(),
            service_key,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_var(name: &'static str, baked: Option<&'static str>) -> Result<String, ConfigError> {
    dotenvy::dotenv().ok();

    std::env::var(name)
        .ok()
        .or_else(|| baked.map(str::to_string))
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

#[cfg(target_arch = "wasm32")]
fn read_var(name: &'static str, baked: Option<&'static str>) -> Result<String, ConfigError> {
    baked
        .map(str::to_string)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}
