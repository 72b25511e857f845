//! Configuration loading from environment.

use std::env;

/// Application configuration.
pub struct Config {
    pub port: u16,
    /// flagd evaluation endpoint; flags resolve to their defaults when unset.
    pub flagd_url: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?;

        let flagd_url = env::var("FLAGD_URL").ok().filter(|url| !url.is_empty());

        Ok(Self { port, flagd_url })
    }
}
