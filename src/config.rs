use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8787";
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api.llama.fi";

/// Runtime settings for the service.
///
/// Values come from the process environment (a `.env` file is loaded first
/// by `main`), falling back to the defaults above.
///
/// # Fields
/// * `listen_addr`: Socket address the HTTP server binds to (`TVL_LISTEN_ADDR`)
/// * `upstream_base_url`: Base of the upstream protocol API, without trailing slash (`LLAMA_API_BASE_URL`)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub upstream_base_url: String,
}

impl Config {
    /// Builds the configuration from environment variables.
    ///
    /// # Errors
    /// Returns an error if `TVL_LISTEN_ADDR` is set but is not a valid socket address
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let listen = lookup("TVL_LISTEN_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen
            .trim()
            .parse()
            .with_context(|| format!("TVL_LISTEN_ADDR is not a valid socket address: {listen}"))?;

        let upstream_base_url = lookup("LLAMA_API_BASE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_UPSTREAM_BASE_URL.to_string());

        Ok(Self {
            listen_addr,
            upstream_base_url,
        })
    }
}
