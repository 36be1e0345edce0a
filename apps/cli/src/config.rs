use anyhow::{Context, Result};
use reqwest::Url;

/// Production optimisation endpoint, used when `OPTIMISER_ENDPOINT` is unset.
const DEFAULT_ENDPOINT: &str =
    "https://us-central1-medicaltextoptimiser.cloudfunctions.net/translate";

/// Configuration loaded from the environment at startup. A malformed endpoint
/// aborts here rather than surfacing as a runtime call failure.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: Url,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let endpoint =
            std::env::var("OPTIMISER_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let endpoint = Url::parse(&endpoint)
            .with_context(|| format!("OPTIMISER_ENDPOINT is not a valid URL: '{endpoint}'"))?;

        Ok(Config {
            endpoint,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
