use log::debug;
use std::time::Duration;
use thiserror::Error;

pub const API_KEY_VAR: &str = "FMP_API_KEY";
pub const FMP_URI: &str = "https://financialmodelingprep.com";

// Applies to connect and read combined.
const REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing {0} env var")]
    MissingApiKey(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub uri: String,
    pub apikey: String,
    pub symbol: String,
    pub interval: Duration,
    pub timeout: Duration,
}

impl Config {
    pub fn new(apikey: String, symbol: &str, interval_secs: u64) -> Config {
        Config {
            uri: FMP_URI.to_string(),
            apikey,
            symbol: symbol.to_string(),
            interval: Duration::from_secs(interval_secs),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Look up the provider api key through `lookup`, normally `std::env::var`.
///
/// An empty value is treated the same as an unset one.
pub fn resolve_api_key<F>(lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(API_KEY_VAR) {
        Some(key) if !key.trim().is_empty() => {
            debug!("{} resolved ({} chars)", API_KEY_VAR, key.len());
            Ok(key)
        }
        _ => Err(ConfigError::MissingApiKey(API_KEY_VAR)),
    }
}
