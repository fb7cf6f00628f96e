//! Configuration, loaded once at startup from the environment.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::util::PollPolicy;

/// Default provider endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const DEFAULT_CLASSIFIER_MODEL: &str = "gpt-4";
const DEFAULT_BIND: &str = "127.0.0.1:8787";

/// Runtime configuration.
///
/// The provider credential stays inside the process: it is handed to the
/// provider layer and never serialized or echoed back to clients.
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider credential (`OPENAI_API_KEY`).
    pub api_key: String,
    /// Provider endpoint (`OPENAI_BASE_URL`).
    pub base_url: String,
    /// Model used for intent classification (`PARLOR_CLASSIFIER_MODEL`).
    pub classifier_model: String,
    /// Run polling cadence and bound.
    pub poll: PollPolicy,
    /// Listen address for the endpoint server (`PARLOR_BIND`).
    pub bind: String,
    /// Optional agents TOML file (`PARLOR_AGENTS`); built-in pair otherwise.
    pub agents_path: Option<PathBuf>,
}

impl Config {
    /// Load from environment variables, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| Error::Configuration("OPENAI_API_KEY is not set".into()))?;

        let mut poll = PollPolicy::default();
        if let Some(attempts) = env_parsed::<u32>("PARLOR_POLL_MAX_ATTEMPTS")? {
            poll.max_attempts = attempts;
        }
        if let Some(millis) = env_parsed::<u64>("PARLOR_POLL_INTERVAL_MS")? {
            poll.initial_interval = Duration::from_millis(millis);
        }
        if let Some(multiplier) = env_parsed::<f64>("PARLOR_POLL_MULTIPLIER")? {
            poll.multiplier = multiplier;
        }

        Ok(Self {
            api_key,
            base_url: env_or("OPENAI_BASE_URL", DEFAULT_BASE_URL),
            classifier_model: env_or("PARLOR_CLASSIFIER_MODEL", DEFAULT_CLASSIFIER_MODEL),
            poll,
            bind: env_or("PARLOR_BIND", DEFAULT_BIND),
            agents_path: std::env::var("PARLOR_AGENTS").ok().map(PathBuf::from),
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| Error::Configuration(format!("{name} has an invalid value: {raw}"))),
        Err(_) => Ok(None),
    }
}
