mod types;

pub use types::*;

use crate::Result;
use std::env;
use std::io::ErrorKind;
use tracing::debug;

/// Environment variable holding the Gemini API key, matching the name used
/// by Google's own tooling.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(&config_path).await
}

pub async fn load_from(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let mut config = match tokio::fs::read_to_string(path).await {
        Ok(raw) => serde_yaml::from_str(&raw)?,
        // The studio runs fine with defaults alone; only the credential is
        // genuinely required, and that is resolved separately below.
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    config.gemini.api_key = resolve_api_key(config.gemini.api_key);

    Ok(config)
}

/// Resolves the API key from the two supported sources: a key configured in
/// the config file wins; otherwise the `GOOGLE_API_KEY` variable is read
/// from the process environment after loading a local `.env` file. Neither
/// source being present yields an empty key; the remote API then rejects
/// the call at invocation time, which is the only validation performed.
fn resolve_api_key(configured: String) -> String {
    if !configured.trim().is_empty() {
        return configured;
    }

    dotenvy::dotenv().ok();
    env::var(API_KEY_VAR).unwrap_or_default()
}
