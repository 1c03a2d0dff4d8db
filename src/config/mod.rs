mod types;

pub use types::*;

use crate::Result;
use std::{env, io::ErrorKind, path::Path};
use tracing::debug;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    load_from(&config_path, env::var(API_KEY_ENV).ok()).await
}

/// Reads the YAML file at `path` (defaults if it does not exist) and applies
/// the API key override.
pub async fn load_from(path: impl AsRef<Path>, api_key: Option<String>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let mut config = match tokio::fs::read_to_string(path).await {
        Ok(config_str) => serde_yaml::from_str::<Config>(&config_str)?,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No configuration file at {}, using defaults", path.display());
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(key) = api_key {
        config.llm.api_key = key;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let config = load_from("/nonexistent/genpages.yaml", None).await.unwrap();

        assert_eq!(config.server.port, 1700);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.llm.provider, LlmProvider::Gemini);
        assert_eq!(config.llm.model, "gemini-2.5-flash-lite");
        assert_eq!(config.qr, QrConfig::default());
        assert!(config.llm.api_key.is_empty());
    }

    #[tokio::test]
    async fn test_env_key_overrides_default() {
        let config = load_from("/nonexistent/genpages.yaml", Some("env-key".to_string()))
            .await
            .unwrap();

        assert_eq!(config.llm.api_key, "env-key");
    }
}
