//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::errors::{Result, TranslationError};

/// Default translation endpoint
pub const DEFAULT_ENDPOINT: &str = "https://translate.google.com/translate_a/single";

/// Configuration for translator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub api_endpoint: String,
    /// Value of the `client` query parameter
    pub client: String,
    pub source_lang: String,
    /// Fallback target when no preference has been stored
    pub target_lang: String,
    pub throttle_ms: u64,
    pub timeout_ms: u64,
    pub user_agent: String,
    /// Directory holding the throttle slot and the preference file
    pub cache_dir: PathBuf,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            client: "gtx".to_string(),
            source_lang: "auto".to_string(),
            target_lang: "en".to_string(),
            throttle_ms: 1000,
            timeout_ms: 10000,
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            cache_dir: std::env::temp_dir().join("quick-translate"),
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let api_endpoint = std::env::var("TRANSLATE_ENDPOINT").unwrap_or(defaults.api_endpoint);
        let client = std::env::var("TRANSLATE_CLIENT").unwrap_or(defaults.client);
        let target_lang = std::env::var("TRANSLATE_TARGET_LANG").unwrap_or(defaults.target_lang);

        let throttle_ms = std::env::var("TRANSLATE_THROTTLE_MS")
            .unwrap_or_else(|_| defaults.throttle_ms.to_string())
            .parse::<u64>()?;

        let timeout_ms = std::env::var("TRANSLATE_TIMEOUT_MS")
            .unwrap_or_else(|_| defaults.timeout_ms.to_string())
            .parse::<u64>()?;

        let cache_dir = std::env::var("TRANSLATE_CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.cache_dir);

        Ok(Self {
            api_endpoint,
            client,
            source_lang: defaults.source_lang,
            target_lang,
            throttle_ms,
            timeout_ms,
            user_agent: defaults.user_agent,
            cache_dir,
        })
    }

    /// Load from JSON file if given, environment otherwise, then validate
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::from_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_endpoint.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "API endpoint is required".to_string(),
            });
        }

        if self.client.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "client is required".to_string(),
            });
        }

        if self.target_lang.is_empty() {
            return Err(TranslationError::ConfigError {
                message: "target_lang must not be empty".to_string(),
            });
        }

        if self.timeout_ms == 0 {
            return Err(TranslationError::ConfigError {
                message: "timeout_ms must be greater than 0".to_string(),
            });
        }

        if self.throttle_ms == 0 {
            warn!("Throttle disabled, every keystroke will hit the endpoint");
        }

        Ok(())
    }

    /// File holding the throttle slot
    pub fn throttle_path(&self) -> PathBuf {
        self.cache_dir.join("throttle")
    }

    /// File holding persisted preferences
    pub fn preferences_path(&self) -> PathBuf {
        self.cache_dir.join("preferences.json")
    }
}
