//! HTTP client for the `translate_a/single` endpoint

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::TranslationQuery;

/// Response sections requested in one call: alternatives, dictionary,
/// examples, language detection, definitions, spelling, transliteration,
/// synonyms and the translation itself
const DATA_TYPES: &[&str] = &["at", "bd", "ex", "ld", "md", "qca", "rw", "rm", "ss", "t", "dj"];

/// Build the request URL for a translation query
pub fn build_url(endpoint: &str, text: &str, from: &str, to: &str, client: &str) -> String {
    let data_types: String = DATA_TYPES.iter().map(|dt| format!("&dt={}", dt)).collect();

    format!(
        "{}?client={}&sl={}&tl={}&hl={}{}&ie=UTF-8&oe=UTF-8&otf=1&ssel=0&tsel=0&kc=7&q={}",
        endpoint,
        client,
        from,
        to,
        to,
        data_types,
        urlencoding::encode(text)
    )
}

/// Source of raw translation payloads
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Fetch the raw JSON payload for a query
    async fn fetch(&self, query: &TranslationQuery) -> Result<Value>;
}

/// Google Translate backend
#[derive(Debug, Clone)]
pub struct GoogleTranslateClient {
    client: reqwest::Client,
    config: Arc<TranslatorConfig>,
}

impl GoogleTranslateClient {
    /// Create a new client
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// URL for a query under this client's configuration
    pub fn url_for(&self, query: &TranslationQuery) -> String {
        build_url(
            &self.config.api_endpoint,
            &query.text,
            &query.source_lang,
            &query.target_lang,
            &self.config.client,
        )
    }
}

#[async_trait]
impl TranslationBackend for GoogleTranslateClient {
    async fn fetch(&self, query: &TranslationQuery) -> Result<Value> {
        let url = self.url_for(query);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let error_text = response.text().await.unwrap_or_default();
            warn!("Translation endpoint returned {}", status_code);

            return Err(TranslationError::ApiError {
                status: status_code,
                message: error_text,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_ENDPOINT;

    #[test]
    fn test_build_url_parameters() {
        let url = build_url(DEFAULT_ENDPOINT, "hello", "auto", "fr", "gtx");

        assert!(url.starts_with("https://translate.google.com/translate_a/single?client=gtx&"));
        assert!(url.contains("&sl=auto&"));
        assert!(url.contains("&tl=fr&"));
        assert!(url.contains("&hl=fr&"));
        assert!(url.contains(
            "&dt=at&dt=bd&dt=ex&dt=ld&dt=md&dt=qca&dt=rw&dt=rm&dt=ss&dt=t&dt=dj&"
        ));
        assert!(url.contains("&ie=UTF-8&oe=UTF-8&otf=1&ssel=0&tsel=0&kc=7&"));
        assert!(url.ends_with("&q=hello"));
    }

    #[test]
    fn test_build_url_encodes_text_once() {
        let url = build_url(DEFAULT_ENDPOINT, "cat & dog?=%", "en", "zh-CN", "gtx");
        assert!(url.ends_with("&q=cat%20%26%20dog%3F%3D%25"));
        assert!(url.contains("&tl=zh-CN&hl=zh-CN&"));

        let url = build_url(DEFAULT_ENDPOINT, "你好", "auto", "en", "gtx");
        assert!(url.ends_with("&q=%E4%BD%A0%E5%A5%BD"));
    }

    #[test]
    fn test_client_uses_config() {
        let config = TranslatorConfig {
            api_endpoint: "http://localhost:9/single".to_string(),
            client: "t".to_string(),
            ..Default::default()
        };
        let client = GoogleTranslateClient::new(config).unwrap();
        let query = TranslationQuery::new("hi", "ja");

        assert!(client
            .url_for(&query)
            .starts_with("http://localhost:9/single?client=t&sl=auto&tl=ja&hl=ja&"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        let config = TranslatorConfig {
            api_endpoint: "http://127.0.0.1:9/single".to_string(),
            timeout_ms: 500,
            ..Default::default()
        };
        let client = GoogleTranslateClient::new(config).unwrap();
        let err = client
            .fetch(&TranslationQuery::new("hi", "ja"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "NetworkError");
    }
}
