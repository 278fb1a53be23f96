//! The launcher action: throttle, fetch, format, and error mapping

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::core::client::{GoogleTranslateClient, TranslationBackend};
use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{ResultItem, TranslationQuery, TranslationResponse};
use crate::core::store::{
    FileSlotStore, JsonPreferenceStore, PreferenceStore, SlotStore, PREFERRED_LANGUAGE,
};
use crate::core::throttle::Throttle;
use crate::processors::{formatter, languages};

/// Title used when an error carries no message
pub const DEFAULT_ERROR_MESSAGE: &str = "这个我是在翻译不了";
pub const ERROR_ICON: &str = "😵";
pub const NOT_FOUND_MESSAGE: &str = "没有找到翻译结果";
pub const NOT_FOUND_ICON: &str = "🤷";

/// Entry points the launcher invokes
pub struct TranslateAction {
    backend: Arc<dyn TranslationBackend>,
    throttle: Throttle,
    preferences: Arc<dyn PreferenceStore>,
    config: Arc<TranslatorConfig>,
}

impl TranslateAction {
    pub fn new(
        config: TranslatorConfig,
        backend: Arc<dyn TranslationBackend>,
        slot: Arc<dyn SlotStore>,
        preferences: Arc<dyn PreferenceStore>,
    ) -> Self {
        let throttle = Throttle::new(slot, Duration::from_millis(config.throttle_ms));
        Self {
            backend,
            throttle,
            preferences,
            config: Arc::new(config),
        }
    }

    /// Wire up the HTTP backend and file-backed stores from configuration
    pub fn from_config(config: TranslatorConfig) -> Result<Self> {
        let backend = Arc::new(GoogleTranslateClient::new(config.clone())?);
        let slot = Arc::new(FileSlotStore::new(config.throttle_path()));
        let preferences = Arc::new(JsonPreferenceStore::new(config.preferences_path()));
        Ok(Self::new(config, backend, slot, preferences))
    }

    /// Handle a raw launcher argument.
    ///
    /// `None` means nothing should be shown: the argument was empty or a
    /// newer invocation superseded this one.
    pub async fn run(&self, argument: &str) -> Option<Vec<ResultItem>> {
        if argument.trim().is_empty() {
            return None;
        }

        match self.throttle.allow().await {
            Ok(true) => {}
            Ok(false) => {
                debug!("Dropping superseded invocation");
                return None;
            }
            Err(e) => return Some(error_items(&e)),
        }

        let source_lang = self.config.source_lang.clone();
        Some(
            self.translate(argument, &source_lang, None)
                .await
                .unwrap_or_else(|e| error_items(&e)),
        )
    }

    /// Translate into a language picked from the menu.
    ///
    /// With `remember` set the language also becomes the default target.
    pub async fn trans(&self, text: &str, to: &str, remember: bool) -> Vec<ResultItem> {
        if remember {
            match self.preferences.set(PREFERRED_LANGUAGE, to) {
                Ok(()) => info!("Default target language set to {}", to),
                Err(e) => warn!("Failed to save preferred language: {}", e),
            }
        }

        let source_lang = self.config.source_lang.clone();
        self.translate(text, &source_lang, Some(to))
            .await
            .unwrap_or_else(|e| error_items(&e))
    }

    /// Translate text and build the full result list
    pub async fn translate(&self, text: &str, from: &str, to: Option<&str>) -> Result<Vec<ResultItem>> {
        let target_lang = match to {
            Some(to) => to.to_string(),
            None => self.preferred_target(),
        };
        let query = TranslationQuery::new(text, target_lang).with_source_lang(from);
        debug!("Translating {:?} {} -> {}", query.text, query.source_lang, query.target_lang);

        let payload = self.backend.fetch(&query).await?;
        if payload.is_null() || payload.as_array().map_or(false, |fields| fields.is_empty()) {
            return Err(TranslationError::EmptyResponse);
        }

        let response = TranslationResponse::from_value(&payload)?;
        if response.is_empty() {
            return Err(TranslationError::EmptyResponse);
        }
        if let Some(detected) = &response.detected_source_lang {
            debug!("Detected source language: {}", detected);
        }

        let mut items = formatter::format(&response);
        if items.is_empty() {
            return Err(TranslationError::EmptyResponse);
        }
        items.extend(languages::build_menu(text));
        Ok(items)
    }

    fn preferred_target(&self) -> String {
        match self.preferences.get(PREFERRED_LANGUAGE) {
            Ok(Some(lang)) if !lang.is_empty() => lang,
            Ok(_) => self.config.target_lang.clone(),
            Err(e) => {
                warn!("Failed to read preferred language: {}", e);
                self.config.target_lang.clone()
            }
        }
    }
}

/// The single item shown in place of results when translating failed
pub fn error_items(error: &TranslationError) -> Vec<ResultItem> {
    if matches!(error, TranslationError::EmptyResponse) {
        return vec![ResultItem::new(NOT_FOUND_MESSAGE).with_icon(NOT_FOUND_ICON)];
    }

    warn!("Translation failed: {}", error);
    let message = error.to_string();
    let title = if message.trim().is_empty() {
        DEFAULT_ERROR_MESSAGE.to_string()
    } else {
        message
    };

    vec![ResultItem::new(title)
        .with_icon(ERROR_ICON)
        .with_label(error.kind())]
}
