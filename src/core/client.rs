//! Async translation client
//!
//! One call to [`TranslationClient::translate`] is one HTTP exchange: no
//! retries, no caching and no fallback endpoint. The client holds no mutable
//! state, so clones can be shared freely and concurrent calls race
//! independently.

use std::time::Duration;
use tracing::{debug, warn};

use crate::core::config::{EndpointConfig, TranslatorConfig};
use crate::core::errors::{Result, TranslationError};
use crate::core::models::TranslationRequest;
use crate::core::response::interpret_body;

/// Client for a LibreTranslate-compatible translation endpoint
#[derive(Debug, Clone)]
pub struct TranslationClient {
    client: reqwest::Client,
    endpoint: EndpointConfig,
}

impl TranslationClient {
    /// Create a new client
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .build()
            .map_err(|e| TranslationError::ConfigError {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }

    /// Endpoint this client talks to
    pub fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }

    /// Translate `text` from `source_lang` (a code or `auto`) into `target_lang`
    pub async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        let request = TranslationRequest::new(text, target_lang)?.with_source_lang(source_lang);
        self.translate_request(&request).await
    }

    /// Send a prepared request and interpret the response
    pub async fn translate_request(&self, request: &TranslationRequest) -> Result<String> {
        let http_request = self.build_request(request)?;

        debug!(
            "POST {} ({} -> {}, {} chars)",
            http_request.url(),
            request.source_lang,
            request.target_lang,
            request.text.chars().count()
        );

        let response = self.client.execute(http_request).await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Translation API returned {}", status);
            return Err(TranslationError::HttpFailure {
                status: status.as_u16(),
                body,
            });
        }

        Ok(interpret_body(&body))
    }

    /// Build the outbound POST without sending it
    pub fn build_request(&self, request: &TranslationRequest) -> Result<reqwest::Request> {
        let mut builder = self.client.post(self.endpoint.resolved_url()).json(request);

        if let Some(authorization) = self.endpoint.authorization() {
            builder = builder.header(reqwest::header::AUTHORIZATION, authorization);
        }

        builder.build().map_err(|e| TranslationError::ConfigError {
            message: format!("invalid request for {}: {}", self.endpoint.resolved_url(), e),
        })
    }
}
