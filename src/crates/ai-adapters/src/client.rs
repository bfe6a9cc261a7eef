//! Gemini HTTP transport

use crate::error::{GeminiError, GeminiResult};
use crate::types::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use log::{debug, trace};
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use std::sync::Arc;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Environment variables searched for the API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

const API_KEY_HEADER: &str = "x-goog-api-key";

/// One `generateContent` round trip.
#[async_trait]
pub trait GenerationTransport: Send + Sync {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse>;
}

#[async_trait]
impl<T: GenerationTransport + ?Sized> GenerationTransport for Arc<T> {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse> {
        (**self).generate_content(model, request).await
    }
}

type KeyLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

pub fn api_key_from_env() -> Option<String> {
    api_key_from(|name| std::env::var(name).ok())
}

/// First non-blank value of [`API_KEY_ENV_VARS`] as answered by `lookup`.
pub fn api_key_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| lookup(*name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// reqwest-backed transport for the public Gemini REST API.
///
/// Unless a key is pinned with [`GeminiClient::with_api_key`], the key is
/// looked up on every call, from the environment by default.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    key_lookup: KeyLookup,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
            key_lookup: Arc::new(|name| std::env::var(name).ok()),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Replaces the environment as the source of [`API_KEY_ENV_VARS`].
    pub fn with_key_lookup(
        mut self,
        lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.key_lookup = Arc::new(lookup);
        self
    }

    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    fn resolve_api_key(&self) -> GeminiResult<String> {
        self.api_key
            .clone()
            .or_else(|| api_key_from(|name| (self.key_lookup)(name)))
            .ok_or(GeminiError::MissingApiKey)
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl GenerationTransport for GeminiClient {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse> {
        let api_key = self.resolve_api_key()?;
        let url = self.endpoint(model);
        debug!(target: "ai::gemini", "POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, concat!("patentpro/", env!("CARGO_PKG_VERSION")))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        trace!(target: "ai::gemini", "Gemini raw response: status={}, body={}", status, body);

        if !status.is_success() {
            return Err(GeminiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
