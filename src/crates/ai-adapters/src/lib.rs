//! PatentPro request adapter
//!
//! One call in, one `generateContent` round trip out. The adapter shapes the
//! request, sends it through a [`GenerationTransport`] and normalizes the
//! answer into an [`AnalysisResult`]. Failures are logged and returned as-is.

pub mod client;
pub mod error;
pub mod request;
pub mod types;

pub use client::{api_key_from_env, GeminiClient, GenerationTransport, DEFAULT_BASE_URL};
pub use error::{GeminiError, GeminiResult};
pub use request::{
    build_generate_request, AdapterSettings, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    MAX_THINKING_BUDGET,
};
pub use types::EMPTY_RESPONSE_PLACEHOLDER;

use log::{debug, error, info};
use patentpro_core_types::{AnalysisResult, MediaAttachment, RequestConfig};
use std::time::Instant;

pub struct PatentTaskAdapter<T> {
    transport: T,
    settings: AdapterSettings,
}

impl<T: GenerationTransport> PatentTaskAdapter<T> {
    pub fn new(transport: T) -> Self {
        Self::with_settings(transport, AdapterSettings::default())
    }

    pub fn with_settings(transport: T, settings: AdapterSettings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    pub fn settings(&self) -> &AdapterSettings {
        &self.settings
    }

    pub async fn analyze_patent_task(
        &self,
        prompt: &str,
        system_instruction: &str,
        config: RequestConfig,
        attachments: &[MediaAttachment],
    ) -> GeminiResult<AnalysisResult> {
        let request =
            build_generate_request(prompt, system_instruction, config, attachments, &self.settings);
        debug!(
            target: "ai::gemini",
            "Gemini request: model={}, prompt_chars={}, attachments={}, thinking={}, search={}",
            self.settings.model,
            prompt.chars().count(),
            attachments.len(),
            config.enable_extended_reasoning,
            config.enable_external_retrieval
        );

        let started = Instant::now();
        let response = match self
            .transport
            .generate_content(&self.settings.model, &request)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!(target: "ai::gemini", "Gemini API Error: {}", e);
                return Err(e);
            }
        };

        if let Some(usage) = response.usage_metadata {
            info!(
                target: "ai::gemini",
                "Gemini response: elapsed_ms={}, prompt_tokens={:?}, thoughts_tokens={:?}, total_tokens={:?}",
                started.elapsed().as_millis(),
                usage.prompt_token_count,
                usage.thoughts_token_count,
                usage.total_token_count
            );
        }

        Ok(AnalysisResult::from(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GenerateContentRequest, GenerateContentResponse};
    use async_trait::async_trait;
    use std::sync::Mutex;

    enum Reply {
        Body(&'static str),
        Status(u16, &'static str),
    }

    struct ScriptedTransport {
        reply: Reply,
        seen: Mutex<Vec<(String, GenerateContentRequest)>>,
    }

    impl ScriptedTransport {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GenerationTransport for ScriptedTransport {
        async fn generate_content(
            &self,
            model: &str,
            request: &GenerateContentRequest,
        ) -> GeminiResult<GenerateContentResponse> {
            self.seen
                .lock()
                .unwrap()
                .push((model.to_string(), request.clone()));
            match self.reply {
                Reply::Body(body) => Ok(serde_json::from_str(body)?),
                Reply::Status(status, body) => Err(GeminiError::Status {
                    status,
                    body: body.to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn success_maps_text_and_sources() {
        let adapter = PatentTaskAdapter::new(ScriptedTransport::new(Reply::Body(
            r#"{
                "candidates": [{
                    "content": { "parts": [{ "text": "**分析报告**" }] },
                    "groundingMetadata": {
                        "groundingChunks": [{ "web": { "uri": "https://x.example", "title": "X" } }]
                    }
                }]
            }"#,
        )));

        let result = adapter
            .analyze_patent_task("prompt", "sys", RequestConfig::new(true, true), &[])
            .await
            .expect("analysis succeeds");

        assert_eq!(result.response_text, "**分析报告**");
        assert_eq!(result.grounding_sources.len(), 1);
        assert_eq!(result.grounding_sources[0].uri(), Some("https://x.example"));

        let seen = adapter.transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, DEFAULT_MODEL);
    }

    #[tokio::test]
    async fn empty_text_falls_back_to_placeholder() {
        let adapter = PatentTaskAdapter::new(ScriptedTransport::new(Reply::Body(
            r#"{ "candidates": [{ "content": { "parts": [] } }] }"#,
        )));

        let result = adapter
            .analyze_patent_task("prompt", "sys", RequestConfig::default(), &[])
            .await
            .expect("analysis succeeds");

        assert_eq!(result.response_text, EMPTY_RESPONSE_PLACEHOLDER);
        assert!(result.grounding_sources.is_empty());
    }

    #[tokio::test]
    async fn transport_error_is_returned_unchanged() {
        let adapter = PatentTaskAdapter::new(ScriptedTransport::new(Reply::Status(
            429,
            "RESOURCE_EXHAUSTED",
        )));

        let err = adapter
            .analyze_patent_task("prompt", "sys", RequestConfig::default(), &[])
            .await
            .expect_err("analysis fails");

        match err {
            GeminiError::Status { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "RESOURCE_EXHAUSTED");
            }
            other => panic!("unexpected error variant: {:?}", other),
        }
        assert_eq!(adapter.transport.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn identical_inputs_are_never_cached() {
        let adapter = PatentTaskAdapter::new(ScriptedTransport::new(Reply::Body(
            r#"{ "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }] }"#,
        )));

        for _ in 0..3 {
            adapter
                .analyze_patent_task("same", "same", RequestConfig::default(), &[])
                .await
                .expect("analysis succeeds");
        }

        assert_eq!(adapter.transport.seen.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn custom_settings_reach_the_transport() {
        let settings = AdapterSettings {
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.2,
            thinking_budget: 1024,
            include_thoughts: false,
        };
        let adapter = PatentTaskAdapter::with_settings(
            ScriptedTransport::new(Reply::Body(r#"{}"#)),
            settings,
        );

        adapter
            .analyze_patent_task("p", "s", RequestConfig::default(), &[])
            .await
            .expect("analysis succeeds");

        let seen = adapter.transport.seen.lock().unwrap();
        let (model, request) = &seen[0];
        assert_eq!(model, "gemini-2.5-flash");
        assert_eq!(request.generation_config.temperature, 0.2);
        assert_eq!(
            request
                .generation_config
                .thinking_config
                .map(|config| config.thinking_budget),
            Some(1024)
        );
    }
}
