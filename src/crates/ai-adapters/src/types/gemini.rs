//! Gemini `generateContent` wire types
//!
//! Request types only serialize, response types only deserialize. Response
//! parts are decoded loosely so that unknown part kinds (function calls,
//! executable code) never fail the whole response.

use patentpro_core_types::{AnalysisResult, GroundingSource, MediaAttachment};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shown instead of an empty answer.
pub const EMPTY_RESPONSE_PLACEHOLDER: &str = "未能生成有效响应。";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
    pub generation_config: GenerationConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts,
        }
    }

    pub fn system(text: &str) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

impl Part {
    pub fn text(text: &str) -> Self {
        Part::Text {
            text: text.to_string(),
        }
    }

    pub fn is_inline_data(&self) -> bool {
        matches!(self, Part::InlineData { .. })
    }
}

impl From<&MediaAttachment> for Part {
    fn from(attachment: &MediaAttachment) -> Self {
        Part::InlineData {
            inline_data: InlineData {
                data: attachment.payload.clone(),
                mime_type: attachment.mime_type.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub data: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_config: Option<ThinkingConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    pub thinking_budget: u32,
    /// Asks the service to return thought summaries alongside the answer.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_thoughts: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub google_search: GoogleSearch,
}

impl Tool {
    pub fn google_search() -> Self {
        Self {
            google_search: GoogleSearch {},
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GoogleSearch {}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
    #[serde(default)]
    pub model_version: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<ResponseContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
    #[allow(dead_code)]
    #[serde(default)]
    role: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub thought: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<Value>,
    #[serde(default)]
    pub web_search_queries: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: Option<u32>,
    #[serde(default)]
    pub candidates_token_count: Option<u32>,
    #[serde(default)]
    pub thoughts_token_count: Option<u32>,
    #[serde(default)]
    pub total_token_count: Option<u32>,
}

impl GenerateContentResponse {
    fn first_parts(&self) -> impl Iterator<Item = &ResponsePart> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| content.parts.iter())
            .into_iter()
            .flatten()
    }

    /// Answer text of the first candidate, thought parts excluded.
    pub fn text(&self) -> Option<String> {
        join_parts(self.first_parts().filter(|part| !part.thought))
    }

    pub fn thought_text(&self) -> Option<String> {
        join_parts(self.first_parts().filter(|part| part.thought))
    }

    pub fn grounding_chunks(&self) -> &[Value] {
        self.candidates
            .first()
            .and_then(|candidate| candidate.grounding_metadata.as_ref())
            .map(|metadata| metadata.grounding_chunks.as_slice())
            .unwrap_or(&[])
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.finish_reason.as_deref())
    }
}

fn join_parts<'a>(parts: impl Iterator<Item = &'a ResponsePart>) -> Option<String> {
    let mut found = false;
    let mut joined = String::new();
    for text in parts.filter_map(|part| part.text.as_deref()) {
        found = true;
        joined.push_str(text);
    }
    found.then_some(joined)
}

impl From<GenerateContentResponse> for AnalysisResult {
    fn from(response: GenerateContentResponse) -> Self {
        let response_text = response
            .text()
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| EMPTY_RESPONSE_PLACEHOLDER.to_string());
        let grounding_sources = response
            .grounding_chunks()
            .iter()
            .cloned()
            .map(GroundingSource)
            .collect();

        Self {
            response_text,
            grounding_sources,
            reasoning_trace: response.thought_text().filter(|text| !text.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> GenerateContentResponse {
        serde_json::from_str(raw).expect("parse response")
    }

    #[test]
    fn text_skips_thought_parts() {
        let response = parse(
            r#"{
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [
                            { "text": "weighing D1 against D2", "thought": true },
                            { "text": "第一部分" },
                            { "text": "第二部分" }
                        ]
                    },
                    "finishReason": "STOP"
                }]
            }"#,
        );

        assert_eq!(response.text().as_deref(), Some("第一部分第二部分"));
        assert_eq!(
            response.thought_text().as_deref(),
            Some("weighing D1 against D2")
        );
        assert_eq!(response.finish_reason(), Some("STOP"));
    }

    #[test]
    fn unknown_part_kinds_do_not_fail_decoding() {
        let response = parse(
            r#"{
                "candidates": [{
                    "content": {
                        "parts": [
                            { "functionCall": { "name": "noop", "args": {} } },
                            { "text": "answer", "thoughtSignature": "abc" }
                        ]
                    }
                }]
            }"#,
        );
        assert_eq!(response.text().as_deref(), Some("answer"));
    }

    #[test]
    fn empty_response_maps_to_placeholder() {
        let result = AnalysisResult::from(parse(r#"{}"#));
        assert_eq!(result.response_text, EMPTY_RESPONSE_PLACEHOLDER);
        assert!(result.grounding_sources.is_empty());
        assert!(result.reasoning_trace.is_none());

        let result = AnalysisResult::from(parse(
            r#"{ "candidates": [{ "content": { "parts": [{ "text": "" }] } }] }"#,
        ));
        assert_eq!(result.response_text, EMPTY_RESPONSE_PLACEHOLDER);
    }

    #[test]
    fn grounding_chunks_are_kept_verbatim_and_in_order() {
        let result = AnalysisResult::from(parse(
            r#"{
                "candidates": [{
                    "content": { "parts": [{ "text": "ok" }] },
                    "groundingMetadata": {
                        "webSearchQueries": ["heat exchanger battery"],
                        "groundingChunks": [
                            { "web": { "uri": "https://a.example", "title": "A" } },
                            { "retrievedContext": { "uri": "gs://bucket/doc" } },
                            { "web": { "uri": "https://b.example", "title": "B" } }
                        ]
                    }
                }]
            }"#,
        ));

        assert_eq!(result.grounding_sources.len(), 3);
        assert_eq!(result.grounding_sources[0].uri(), Some("https://a.example"));
        assert_eq!(result.grounding_sources[1].uri(), None);
        assert_eq!(result.grounding_sources[2].title(), Some("B"));
    }
}
