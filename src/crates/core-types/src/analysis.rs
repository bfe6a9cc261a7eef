use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Feature flags for a single generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestConfig {
    /// Adds the maximum reasoning budget to the request.
    #[serde(default = "default_extended_reasoning")]
    pub enable_extended_reasoning: bool,
    /// Adds the web search tool to the request.
    #[serde(default)]
    pub enable_external_retrieval: bool,
}

fn default_extended_reasoning() -> bool {
    true
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            enable_extended_reasoning: true,
            enable_external_retrieval: false,
        }
    }
}

impl RequestConfig {
    pub fn new(enable_extended_reasoning: bool, enable_external_retrieval: bool) -> Self {
        Self {
            enable_extended_reasoning,
            enable_external_retrieval,
        }
    }
}

/// One grounding chunk returned by the model service.
///
/// The record is kept as the raw JSON the service sent; nothing is validated.
/// Chunks without a `web` object render with empty uri/title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroundingSource(pub Value);

impl GroundingSource {
    pub fn uri(&self) -> Option<&str> {
        self.0.pointer("/web/uri").and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.0.pointer("/web/title").and_then(Value::as_str)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }
}

/// Normalized outcome of one adapter call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub response_text: String,
    #[serde(default)]
    pub grounding_sources: Vec<GroundingSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_trace: Option<String>,
}
