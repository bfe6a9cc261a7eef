//! Request shaping
//!
//! Turns a prompt, a system instruction, feature flags and attachments into a
//! `generateContent` body. Pure; no I/O.

use crate::types::{Content, GenerateContentRequest, GenerationConfig, Part, ThinkingConfig, Tool};
use patentpro_core_types::{MediaAttachment, RequestConfig};

pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
/// Largest thinking budget accepted by `gemini-3-pro-preview`.
pub const MAX_THINKING_BUDGET: u32 = 32768;

/// Fixed knobs of the adapter. Defaults match the hosted model's limits.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterSettings {
    pub model: String,
    pub temperature: f64,
    pub thinking_budget: u32,
    /// Request thought summaries; they end up in `AnalysisResult::reasoning_trace`.
    pub include_thoughts: bool,
}

impl Default for AdapterSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            thinking_budget: MAX_THINKING_BUDGET,
            include_thoughts: false,
        }
    }
}

pub fn build_generate_request(
    prompt: &str,
    system_instruction: &str,
    config: RequestConfig,
    attachments: &[MediaAttachment],
    settings: &AdapterSettings,
) -> GenerateContentRequest {
    let mut parts = Vec::with_capacity(attachments.len() + 1);
    parts.push(Part::text(prompt));
    parts.extend(attachments.iter().map(Part::from));

    let thinking_config = config
        .enable_extended_reasoning
        .then_some(ThinkingConfig {
            thinking_budget: settings.thinking_budget,
            include_thoughts: settings.include_thoughts,
        });

    let tools = config
        .enable_external_retrieval
        .then(|| vec![Tool::google_search()]);

    GenerateContentRequest {
        contents: vec![Content::user(parts)],
        system_instruction: Content::system(system_instruction),
        generation_config: GenerationConfig {
            temperature: settings.temperature,
            thinking_config,
        },
        tools,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InlineData;
    use serde_json::Value;

    fn to_json(request: &GenerateContentRequest) -> Value {
        serde_json::to_value(request).expect("serialize request")
    }

    #[test]
    fn prompt_without_attachments_is_a_single_text_part() {
        let request = build_generate_request(
            "分析权利要求1",
            "你是专利代理人",
            RequestConfig::default(),
            &[],
            &AdapterSettings::default(),
        );

        assert_eq!(request.contents.len(), 1);
        let parts = &request.contents[0].parts;
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0], Part::text("分析权利要求1"));
        assert!(!parts.iter().any(Part::is_inline_data));

        let json = to_json(&request);
        assert_eq!(json["contents"][0]["parts"][0]["text"], "分析权利要求1");
        assert!(json["contents"][0]["parts"][0].get("inlineData").is_none());
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "你是专利代理人");
        assert_eq!(json["generationConfig"]["temperature"], 0.7);
    }

    #[test]
    fn attachments_follow_prompt_in_input_order() {
        let attachments = vec![
            MediaAttachment::new("QUFBQQ==", "application/pdf"),
            MediaAttachment::new("QkJCQg==", "image/png"),
            MediaAttachment::new("QUFBQQ==", "application/pdf"),
        ];
        let request = build_generate_request(
            "compare",
            "sys",
            RequestConfig::default(),
            &attachments,
            &AdapterSettings::default(),
        );

        let parts = &request.contents[0].parts;
        assert_eq!(parts.len(), attachments.len() + 1);
        assert_eq!(parts[0], Part::text("compare"));
        for (part, attachment) in parts[1..].iter().zip(&attachments) {
            assert_eq!(
                part,
                &Part::InlineData {
                    inline_data: InlineData {
                        data: attachment.payload.clone(),
                        mime_type: attachment.mime_type.clone(),
                    }
                }
            );
        }

        let json = to_json(&request);
        assert_eq!(
            json["contents"][0]["parts"][2]["inlineData"]["mimeType"],
            "image/png"
        );
        assert_eq!(
            json["contents"][0]["parts"][2]["inlineData"]["data"],
            "QkJCQg=="
        );
    }

    #[test]
    fn reasoning_disabled_omits_thinking_config() {
        let request = build_generate_request(
            "p",
            "s",
            RequestConfig::new(false, false),
            &[],
            &AdapterSettings::default(),
        );
        assert!(request.generation_config.thinking_config.is_none());

        let json = to_json(&request);
        let generation_config = json["generationConfig"].as_object().unwrap();
        assert!(!generation_config.contains_key("thinkingConfig"));
    }

    #[test]
    fn thought_summaries_only_when_enabled() {
        let settings = AdapterSettings {
            include_thoughts: true,
            ..AdapterSettings::default()
        };
        let json = to_json(&build_generate_request(
            "p",
            "s",
            RequestConfig::new(true, false),
            &[],
            &settings,
        ));
        assert_eq!(
            json["generationConfig"]["thinkingConfig"]["includeThoughts"],
            true
        );

        let json = to_json(&build_generate_request(
            "p",
            "s",
            RequestConfig::new(true, false),
            &[],
            &AdapterSettings::default(),
        ));
        assert!(json["generationConfig"]["thinkingConfig"]
            .get("includeThoughts")
            .is_none());
    }

    #[test]
    fn retrieval_toggles_google_search_tool() {
        let without = to_json(&build_generate_request(
            "p",
            "s",
            RequestConfig::new(true, false),
            &[],
            &AdapterSettings::default(),
        ));
        assert!(without.get("tools").is_none());

        let with = to_json(&build_generate_request(
            "p",
            "s",
            RequestConfig::new(true, true),
            &[],
            &AdapterSettings::default(),
        ));
        assert_eq!(with["tools"], serde_json::json!([{ "googleSearch": {} }]));
    }

    #[test]
    fn sample_claim_with_reasoning_and_no_retrieval() {
        let request = build_generate_request(
            "示例权利要求",
            "sys",
            RequestConfig::new(true, false),
            &[],
            &AdapterSettings::default(),
        );

        let json = to_json(&request);
        assert!(json.get("tools").is_none());
        assert_eq!(
            json["generationConfig"]["thinkingConfig"],
            serde_json::json!({ "thinkingBudget": MAX_THINKING_BUDGET })
        );
        let parts = json["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0]["text"], "示例权利要求");
    }
}
