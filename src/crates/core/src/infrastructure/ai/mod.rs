//! AI client
//!
//! Binds the Gemini transport to the settings from `config.toml`.

use crate::service::config::PatentProConfig;
use log::debug;
use patentpro_ai_adapters::{GeminiClient, PatentTaskAdapter};

pub type AIClient = PatentTaskAdapter<GeminiClient>;

pub fn create_ai_client(config: &PatentProConfig) -> AIClient {
    debug!(
        "Creating AI client: base_url={}, model={}",
        config.base_url, config.model
    );
    PatentTaskAdapter::with_settings(
        GeminiClient::new(config.base_url.clone()),
        config.adapter_settings(),
    )
}
