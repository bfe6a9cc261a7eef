//! Subcommand handlers
//!
//! Each handler fills one workspace from the command line and submits it.

pub mod dashboard;
pub mod diff;
pub mod draft;
pub mod oa;
pub mod understand;

use crate::ui;
use anyhow::{Context, Result};
use clap::Args;
use patentpro_core::{
    load_attachment, run_workspace, AIClient, AnalysisResult, LoadedFile, RequestConfig,
    Workspace,
};
use std::path::Path;
use std::time::Duration;

const PROGRESS_INTERVAL: Duration = Duration::from_millis(2500);

/// Overrides for the workspace's default reasoning/retrieval flags.
#[derive(Debug, Clone, Default, Args)]
pub struct RequestFlags {
    /// Force extended reasoning on
    #[arg(long, global = true, conflicts_with = "no_thinking")]
    pub thinking: bool,

    /// Turn extended reasoning off
    #[arg(long, global = true)]
    pub no_thinking: bool,

    /// Ground the answer with web search
    #[arg(long, global = true, conflicts_with = "no_search")]
    pub search: bool,

    /// Disable web search grounding
    #[arg(long, global = true)]
    pub no_search: bool,
}

impl RequestFlags {
    /// `None` keeps the workspace defaults untouched.
    pub fn resolve(&self, defaults: RequestConfig) -> Option<RequestConfig> {
        if !(self.thinking || self.no_thinking || self.search || self.no_search) {
            return None;
        }

        let mut config = defaults;
        if self.thinking {
            config.enable_extended_reasoning = true;
        }
        if self.no_thinking {
            config.enable_extended_reasoning = false;
        }
        if self.search {
            config.enable_external_retrieval = true;
        }
        if self.no_search {
            config.enable_external_retrieval = false;
        }
        Some(config)
    }
}

pub struct CommandContext {
    pub client: AIClient,
    pub flags: RequestFlags,
    pub json: bool,
    pub show_reasoning: bool,
}

impl CommandContext {
    pub async fn execute<W: Workspace>(&self, workspace: &W) -> Result<()> {
        let config = self.flags.resolve(workspace.default_config());
        let result = submit_with_progress(workspace, &self.client, config).await?;

        let mut stdout = std::io::stdout().lock();
        if self.json {
            ui::render_result_json(&mut stdout, &result)
        } else {
            ui::render_result(&mut stdout, &result, self.show_reasoning)
        }
    }
}

async fn submit_with_progress<W: Workspace>(
    workspace: &W,
    client: &AIClient,
    config: Option<RequestConfig>,
) -> Result<AnalysisResult> {
    let run = run_workspace(workspace, client, config);
    tokio::pin!(run);

    let mut steps = workspace.progress_messages().iter();
    let mut ticker = tokio::time::interval(PROGRESS_INTERVAL);
    let mut announced = false;

    loop {
        tokio::select! {
            biased;
            result = &mut run => return Ok(result?),
            _ = ticker.tick() => {
                // Rejected input never reaches Pending, so nothing is announced.
                if !announced && workspace.task().is_pending() {
                    ui::render_status(workspace.loading_label());
                    announced = true;
                }
                if announced {
                    if let Some(step) = steps.next() {
                        ui::render_progress_step(step);
                    }
                }
            }
        }
    }
}

/// `@path` reads the text from a file; anything else is taken literally.
pub async fn read_text_arg(value: Option<&str>) -> Result<String> {
    match value {
        Some(value) => match value.strip_prefix('@') {
            Some(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read text from {}", path)),
            None => Ok(value.to_string()),
        },
        None => Ok(String::new()),
    }
}

pub async fn load_optional_file(path: Option<&Path>) -> Result<Option<LoadedFile>> {
    match path {
        Some(path) => Ok(Some(load_attachment(path).await?)),
        None => Ok(None),
    }
}
