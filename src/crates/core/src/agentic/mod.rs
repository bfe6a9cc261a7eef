//! Agentic layer
//!
//! Workspaces build requests; [`run_workspace`] sends one through the adapter
//! and records the outcome in the workspace's task.

pub mod task;
pub mod workspaces;

use crate::util::errors::PatentProResult;
use log::info;
use patentpro_ai_adapters::{GenerationTransport, PatentTaskAdapter};
use patentpro_core_types::{AnalysisResult, RequestConfig};
use workspaces::Workspace;

/// Submits the workspace's request. `config` replaces the workspace's default
/// reasoning/retrieval flags when given.
pub async fn run_workspace<W, T>(
    workspace: &W,
    adapter: &PatentTaskAdapter<T>,
    config: Option<RequestConfig>,
) -> PatentProResult<AnalysisResult>
where
    W: Workspace + ?Sized,
    T: GenerationTransport,
{
    let mut request = workspace.build_request()?;
    if let Some(config) = config {
        request.config = config;
    }

    info!(
        "Submitting workspace request: view={}, attachments={}, thinking={}, search={}",
        workspace.view().id(),
        request.attachments.len(),
        request.config.enable_extended_reasoning,
        request.config.enable_external_retrieval
    );

    workspace
        .task()
        .submit(adapter.analyze_patent_task(
            &request.prompt,
            &request.system_instruction,
            request.config,
            &request.attachments,
        ))
        .await
}
