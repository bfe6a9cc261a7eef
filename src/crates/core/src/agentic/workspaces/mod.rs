//! Workspaces
//!
//! One workspace per task the tool offers. A workspace owns its form state and
//! knows how to turn that state into a single model request.

pub mod dashboard;
pub mod diff_expert;
pub mod drafting;
pub mod oa_response;
pub mod understander;

pub use dashboard::{quick_actions, sidebar_menu, MenuItem, QuickAction};
pub use diff_expert::{DiffSide, DiffWorkspace};
pub use drafting::DraftingWorkspace;
pub use oa_response::{OaDocument, OaDocumentCategory, OaWorkspace};
pub use understander::UnderstanderWorkspace;

use crate::agentic::task::RemoteTask;
use crate::util::errors::{PatentProError, PatentProResult};
use patentpro_core_types::{AppView, MediaAttachment, RequestConfig};

/// Shown in place of a document's text when only a file was provided.
pub const SEE_ATTACHMENT: &str = "见附件";

/// Everything the adapter needs for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRequest {
    pub prompt: String,
    pub system_instruction: String,
    pub config: RequestConfig,
    pub attachments: Vec<MediaAttachment>,
}

pub trait Workspace: Send + Sync {
    fn view(&self) -> AppView;

    fn system_instruction(&self) -> &'static str;

    fn default_config(&self) -> RequestConfig;

    /// False while required input is missing.
    fn can_submit(&self) -> bool;

    /// Explains what is missing when `can_submit` is false.
    fn missing_input_hint(&self) -> &'static str;

    fn prompt(&self) -> String;

    fn attachments(&self) -> Vec<MediaAttachment>;

    /// Status line shown while the request is in flight.
    fn loading_label(&self) -> &'static str;

    /// Cosmetic stage messages shown one by one while waiting.
    fn progress_messages(&self) -> &'static [&'static str] {
        &[]
    }

    fn task(&self) -> &RemoteTask;

    fn build_request(&self) -> PatentProResult<TaskRequest> {
        if !self.can_submit() {
            return Err(PatentProError::validation(self.missing_input_hint()));
        }

        Ok(TaskRequest {
            prompt: self.prompt(),
            system_instruction: self.system_instruction().to_string(),
            config: self.default_config(),
            attachments: self.attachments(),
        })
    }
}

pub(crate) fn text_or_attachment(text: &str) -> &str {
    if text.is_empty() {
        SEE_ATTACHMENT
    } else {
        text
    }
}
