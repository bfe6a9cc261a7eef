// PatentPro Core Library - Platform-agnostic business logic
// Layers: Util -> Infrastructure -> Service -> Agentic

pub mod agentic; // Workspaces and the single-shot remote task
pub mod infrastructure; // AI client construction, attachment loading
pub mod service; // Configuration
pub mod util; // Errors

// Export main types
pub use util::errors::*;

pub use patentpro_core_types::{
    AnalysisResult, AppView, GroundingSource, MediaAttachment, RequestConfig,
};

// Export service layer components
pub use service::config::PatentProConfig;

// Export infrastructure components
pub use infrastructure::ai::{create_ai_client, AIClient};
pub use infrastructure::filesystem::{load_attachment, LoadedFile};

// Export Agentic core types
pub use agentic::{
    run_workspace,
    task::{RemoteTask, TaskState},
    workspaces::{
        DiffWorkspace, DraftingWorkspace, OaDocument, OaDocumentCategory, OaWorkspace,
        TaskRequest, UnderstanderWorkspace, Workspace,
    },
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CORE_NAME: &str = "PatentPro Core";
