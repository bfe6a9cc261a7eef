use super::Workspace;
use crate::agentic::task::RemoteTask;
use crate::infrastructure::filesystem::LoadedFile;
use patentpro_core_types::{AppView, MediaAttachment, RequestConfig};

const SYSTEM_INSTRUCTION: &str = "你是一个资深的专利撰写专家。
任务：根据用户提供的“权利要求书”和“附图”，撰写完整的“说明书”。
要求：
1. 包含：技术领域、背景技术、发明内容、具体实施方式。
2. 如果用户提供了附图，必须在“具体实施方式”中详细进行图文对照说明（AI 需识别图中零件并赋予逻辑编号）。
3. 语言严谨，符合专利法实施细则的要求。
4. 采用 Markdown 格式输出。";

/// Writes a full specification from the claims and an optional drawing.
#[derive(Debug, Default)]
pub struct DraftingWorkspace {
    pub claims: String,
    pub drawing: Option<LoadedFile>,
    task: RemoteTask,
}

impl DraftingWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_claims(claims: impl Into<String>) -> Self {
        Self {
            claims: claims.into(),
            ..Self::default()
        }
    }

    pub fn set_drawing(&mut self, drawing: LoadedFile) {
        self.drawing = Some(drawing);
    }
}

impl Workspace for DraftingWorkspace {
    fn view(&self) -> AppView {
        AppView::Drafting
    }

    fn system_instruction(&self) -> &'static str {
        SYSTEM_INSTRUCTION
    }

    fn default_config(&self) -> RequestConfig {
        RequestConfig::new(true, false)
    }

    fn can_submit(&self) -> bool {
        !self.claims.trim().is_empty()
    }

    fn missing_input_hint(&self) -> &'static str {
        "请粘贴权利要求书文本"
    }

    fn prompt(&self) -> String {
        format!(
            "权利要求书内容：\n{}\n\n请结合附图内容生成完整的专利说明书。",
            self.claims
        )
    }

    fn attachments(&self) -> Vec<MediaAttachment> {
        self.drawing
            .iter()
            .map(|drawing| drawing.attachment.clone())
            .collect()
    }

    fn loading_label(&self) -> &'static str {
        "AI 正在解析与撰写..."
    }

    fn task(&self) -> &RemoteTask {
        &self.task
    }
}
