use super::Workspace;
use crate::agentic::task::RemoteTask;
use crate::infrastructure::filesystem::LoadedFile;
use patentpro_core_types::{AppView, MediaAttachment, RequestConfig};

const SYSTEM_INSTRUCTION: &str = "你是一个顶尖的技术情报分析专家和专利资深审查员。
任务：对用户提供的技术交底书或专利文档（文本或文件）进行“深度透视”。
要求：
1. 提炼技术核心点：用一句话精准描述其本质。
2. 梳理创新链路：从痛点到手段，再到效果，构建逻辑闭环。
3. 挖掘潜在缺陷：从侵权风险、可专利性、被绕过的可能性三个维度进行批判。
4. 如果提供了文件（如PDF），请深度解析其中的图表含义和公式逻辑。
5. 采用极简、专业且具视觉化感的 Markdown 格式。";

/// Distills a disclosure or patent document into its core idea and risks.
#[derive(Debug, Default)]
pub struct UnderstanderWorkspace {
    pub content: String,
    pub file: Option<LoadedFile>,
    task: RemoteTask,
}

impl UnderstanderWorkspace {
    pub fn new(content: impl Into<String>, file: Option<LoadedFile>) -> Self {
        Self {
            content: content.into(),
            file,
            task: RemoteTask::new(),
        }
    }
}

impl Workspace for UnderstanderWorkspace {
    fn view(&self) -> AppView {
        AppView::Understander
    }

    fn system_instruction(&self) -> &'static str {
        SYSTEM_INSTRUCTION
    }

    fn default_config(&self) -> RequestConfig {
        RequestConfig::new(true, true)
    }

    fn can_submit(&self) -> bool {
        !self.content.is_empty() || self.file.is_some()
    }

    fn missing_input_hint(&self) -> &'static str {
        "请提供技术文本或上传文件"
    }

    fn prompt(&self) -> String {
        format!(
            "输入文本内容：\n{}\n\n请结合上传的文件（如有）进行全方位的技术理解与风险评估。",
            self.content
        )
    }

    fn attachments(&self) -> Vec<MediaAttachment> {
        self.file
            .iter()
            .map(|file| file.attachment.clone())
            .collect()
    }

    fn loading_label(&self) -> &'static str {
        "正在进行深度透视..."
    }

    fn task(&self) -> &RemoteTask {
        &self.task
    }
}
