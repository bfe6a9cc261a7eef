use super::{text_or_attachment, Workspace};
use crate::agentic::task::RemoteTask;
use crate::infrastructure::filesystem::LoadedFile;
use patentpro_core_types::{AppView, MediaAttachment, RequestConfig};

const SYSTEM_INSTRUCTION: &str = "你是一个极致精细的专利对比分析专家和侵权判定专家。
任务：对比“文档 A”与“文档 B”的实质技术特征差异。
要求：
1. 语义 Diff：识别两份文档在技术特征、实施方式、零件结构上的具体差异。
2. 实质性改动分析：是否存在特征的增加、减少、置换？是否属于本领域的惯用手段替换？
3. 覆盖关系预判：分析文档 B 是否落入文档 A 的保护范围（如果是对比权利要求），或两者的等同性。
4. 如果提供了文件（PDF/图表），请重点比对附图中的结构差异。
5. 采用结构清晰的对比表格或分条目 Markdown 输出，确保逻辑具有极强的法律对抗性。";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiffSide {
    pub text: String,
    pub file: Option<LoadedFile>,
}

impl DiffSide {
    pub fn new(text: impl Into<String>, file: Option<LoadedFile>) -> Self {
        Self {
            text: text.into(),
            file,
        }
    }

    fn has_content(&self) -> bool {
        !self.text.is_empty() || self.file.is_some()
    }
}

/// Semantic comparison of a baseline document (A) against a target (B).
#[derive(Debug, Default)]
pub struct DiffWorkspace {
    pub doc_a: DiffSide,
    pub doc_b: DiffSide,
    task: RemoteTask,
}

impl DiffWorkspace {
    pub fn new(doc_a: DiffSide, doc_b: DiffSide) -> Self {
        Self {
            doc_a,
            doc_b,
            task: RemoteTask::new(),
        }
    }
}

impl Workspace for DiffWorkspace {
    fn view(&self) -> AppView {
        AppView::DiffExpert
    }

    fn system_instruction(&self) -> &'static str {
        SYSTEM_INSTRUCTION
    }

    fn default_config(&self) -> RequestConfig {
        RequestConfig::new(true, true)
    }

    fn can_submit(&self) -> bool {
        self.doc_a.has_content() && self.doc_b.has_content()
    }

    fn missing_input_hint(&self) -> &'static str {
        "文档 A 与文档 B 都需要提供文本或文件"
    }

    fn prompt(&self) -> String {
        format!(
            "【文档 A】\n文本内容：{}\n\n【文档 B】\n文本内容：{}\n\n请执行深度语义对比并输出分析报告。",
            text_or_attachment(&self.doc_a.text),
            text_or_attachment(&self.doc_b.text)
        )
    }

    fn attachments(&self) -> Vec<MediaAttachment> {
        [&self.doc_a, &self.doc_b]
            .into_iter()
            .filter_map(|side| side.file.as_ref())
            .map(|file| file.attachment.clone())
            .collect()
    }

    fn loading_label(&self) -> &'static str {
        "AI 正在执行高维比对..."
    }

    fn task(&self) -> &RemoteTask {
        &self.task
    }
}
