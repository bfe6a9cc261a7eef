//! Office-action response workspace
//!
//! Holds the case file: the office action, the application's claims and any
//! number of prior-art references. The whole file goes out in one request and
//! the model answers with an inventive-step analysis and rebuttal strategies.

use super::{text_or_attachment, Workspace};
use crate::agentic::task::RemoteTask;
use crate::infrastructure::filesystem::LoadedFile;
use crate::util::errors::{PatentProError, PatentProResult};
use log::debug;
use patentpro_core_types::{AppView, MediaAttachment, RequestConfig};
use serde::Serialize;

const SYSTEM_INSTRUCTION: &str = "你是一个拥有20年经验的资深专利代理人，精通中美欧专利法。
任务：基于用户提供的完整案件卷宗（包含通知书、本申请、及多份对比文件），进行深度创造性分析。

工作逻辑：
1. 必须准确区分 [OA通知书]、[本申请] 和 [对比文件 D1, D2...]。
2. 严格执行创造性分析“三步法”：
   - 确定最接近的现有技术（通常是 D1）。
   - 确定本申请与 D1 的区别特征及其实际解决的技术问题。
   - 判断现有技术（D1, D2...）是否给出了将该区别特征应用到最接近现有技术以解决该技术问题的启示。
3. 重点寻找审查员在结合 D1 和 D2 时是否存在“事后诸葛亮”的逻辑缺陷。
4. 输出：一份专业的分析报告 + 三套抗辩策略。使用 Markdown。";

const PROGRESS_MESSAGES: &[&str] = &[
    "加载 Gemini 3 多模态逻辑引擎...",
    "构建跨文档语义关联矩阵...",
    "对齐 [审查意见] 与 [本申请] 特征点...",
    "识别对比文件 D1 的关键公开特征...",
    "识别对比文件 D2 的结合启示 (如果有)...",
    "根据《专利审查指南》进行创造性“三步法”逻辑闭环测试...",
    "正在撰写高说服力抗辩意见稿...",
];

pub const OFFICE_ACTION_ID: &str = "oa-1";
pub const APPLICATION_ID: &str = "app-1";
pub const FIRST_PRIOR_ART_ID: &str = "prior-1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OaDocumentCategory {
    Oa,
    App,
    Prior,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OaDocument {
    pub id: String,
    pub category: OaDocumentCategory,
    pub label: String,
    pub text: String,
    pub file: Option<LoadedFile>,
}

impl OaDocument {
    fn new(id: &str, category: OaDocumentCategory, label: &str) -> Self {
        Self {
            id: id.to_string(),
            category,
            label: label.to_string(),
            text: String::new(),
            file: None,
        }
    }

    pub fn has_content(&self) -> bool {
        !self.text.is_empty() || self.file.is_some()
    }
}

#[derive(Debug)]
pub struct OaWorkspace {
    docs: Vec<OaDocument>,
    task: RemoteTask,
}

impl Default for OaWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl OaWorkspace {
    pub fn new() -> Self {
        Self {
            docs: vec![
                OaDocument::new(OFFICE_ACTION_ID, OaDocumentCategory::Oa, "审查意见通知书"),
                OaDocument::new(APPLICATION_ID, OaDocumentCategory::App, "本申请权利要求"),
                OaDocument::new(FIRST_PRIOR_ART_ID, OaDocumentCategory::Prior, "对比文件 D1"),
            ],
            task: RemoteTask::new(),
        }
    }

    pub fn documents(&self) -> &[OaDocument] {
        &self.docs
    }

    /// Appends an empty reference labelled after the current prior-art count.
    pub fn add_prior_art(&mut self) -> String {
        let count = self
            .docs
            .iter()
            .filter(|d| d.category == OaDocumentCategory::Prior)
            .count()
            + 1;
        let id = format!("prior-{}", uuid::Uuid::new_v4());
        self.docs.push(OaDocument::new(
            &id,
            OaDocumentCategory::Prior,
            &format!("对比文件 D{}", count),
        ));
        debug!("Added prior art: id={}, label=对比文件 D{}", id, count);
        id
    }

    /// Only prior-art references can be removed. Returns whether one was.
    pub fn remove_doc(&mut self, id: &str) -> bool {
        let removable = self
            .docs
            .iter()
            .any(|d| d.id == id && d.category == OaDocumentCategory::Prior);
        if removable {
            self.docs.retain(|d| d.id != id);
        }
        removable
    }

    fn doc_mut(&mut self, id: &str) -> PatentProResult<&mut OaDocument> {
        self.docs
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| PatentProError::validation(format!("Unknown document id: {}", id)))
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> PatentProResult<()> {
        self.doc_mut(id)?.text = text.into();
        Ok(())
    }

    pub fn attach_file(&mut self, id: &str, file: LoadedFile) -> PatentProResult<()> {
        self.doc_mut(id)?.file = Some(file);
        Ok(())
    }
}

impl Workspace for OaWorkspace {
    fn view(&self) -> AppView {
        AppView::OaAssistant
    }

    fn system_instruction(&self) -> &'static str {
        SYSTEM_INSTRUCTION
    }

    fn default_config(&self) -> RequestConfig {
        RequestConfig::new(true, true)
    }

    fn can_submit(&self) -> bool {
        self.docs
            .iter()
            .any(|d| d.category == OaDocumentCategory::Oa && d.has_content())
    }

    fn missing_input_hint(&self) -> &'static str {
        "请提供审查意见通知书的文本或文件"
    }

    fn prompt(&self) -> String {
        self.docs
            .iter()
            .map(|d| format!("[{}]:\n{}", d.label, text_or_attachment(&d.text)))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn attachments(&self) -> Vec<MediaAttachment> {
        self.docs
            .iter()
            .filter_map(|d| d.file.as_ref())
            .map(|file| file.attachment.clone())
            .collect()
    }

    fn loading_label(&self) -> &'static str {
        "AI 正在深度博弈..."
    }

    fn progress_messages(&self) -> &'static [&'static str] {
        PROGRESS_MESSAGES
    }

    fn task(&self) -> &RemoteTask {
        &self.task
    }
}
