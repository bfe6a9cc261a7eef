use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppView {
    Dashboard,
    Drafting,
    OaAssistant,
    Understander,
    DiffExpert,
}

impl AppView {
    pub const ALL: [AppView; 5] = [
        AppView::Dashboard,
        AppView::Drafting,
        AppView::OaAssistant,
        AppView::Understander,
        AppView::DiffExpert,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            AppView::Dashboard => "DASHBOARD",
            AppView::Drafting => "DRAFTING",
            AppView::OaAssistant => "OA_ASSISTANT",
            AppView::Understander => "UNDERSTANDER",
            AppView::DiffExpert => "DIFF_EXPERT",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AppView::Dashboard => "🏠",
            AppView::Drafting => "✍️",
            AppView::OaAssistant => "⚖️",
            AppView::Understander => "🧠",
            AppView::DiffExpert => "↔️",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppView::Dashboard => "工作台",
            AppView::Drafting => "说明书撰写",
            AppView::OaAssistant => "审查意见答复",
            AppView::Understander => "技术深度理解",
            AppView::DiffExpert => "差异对比分析",
        }
    }
}
