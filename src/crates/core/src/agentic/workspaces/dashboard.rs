//! Dashboard navigation metadata. No model call happens here.

use patentpro_core_types::AppView;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: AppView,
    pub icon: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub id: AppView,
    pub title: &'static str,
    pub description: &'static str,
}

pub fn sidebar_menu() -> Vec<MenuItem> {
    AppView::ALL
        .iter()
        .map(|view| MenuItem {
            id: *view,
            icon: view.icon(),
            label: view.label(),
        })
        .collect()
}

pub fn quick_actions() -> &'static [QuickAction] {
    const QUICK_ACTIONS: &[QuickAction] = &[
        QuickAction {
            id: AppView::Drafting,
            title: "智能撰写说明书",
            description: "根据权利要求自动生成图文并茂的说明书草案",
        },
        QuickAction {
            id: AppView::OaAssistant,
            title: "三步法 OA 分析",
            description: "解析通知书与对比文件，深度构建创造性抗辩逻辑",
        },
    ];
    QUICK_ACTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_every_view_once() {
        let menu = sidebar_menu();
        assert_eq!(menu.len(), 5);
        assert_eq!(menu[0].label, "工作台");
        assert_eq!(menu[2].id, AppView::OaAssistant);
    }

    #[test]
    fn quick_actions_target_drafting_and_oa() {
        let ids: Vec<_> = quick_actions().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![AppView::Drafting, AppView::OaAssistant]);
    }
}
