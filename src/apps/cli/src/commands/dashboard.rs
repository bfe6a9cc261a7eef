use crate::ui;
use anyhow::Result;
use patentpro_core::agentic::workspaces::{quick_actions, sidebar_menu};
use std::io::Write;

pub fn execute(json: bool) -> Result<()> {
    let menu = sidebar_menu();
    let actions = quick_actions();
    let mut stdout = std::io::stdout().lock();

    if json {
        let value = serde_json::json!({
            "menu": menu,
            "quickActions": actions,
        });
        serde_json::to_writer_pretty(&mut stdout, &value)?;
        writeln!(stdout)?;
        return Ok(());
    }

    ui::render_dashboard(&mut stdout, &menu, actions)
}
