//! Terminal output
//!
//! Results go to stdout, status lines to stderr so output can be piped.

use anyhow::Result;
use patentpro_core::agentic::workspaces::{MenuItem, QuickAction};
use patentpro_core::AnalysisResult;
use std::io::Write;

/// Print the final analysis: optional thought summary, markdown answer, then
/// the numbered source list.
pub fn render_result(
    out: &mut impl Write,
    result: &AnalysisResult,
    show_reasoning: bool,
) -> Result<()> {
    if show_reasoning {
        if let Some(trace) = &result.reasoning_trace {
            writeln!(out, "思考过程：")?;
            for line in trace.lines() {
                writeln!(out, "> {}", line)?;
            }
            writeln!(out)?;
        }
    }

    writeln!(out, "{}", result.response_text)?;

    if !result.grounding_sources.is_empty() {
        writeln!(out)?;
        writeln!(out, "参考来源：")?;
        for (index, source) in result.grounding_sources.iter().enumerate() {
            writeln!(
                out,
                "  {}. {} <{}>",
                index + 1,
                source.title().unwrap_or_default(),
                source.uri().unwrap_or_default()
            )?;
        }
    }

    Ok(())
}

pub fn render_result_json(out: &mut impl Write, result: &AnalysisResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)?;
    Ok(())
}

pub fn render_dashboard(
    out: &mut impl Write,
    menu: &[MenuItem],
    actions: &[QuickAction],
) -> Result<()> {
    writeln!(out, "PatentPro v{}", patentpro_core::VERSION)?;
    writeln!(out)?;
    for item in menu {
        writeln!(out, "  {} {}  ({})", item.icon, item.label, item.id.id())?;
    }
    writeln!(out)?;
    writeln!(out, "快捷入口：")?;
    for action in actions {
        writeln!(out, "  - {}：{}", action.title, action.description)?;
    }
    Ok(())
}

pub fn render_status(message: &str) {
    eprintln!("{}", message);
}

pub fn render_progress_step(message: &str) {
    eprintln!("  · {}", message);
}
