use super::{load_optional_file, read_text_arg, CommandContext};
use anyhow::Result;
use clap::Args;
use patentpro_core::agentic::workspaces::DiffSide;
use patentpro_core::DiffWorkspace;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Baseline document text (A), or @path
    #[arg(long = "a")]
    pub text_a: Option<String>,

    /// Baseline document file (A)
    #[arg(long = "a-file")]
    pub file_a: Option<PathBuf>,

    /// Target document text (B), or @path
    #[arg(long = "b")]
    pub text_b: Option<String>,

    /// Target document file (B)
    #[arg(long = "b-file")]
    pub file_b: Option<PathBuf>,
}

async fn load_side(text: Option<&str>, file: Option<&std::path::Path>) -> Result<DiffSide> {
    Ok(DiffSide::new(
        read_text_arg(text).await?,
        load_optional_file(file).await?,
    ))
}

pub async fn execute(ctx: &CommandContext, args: DiffArgs) -> Result<()> {
    let doc_a = load_side(args.text_a.as_deref(), args.file_a.as_deref()).await?;
    let doc_b = load_side(args.text_b.as_deref(), args.file_b.as_deref()).await?;
    let workspace = DiffWorkspace::new(doc_a, doc_b);
    ctx.execute(&workspace).await
}
