use super::{load_optional_file, read_text_arg, CommandContext};
use anyhow::Result;
use clap::Args;
use patentpro_core::DraftingWorkspace;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DraftArgs {
    /// Claim set, or @path to read it from a file
    #[arg(long)]
    pub claims: String,

    /// Drawing to describe in the specification
    #[arg(long)]
    pub drawing: Option<PathBuf>,
}

pub async fn build_workspace(args: &DraftArgs) -> Result<DraftingWorkspace> {
    let mut workspace = DraftingWorkspace::with_claims(read_text_arg(Some(&args.claims)).await?);
    if let Some(drawing) = load_optional_file(args.drawing.as_deref()).await? {
        workspace.set_drawing(drawing);
    }
    Ok(workspace)
}

pub async fn execute(ctx: &CommandContext, args: DraftArgs) -> Result<()> {
    let workspace = build_workspace(&args).await?;
    ctx.execute(&workspace).await
}
