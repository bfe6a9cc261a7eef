use super::{load_optional_file, read_text_arg, CommandContext};
use anyhow::Result;
use clap::Args;
use patentpro_core::UnderstanderWorkspace;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct UnderstandArgs {
    /// Disclosure text, or @path to read it from a file
    #[arg(long)]
    pub text: Option<String>,

    /// Disclosure or patent document to analyse
    #[arg(long)]
    pub file: Option<PathBuf>,
}

pub async fn execute(ctx: &CommandContext, args: UnderstandArgs) -> Result<()> {
    let content = read_text_arg(args.text.as_deref()).await?;
    let file = load_optional_file(args.file.as_deref()).await?;
    let workspace = UnderstanderWorkspace::new(content, file);
    ctx.execute(&workspace).await
}
