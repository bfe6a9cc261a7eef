use super::{load_optional_file, read_text_arg, CommandContext};
use anyhow::Result;
use clap::Args;
use patentpro_core::agentic::workspaces::oa_response::{
    APPLICATION_ID, FIRST_PRIOR_ART_ID, OFFICE_ACTION_ID,
};
use patentpro_core::OaWorkspace;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct OaArgs {
    /// Office action text, or @path
    #[arg(long)]
    pub oa: Option<String>,

    /// Office action file
    #[arg(long)]
    pub oa_file: Option<PathBuf>,

    /// Claims of this application, or @path
    #[arg(long)]
    pub app: Option<String>,

    /// Claims file of this application
    #[arg(long)]
    pub app_file: Option<PathBuf>,

    /// Prior-art text, repeat for D1, D2, ... (or @path)
    #[arg(long)]
    pub prior: Vec<String>,

    /// Prior-art file, repeat for D1, D2, ...; paired with --prior by position
    #[arg(long)]
    pub prior_file: Vec<PathBuf>,
}

async fn fill_doc(
    workspace: &mut OaWorkspace,
    id: &str,
    text: Option<&str>,
    file: Option<&std::path::Path>,
) -> Result<()> {
    workspace.set_text(id, read_text_arg(text).await?)?;
    if let Some(file) = load_optional_file(file).await? {
        workspace.attach_file(id, file)?;
    }
    Ok(())
}

pub async fn build_workspace(args: &OaArgs) -> Result<OaWorkspace> {
    let mut workspace = OaWorkspace::new();
    fill_doc(
        &mut workspace,
        OFFICE_ACTION_ID,
        args.oa.as_deref(),
        args.oa_file.as_deref(),
    )
    .await?;
    fill_doc(
        &mut workspace,
        APPLICATION_ID,
        args.app.as_deref(),
        args.app_file.as_deref(),
    )
    .await?;

    let prior_count = args.prior.len().max(args.prior_file.len());
    for index in 0..prior_count {
        let id = if index == 0 {
            FIRST_PRIOR_ART_ID.to_string()
        } else {
            workspace.add_prior_art()
        };
        fill_doc(
            &mut workspace,
            &id,
            args.prior.get(index).map(String::as_str),
            args.prior_file.get(index).map(PathBuf::as_path),
        )
        .await?;
    }

    Ok(workspace)
}

pub async fn execute(ctx: &CommandContext, args: OaArgs) -> Result<()> {
    let workspace = build_workspace(&args).await?;
    ctx.execute(&workspace).await
}
