//! PatentPro CLI
//!
//! Command-line front end for the patent-agent workspaces

mod commands;
mod logging;
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::diff::DiffArgs;
use commands::draft::DraftArgs;
use commands::oa::OaArgs;
use commands::understand::UnderstandArgs;
use commands::{CommandContext, RequestFlags};
use patentpro_core::{create_ai_client, PatentProConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "patentpro")]
#[command(about = "PatentPro - AI assistant for patent agents", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Debug mode: verbose console logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Configuration file (defaults to the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Model to call instead of the configured one
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// Ask for the model's thought summary and print it before the answer
    #[arg(long, global = true)]
    show_reasoning: bool,

    #[command(flatten)]
    request: RequestFlags,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the workspace menu and quick actions
    Dashboard,

    /// Draft a patent specification from claims and a drawing
    Draft(DraftArgs),

    /// Analyse an office action with the three-step inventiveness test
    Oa(OaArgs),

    /// Deep technical reading of a disclosure or patent document
    Understand(UnderstandArgs),

    /// Semantic comparison of two documents
    Diff(DiffArgs),
}

fn load_config(cli: &Cli) -> Result<PatentProConfig> {
    let mut config = match &cli.config {
        Some(path) => PatentProConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => PatentProConfig::load().context("Failed to load config")?,
    };
    if let Some(model) = &cli.model {
        config.model = model.clone();
    }
    if cli.show_reasoning {
        config.include_thoughts = true;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = logging::LogConfig::new(cli.log_level.as_deref(), cli.debug);
    logging::init_logging(&log_config)?;
    logging::spawn_log_cleanup_task();

    tracing::info!("Starting PatentPro CLI v{}", patentpro_core::VERSION);

    if let Commands::Dashboard = cli.command {
        return commands::dashboard::execute(cli.json);
    }

    let config = load_config(&cli)?;
    tracing::debug!(
        "Loaded config: model={}, base_url={}",
        config.model,
        config.base_url
    );

    let ctx = CommandContext {
        client: create_ai_client(&config),
        flags: cli.request.clone(),
        json: cli.json,
        show_reasoning: cli.show_reasoning,
    };

    let outcome = match cli.command {
        Commands::Dashboard => Ok(()),
        Commands::Draft(args) => commands::draft::execute(&ctx, args).await,
        Commands::Oa(args) => commands::oa::execute(&ctx, args).await,
        Commands::Understand(args) => commands::understand::execute(&ctx, args).await,
        Commands::Diff(args) => commands::diff::execute(&ctx, args).await,
    };

    if let Err(e) = &outcome {
        tracing::error!("Command failed: {:#}", e);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "patentpro",
            "oa",
            "--oa",
            "通知书",
            "--prior",
            "D1",
            "--prior",
            "D2",
            "--no-thinking",
            "--json",
        ])
        .expect("parse oa command");

        assert!(cli.json);
        assert!(cli.request.no_thinking);
        match cli.command {
            Commands::Oa(args) => assert_eq!(args.prior, vec!["D1", "D2"]),
            _ => panic!("expected oa command"),
        }
    }

    #[test]
    fn thinking_flags_conflict() {
        let parsed = Cli::try_parse_from([
            "patentpro",
            "draft",
            "--claims",
            "1.",
            "--thinking",
            "--no-thinking",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn model_flag_overrides_config() {
        let cli = Cli::try_parse_from([
            "patentpro",
            "--config",
            "/nonexistent/patentpro/config.toml",
            "--model",
            "gemini-2.5-flash",
            "understand",
            "--text",
            "交底书",
        ])
        .expect("parse understand command");

        let config = load_config(&cli).expect("missing file falls back to defaults");
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!(!config.include_thoughts);
    }

    #[test]
    fn show_reasoning_requests_thought_summaries() {
        let cli = Cli::try_parse_from([
            "patentpro",
            "--config",
            "/nonexistent/patentpro/config.toml",
            "draft",
            "--claims",
            "1. 一种散热装置",
            "--show-reasoning",
        ])
        .expect("parse draft command");

        let config = load_config(&cli).expect("missing file falls back to defaults");
        assert!(config.include_thoughts);
        assert!(config.adapter_settings().include_thoughts);
    }
}
