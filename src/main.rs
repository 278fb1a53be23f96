//! Main entry point for the Quick Translate launcher action

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quick_translate::cli::{self, commands::Commands};
use quick_translate::TranslatorConfig;

/// Quick Translate - Google Translate results as launcher items
#[derive(Parser, Debug)]
#[command(name = "quick-translate", version, about, long_about = None)]
struct Args {
    /// JSON configuration file (defaults to environment variables)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Logs go to stderr; stdout carries the result list
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("quick_translate={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match args.command {
        Some(Commands::Run { argument }) => {
            let config = TranslatorConfig::load(args.config.as_deref())?;
            cli::commands::handle_run(config, argument).await?;
        }
        Some(Commands::Trans {
            text,
            to,
            json,
            remember,
        }) => {
            let config = TranslatorConfig::load(args.config.as_deref())?;
            cli::commands::handle_trans(config, text, to, json, remember).await?;
        }
        Some(Commands::ListItems { argument }) => {
            cli::commands::handle_list_items(argument)?;
        }
        Some(Commands::Languages) => {
            cli::commands::handle_languages()?;
        }
        None => {
            eprintln!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
