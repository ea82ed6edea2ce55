//! Main entry point for Multi-Translate CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use multi_translate::cli::commands::{self, Commands};
use multi_translate::{TranslationClient, TranslatorConfig};

/// Multi-Translate - translate text through a LibreTranslate-compatible API
#[derive(Parser, Debug)]
#[command(name = "multi-translate", version, about, long_about = None)]
struct Args {
    /// JSON config file; environment variables and flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Endpoint override (defaults to TRANSLATE_API_URL, then the public instance)
    #[arg(long)]
    api_url: Option<String>,

    /// Bearer credential (defaults to TRANSLATE_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Request timeout in milliseconds (defaults to REQUEST_TIMEOUT_MS or 30000)
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("multi_translate={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Commands::Languages = args.command {
        commands::handle_languages();
        return Ok(());
    }

    // Resolve configuration once: file, then environment, then flags
    let config = TranslatorConfig::load(args.config.as_deref())?.with_overrides(
        args.api_url,
        args.api_key,
        args.timeout_ms,
    );

    let client = TranslationClient::new(config)?;

    match args.command {
        Commands::Translate { text, from, to } => {
            commands::handle_translate(&client, text, from, to).await?;
        }
        Commands::Interactive { from, to } => {
            commands::handle_interactive(&client, from, to).await?;
        }
        Commands::Languages => commands::handle_languages(),
    }

    Ok(())
}
