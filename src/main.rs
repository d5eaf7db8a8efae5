//! snapsearch - keyword image search with a local thumbnail cache
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use snapsearch::cli::{Cli, Commands};
use snapsearch::config::{Config, ConfigManager};
use snapsearch::error::SnapResult;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> SnapResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = config_manager.load().await?;

    init_logging(cli.verbose, &config);
    debug!("Using config {}", config_manager.path().display());

    snapsearch::ui::init_theme();

    match cli.command {
        Commands::Search(args) => snapsearch::cli::commands::search(args, &config).await,
        Commands::Cache(args) => snapsearch::cli::commands::cache(args, &config).await,
        Commands::Config(args) => {
            snapsearch::cli::commands::config(args, &config_manager, &config).await
        }
    }
}

/// 0 = warn, 1 = info, 2+ = debug. Logs go to stderr so stdout stays parseable.
fn init_logging(verbose: u8, config: &Config) {
    let filter = match verbose {
        0 => EnvFilter::new("snapsearch=warn"),
        1 => EnvFilter::new("snapsearch=info"),
        _ => EnvFilter::new("snapsearch=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.without_time().init();
    }
}
