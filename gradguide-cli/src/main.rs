//! gradguide: university lookup and graduate-study planning from the terminal
//!
//! - `universities country|name`: live directory lookup with built-in fallback
//! - `predict`: study-path recommendation from an applicant profile
//! - `finance`: cost and funding plan
//! - `progress`: exam preparation and application checklist

mod commands;
mod config;
mod render;

use clap::Parser;
use tracing::{debug, info};

use commands::Commands;
use config::AppConfig;

#[derive(Parser)]
#[command(name = "gradguide")]
#[command(about = "University lookup and graduate-study planning")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "gradguide.toml")]
    config: String,

    /// University directory base URL (overrides config file)
    #[arg(long, env = "GRADGUIDE_DIRECTORY_URL")]
    directory_url: Option<String>,

    /// Study-path classifier base URL (overrides config file)
    #[arg(long, env = "GRADGUIDE_CLASSIFIER_URL")]
    classifier_url: Option<String>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for --json
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradguide=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    debug!("Config file: {}", cli.config);

    let mut config = AppConfig::load(&cli.config)?;

    // Apply CLI overrides
    if let Some(url) = cli.directory_url {
        config.explorer.base_url = url;
    }
    if let Some(url) = cli.classifier_url {
        config.classifier.url = Some(url);
    }

    info!(directory = %config.explorer.base_url, "Using university directory");

    let output = commands::execute(cli.command, &config, cli.json).await?;
    println!("{}", output);

    Ok(())
}
