// src/main.rs
// Emotions - reflective journaling backed by a chat completions model

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use emotions::config::{self, EnvConfig};
use emotions::journal::EntryStore;
use emotions::llm::{GroqClient, LlmClient};
use emotions::pipeline::AnalysisPipeline;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

/// Build the pipeline from environment configuration
fn build_pipeline(config: &EnvConfig) -> emotions::Result<AnalysisPipeline> {
    let client: Arc<dyn LlmClient> = Arc::new(GroqClient::from_config(config)?);
    let pipeline = AnalysisPipeline::new(client, config.model.clone());
    info!(model = %pipeline.model(), "Pipeline ready");
    Ok(pipeline)
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Check => cli::run_check(),
        Commands::Analyze { text, json } => {
            let pipeline = build_pipeline(&EnvConfig::load())?;
            cli::run_analyze(&pipeline, &text, json).await
        }
        Commands::Session => {
            let pipeline = build_pipeline(&EnvConfig::load())?;
            let mut store = EntryStore::new();
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            cli::run_session(&pipeline, &mut store, stdin, &mut stdout).await
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Quiet by default: stdout belongs to the journal
    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    // Load .env files (project first, then ~/.emotions - project overrides)
    config::load_dotenv();

    let command = cli.command.unwrap_or(Commands::Session);
    match run(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("{}", cli::failure_report(&e));
            ExitCode::FAILURE
        }
    }
}
