// src/cli/mod.rs
// CLI module for emotions commands

use clap::{Parser, Subcommand};

pub mod analyze;
pub mod check;
pub mod render;
pub mod session;

// Re-export command handlers
pub use analyze::run_analyze;
pub use check::run_check;
pub use session::run_session;

/// Shown after any command failure
pub const CREDENTIAL_HINT: &str = "💡 Make sure your GROQ_API_KEY is set in the environment or .env file";

/// Text printed to stderr when a command fails
pub fn failure_report(err: &anyhow::Error) -> String {
    format!("❌ Error: {}\n{}", err, CREDENTIAL_HINT)
}

#[derive(Parser)]
#[command(name = "emotions")]
#[command(about = "Reflective emotion journaling with a language model")]
#[command(version)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive journaling session (default)
    Session,

    /// Analyze a single entry and print the result
    Analyze {
        /// Journal text to analyze
        #[arg(index = 1)]
        text: String,

        /// Print the analysis record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show configuration status without contacting the model
    Check,
}
