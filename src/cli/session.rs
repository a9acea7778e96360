// src/cli/session.rs
// Interactive journaling loop over line-oriented input

use anyhow::Result;
use emotions::journal::EntryStore;
use emotions::pipeline::AnalysisPipeline;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error};

use super::render;

pub const DEFAULT_EXPORT_FILE: &str = "journal-entries.json";

const PROMPT: &str = "📝 How are you feeling today? ";

const HELP: &str = "Write freely about your emotions, thoughts, and experiences.
Each line you enter is analyzed and added to this session's journal.

Commands:
  :insights        summary of everything logged so far
  :timeline        mood score of each entry over time
  :counts          how often each emotion was detected
  :entries         list every entry
  :export [path]   write all entries as JSON (default journal-entries.json)
  :help            show this message
  :quit            end the session";

/// One line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Analyze(String),
    Blank,
    Insights,
    Timeline,
    Counts,
    Entries,
    Export(PathBuf),
    Help,
    Quit,
    Unknown(String),
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Blank;
        }
        let Some(command) = trimmed.strip_prefix(':') else {
            return Self::Analyze(trimmed.to_string());
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };
        match name {
            "insights" => Self::Insights,
            "timeline" => Self::Timeline,
            "counts" => Self::Counts,
            "entries" => Self::Entries,
            "export" if arg.is_empty() => Self::Export(PathBuf::from(DEFAULT_EXPORT_FILE)),
            "export" => Self::Export(PathBuf::from(arg)),
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Read lines until `:quit` or end of input, analysing each journal line
/// and recording it in `store`.
pub async fn run_session<R, W>(
    pipeline: &AnalysisPipeline,
    store: &mut EntryStore,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}\nType :help for commands.\n", HELP.lines().next().unwrap_or_default())?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        let command = SessionCommand::parse(&line);
        debug!(?command, "Session input");
        match command {
            SessionCommand::Analyze(text) => {
                let record = pipeline.run(text).await;
                writeln!(out, "\n✅ Analysis complete!\n")?;
                writeln!(out, "{}", render::snapshot(&record))?;
                store.add_entry(record);
            }
            SessionCommand::Blank => writeln!(out, "{}", render::EMPTY_INPUT_WARNING)?,
            SessionCommand::Insights => writeln!(out, "💡 {}\n", store.insight_summary())?,
            SessionCommand::Timeline => {
                writeln!(out, "{}", render::timeline(&store.mood_timeline()))?
            }
            SessionCommand::Counts => writeln!(out, "{}", render::counts(&store.emotion_counts()))?,
            SessionCommand::Entries => writeln!(out, "{}", render::entries(store.entries()))?,
            SessionCommand::Export(path) => match store.export_to_file(&path) {
                Ok(()) => writeln!(
                    out,
                    "💾 Exported {} entries to {}\n",
                    store.entry_count(),
                    path.display()
                )?,
                Err(e) => {
                    error!(path = %path.display(), error = %e, "Export failed");
                    writeln!(out, "❌ Export failed: {}\n", e)?;
                }
            },
            SessionCommand::Help => writeln!(out, "{}\n", HELP)?,
            SessionCommand::Quit => break,
            SessionCommand::Unknown(name) => {
                writeln!(out, "Unknown command ':{}'. Type :help for commands.", name)?
            }
        }
    }

    writeln!(out, "Logged {} entries this session.", store.entry_count())?;
    Ok(())
}
