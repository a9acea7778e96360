// src/journal/mod.rs
// In-memory journal: append-only entry history for one session

mod entry;
mod insights;

pub use entry::{EmotionCounts, JournalEntry, MoodPoint};
pub use insights::{Insights, NO_ENTRIES_MESSAGE, STRESS_ADVISORY, STRESS_ADVISORY_THRESHOLD};

use chrono::{DateTime, Local};
use std::path::Path;
use tracing::{debug, info};

use crate::error::Result;
use crate::pipeline::AnalysisRecord;

/// Ordered history of analysed entries.
///
/// Created once per session and passed by reference; nothing is persisted
/// unless the caller exports it.
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Vec<JournalEntry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp the record with the current local time and append it
    pub fn add_entry(&mut self, record: AnalysisRecord) -> &JournalEntry {
        self.add_entry_at(record, Local::now())
    }

    pub fn add_entry_at(&mut self, record: AnalysisRecord, timestamp: DateTime<Local>) -> &JournalEntry {
        let index = self.entries.len();
        self.entries.push(JournalEntry::new(record, timestamp));
        debug!(index, "Journal entry added");
        &self.entries[index]
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in submission order
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn emotion_counts(&self) -> EmotionCounts {
        EmotionCounts::tally(self.entries.iter().map(JournalEntry::emotion))
    }

    pub fn mood_timeline(&self) -> Vec<MoodPoint> {
        self.entries.iter().map(MoodPoint::from).collect()
    }

    /// Pretty-printed JSON array of every entry, in submission order
    pub fn export_to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    pub fn export_to_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.export_to_json()?)?;
        info!(path = %path.display(), entries = self.entries.len(), "Journal exported");
        Ok(())
    }

    /// Aggregate statistics, or `None` when nothing has been logged
    pub fn insights(&self) -> Option<Insights> {
        let most_common = self.emotion_counts().most_frequent()?;
        let count = self.entries.len() as f64;
        let average = |score: fn(&JournalEntry) -> u8| {
            self.entries.iter().map(|e| f64::from(score(e))).sum::<f64>() / count
        };

        Some(Insights {
            entry_count: self.entries.len(),
            most_common,
            average_mood: average(JournalEntry::mood_score),
            average_stress: average(JournalEntry::stress_score),
        })
    }

    /// Human-readable insight line for display
    pub fn insight_summary(&self) -> String {
        match self.insights() {
            Some(insights) => insights.to_string(),
            None => NO_ENTRIES_MESSAGE.to_string(),
        }
    }
}
