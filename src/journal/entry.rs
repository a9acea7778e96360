// src/journal/entry.rs
// Stored journal entries and the projections derived from them

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::pipeline::{AnalysisRecord, EmotionLabel};

/// An analysis record stamped with the time it was stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub timestamp: DateTime<Local>,
    #[serde(flatten)]
    pub analysis: AnalysisRecord,
}

impl JournalEntry {
    pub fn new(analysis: AnalysisRecord, timestamp: DateTime<Local>) -> Self {
        Self {
            timestamp,
            analysis,
        }
    }

    pub fn emotion(&self) -> EmotionLabel {
        self.analysis.emotion
    }

    pub fn mood_score(&self) -> u8 {
        self.analysis.mood_score
    }

    pub fn stress_score(&self) -> u8 {
        self.analysis.stress_score
    }
}

/// One point on the mood timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodPoint {
    pub timestamp: DateTime<Local>,
    pub mood_score: u8,
    pub emotion: EmotionLabel,
}

impl From<&JournalEntry> for MoodPoint {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            timestamp: entry.timestamp,
            mood_score: entry.mood_score(),
            emotion: entry.emotion(),
        }
    }
}

/// Per-emotion entry counts, in the order each emotion was first logged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmotionCounts {
    counts: Vec<(EmotionLabel, usize)>,
}

impl EmotionCounts {
    pub fn tally(emotions: impl IntoIterator<Item = EmotionLabel>) -> Self {
        let mut counts: Vec<(EmotionLabel, usize)> = Vec::new();
        for emotion in emotions {
            match counts.iter_mut().find(|(label, _)| *label == emotion) {
                Some((_, n)) => *n += 1,
                None => counts.push((emotion, 1)),
            }
        }
        Self { counts }
    }

    pub fn get(&self, emotion: EmotionLabel) -> usize {
        self.counts
            .iter()
            .find(|(label, _)| *label == emotion)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmotionLabel, usize)> + '_ {
        self.counts.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Highest count; ties go to the emotion logged first
    pub fn most_frequent(&self) -> Option<EmotionLabel> {
        let mut best: Option<(EmotionLabel, usize)> = None;
        for &(label, n) in &self.counts {
            if best.is_none_or(|(_, top)| n > top) {
                best = Some((label, n));
            }
        }
        best.map(|(label, _)| label)
    }
}
