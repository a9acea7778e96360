// src/cli/render.rs
// Plain-text rendering of analysis results and journal projections

use emotions::journal::{EmotionCounts, JournalEntry, MoodPoint};
use emotions::pipeline::AnalysisRecord;
use std::fmt::Write;

pub const EMPTY_INPUT_WARNING: &str = "⚠️ Please write something before analyzing!";
pub const EMPTY_ANALYTICS: &str = "📊 Start tracking your emotions to see analytics and insights!";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Emotional snapshot shown after each analysis
pub fn snapshot(record: &AnalysisRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🎯 Your Emotional Snapshot");
    let _ = writeln!(out, "  Detected emotion: {}", record.emotion);
    let _ = writeln!(out);
    let _ = writeln!(out, "📊 Emotional Scores");
    let _ = writeln!(out, "  Mood:   {}", score_bar(record.mood_score));
    let _ = writeln!(out, "  Energy: {}", score_bar(record.energy_score));
    let _ = writeln!(out, "  Stress: {}", score_bar(record.stress_score));
    let _ = writeln!(out);
    let _ = writeln!(out, "🏷️ Emotional Keywords");
    let _ = writeln!(out, "  {}", record.keywords.join(", "));
    let _ = writeln!(out);
    let _ = writeln!(out, "💬 Supportive Message");
    for line in record.reflection.lines() {
        let _ = writeln!(out, "  {}", line);
    }
    out
}

/// Five-slot bar followed by the raw score. Scores outside 1..=5 still print
/// their value; the bar saturates.
fn score_bar(score: u8) -> String {
    let filled = usize::from(score.min(5));
    format!("{}{} {}/5", "#".repeat(filled), ".".repeat(5 - filled), score)
}

pub fn timeline(points: &[MoodPoint]) -> String {
    if points.is_empty() {
        return EMPTY_ANALYTICS.to_string();
    }
    let mut out = String::from("Mood Timeline\n");
    for point in points {
        let _ = writeln!(
            out,
            "  {}  mood {}/5  {}",
            point.timestamp.format(TIMESTAMP_FORMAT),
            point.mood_score,
            point.emotion
        );
    }
    out
}

pub fn counts(counts: &EmotionCounts) -> String {
    if counts.is_empty() {
        return EMPTY_ANALYTICS.to_string();
    }
    let width = counts
        .iter()
        .map(|(label, _)| label.as_str().len())
        .max()
        .unwrap_or(0);
    let mut out = String::from("Emotion Distribution\n");
    for (label, n) in counts.iter() {
        let _ = writeln!(out, "  {:<width$}  {}", label.as_str(), n, width = width);
    }
    out
}

pub fn entries(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return EMPTY_ANALYTICS.to_string();
    }
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let a = &entry.analysis;
        let _ = writeln!(
            out,
            "{:>3}. {}  {}  mood {} energy {} stress {}  [{}]",
            i + 1,
            entry.timestamp.format(TIMESTAMP_FORMAT),
            a.emotion,
            a.mood_score,
            a.energy_score,
            a.stress_score,
            a.keywords.join(", ")
        );
        let _ = writeln!(out, "     \"{}\"", a.user_input.trim());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use emotions::journal::EntryStore;
    use emotions::pipeline::{EmotionLabel, Scores, Submission};

    fn record() -> AnalysisRecord {
        Submission::new("long day at work")
            .with_emotion(EmotionLabel::Tired)
            .with_scores(Scores {
                mood: 2,
                energy: 1,
                stress: 4,
            })
            .with_keywords(["drained".into(), "busy".into(), "weary".into()])
            .with_reflection("That sounds like a lot.\nRest if you can.")
    }

    #[test]
    fn test_snapshot_sections() {
        let text = snapshot(&record());
        assert!(text.contains("Detected emotion: Tired"));
        assert!(text.contains("Mood:   ##... 2/5"));
        assert!(text.contains("Energy: #.... 1/5"));
        assert!(text.contains("Stress: ####. 4/5"));
        assert!(text.contains("  drained, busy, weary"));
        assert!(text.contains("  Rest if you can."));
    }

    #[test]
    fn test_score_bar_saturates() {
        assert_eq!(score_bar(9), "##### 9/5");
        assert_eq!(score_bar(0), "..... 0/5");
    }

    #[test]
    fn test_empty_projections() {
        assert_eq!(timeline(&[]), EMPTY_ANALYTICS);
        assert_eq!(counts(&EmotionCounts::default()), EMPTY_ANALYTICS);
        assert_eq!(entries(&[]), EMPTY_ANALYTICS);
    }

    #[test]
    fn test_timeline_and_entries() {
        let mut store = EntryStore::new();
        let ts = Local
            .with_ymd_and_hms(2025, 1, 2, 8, 30, 0)
            .single()
            .unwrap();
        store.add_entry_at(record(), ts);

        let text = timeline(&store.mood_timeline());
        assert!(text.contains("2025-01-02 08:30  mood 2/5  Tired"));

        let text = entries(store.entries());
        assert!(text.starts_with("  1. 2025-01-02 08:30  Tired"));
        assert!(text.contains("\"long day at work\""));

        let text = counts(&store.emotion_counts());
        assert!(text.contains("Tired  1"));
    }
}
