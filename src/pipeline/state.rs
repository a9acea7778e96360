// src/pipeline/state.rs
// Analysis state threaded through the stages
//
// Each stage consumes the previous state by value and returns the next one,
// so a later stage cannot run before the fields it depends on exist and a
// finished record cannot be built without every field.

use serde::{Deserialize, Serialize};

/// The closed set of emotions the pipeline can report.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum EmotionLabel {
    Happy,
    Sad,
    Angry,
    Anxious,
    Stressed,
    Tired,
    Excited,
    Lonely,
}

impl EmotionLabel {
    /// All labels, in matching priority order
    pub const ALL: [EmotionLabel; 8] = [
        Self::Happy,
        Self::Sad,
        Self::Angry,
        Self::Anxious,
        Self::Stressed,
        Self::Tired,
        Self::Excited,
        Self::Lonely,
    ];

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Mood, energy and stress ratings. Nominally 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scores {
    pub mood: u8,
    pub energy: u8,
    pub stress: u8,
}

impl Scores {
    /// Midpoint used for any rating the model did not provide
    pub const NEUTRAL: u8 = 3;

    pub fn neutral() -> Self {
        Self {
            mood: Self::NEUTRAL,
            energy: Self::NEUTRAL,
            stress: Self::NEUTRAL,
        }
    }
}

/// Exactly three keywords, in the order the model gave them
pub type Keywords = [String; 3];

/// Fresh request: only the user's text
#[derive(Debug, Clone)]
pub struct Submission {
    user_input: String,
}

impl Submission {
    pub fn new(user_input: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
        }
    }

    pub fn user_input(&self) -> &str {
        &self.user_input
    }

    pub fn with_emotion(self, emotion: EmotionLabel) -> WithEmotion {
        WithEmotion {
            user_input: self.user_input,
            emotion,
        }
    }
}

/// After emotion extraction
#[derive(Debug, Clone)]
pub struct WithEmotion {
    user_input: String,
    emotion: EmotionLabel,
}

impl WithEmotion {
    pub fn user_input(&self) -> &str {
        &self.user_input
    }

    pub fn with_scores(self, scores: Scores) -> WithScores {
        WithScores {
            user_input: self.user_input,
            emotion: self.emotion,
            scores,
        }
    }
}

/// After score generation
#[derive(Debug, Clone)]
pub struct WithScores {
    user_input: String,
    emotion: EmotionLabel,
    scores: Scores,
}

impl WithScores {
    pub fn user_input(&self) -> &str {
        &self.user_input
    }

    pub fn with_keywords(self, keywords: Keywords) -> WithKeywords {
        WithKeywords {
            user_input: self.user_input,
            emotion: self.emotion,
            scores: self.scores,
            keywords,
        }
    }
}

/// After keyword extraction
#[derive(Debug, Clone)]
pub struct WithKeywords {
    user_input: String,
    emotion: EmotionLabel,
    scores: Scores,
    keywords: Keywords,
}

impl WithKeywords {
    pub fn user_input(&self) -> &str {
        &self.user_input
    }

    pub fn with_reflection(self, reflection: impl Into<String>) -> AnalysisRecord {
        AnalysisRecord {
            user_input: self.user_input,
            emotion: self.emotion,
            mood_score: self.scores.mood,
            energy_score: self.scores.energy,
            stress_score: self.scores.stress,
            keywords: self.keywords,
            reflection: reflection.into(),
        }
    }
}

/// Complete analysis of one journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub user_input: String,
    pub emotion: EmotionLabel,
    pub mood_score: u8,
    pub energy_score: u8,
    pub stress_score: u8,
    pub keywords: Keywords,
    pub reflection: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    // ========================================================================
    // EmotionLabel
    // ========================================================================

    #[test]
    fn test_label_strings() {
        assert_eq!(EmotionLabel::Anxious.as_str(), "Anxious");
        assert_eq!(EmotionLabel::Lonely.to_string(), "Lonely");
        assert_eq!(EmotionLabel::from_str("Tired").unwrap(), EmotionLabel::Tired);
        assert!(EmotionLabel::from_str("tired").is_err());
    }

    #[test]
    fn test_label_serde_uses_variant_name() {
        let json = serde_json::to_string(&EmotionLabel::Excited).unwrap();
        assert_eq!(json, "\"Excited\"");
        let back: EmotionLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EmotionLabel::Excited);
    }

    #[test]
    fn test_all_is_in_declared_order() {
        let names: Vec<&str> = EmotionLabel::ALL.iter().map(|l| l.as_str()).collect();
        assert_eq!(
            names,
            ["Happy", "Sad", "Angry", "Anxious", "Stressed", "Tired", "Excited", "Lonely"]
        );
    }

    // ========================================================================
    // Stage transitions
    // ========================================================================

    #[test]
    fn test_transitions_carry_every_field() {
        let record = Submission::new("long day at work")
            .with_emotion(EmotionLabel::Tired)
            .with_scores(Scores {
                mood: 2,
                energy: 1,
                stress: 4,
            })
            .with_keywords(["drained".into(), "busy".into(), "sleepy".into()])
            .with_reflection("Rest sounds well earned.");

        assert_eq!(record.user_input, "long day at work");
        assert_eq!(record.emotion, EmotionLabel::Tired);
        assert_eq!((record.mood_score, record.energy_score, record.stress_score), (2, 1, 4));
        assert_eq!(record.keywords[2], "sleepy");
        assert_eq!(record.reflection, "Rest sounds well earned.");
    }

    #[test]
    fn test_record_json_field_names() {
        let record = Submission::new("ok")
            .with_emotion(EmotionLabel::Happy)
            .with_scores(Scores::neutral())
            .with_keywords(["a".into(), "b".into(), "c".into()])
            .with_reflection("r");
        let json = serde_json::to_value(&record).unwrap();
        for field in [
            "user_input",
            "emotion",
            "mood_score",
            "energy_score",
            "stress_score",
            "keywords",
            "reflection",
        ] {
            assert!(json.get(field).is_some(), "missing {}", field);
        }
        assert_eq!(json["keywords"].as_array().unwrap().len(), 3);
    }
}
