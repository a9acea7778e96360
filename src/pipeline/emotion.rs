// src/pipeline/emotion.rs
// Stage 1: primary emotion classification

use tracing::{debug, warn};

use super::state::{EmotionLabel, Submission, WithEmotion};
use crate::llm::{GenerationRequest, LlmClient};

/// Used whenever the model fails or answers outside the label set
pub const FALLBACK_EMOTION: EmotionLabel = EmotionLabel::Anxious;

const TEMPERATURE: f32 = 0.3;
const MAX_OUTPUT_TOKENS: u32 = 10;

pub fn build_prompt(user_input: &str) -> String {
    let labels: Vec<&str> = EmotionLabel::ALL.iter().map(|l| l.as_str()).collect();
    format!(
        "Analyze this text and pick ONE emotion from: {}\n\nText: \"{}\"\n\nRespond with ONLY the emotion word.",
        labels.join(", "),
        user_input
    )
}

/// Coerce a raw model answer into the label set.
///
/// An exact match wins; otherwise the first label (in set order) contained in
/// the answer, ignoring case.
pub fn parse_emotion(raw: &str) -> Option<EmotionLabel> {
    let answer = raw.trim();
    if let Some(label) = EmotionLabel::ALL.iter().find(|l| l.as_str() == answer) {
        return Some(*label);
    }

    let lower = answer.to_lowercase();
    EmotionLabel::ALL
        .iter()
        .find(|l| lower.contains(&l.as_str().to_lowercase()))
        .copied()
}

pub async fn extract_emotion(client: &dyn LlmClient, model: &str, state: Submission) -> WithEmotion {
    let request = GenerationRequest::new(build_prompt(state.user_input()), model)
        .with_temperature(TEMPERATURE)
        .with_max_output_tokens(MAX_OUTPUT_TOKENS);

    let emotion = match client.generate(request).await {
        Ok(raw) => parse_emotion(&raw).unwrap_or_else(|| {
            warn!(stage = "emotion", answer = %raw.trim(), "Answer outside label set, using fallback");
            FALLBACK_EMOTION
        }),
        Err(e) => {
            warn!(stage = "emotion", error = %e, "Generation failed, using fallback");
            FALLBACK_EMOTION
        }
    };

    debug!(stage = "emotion", emotion = %emotion, "Stage complete");
    state.with_emotion(emotion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(parse_emotion("Sad"), Some(EmotionLabel::Sad));
        assert_eq!(parse_emotion("  Excited\n"), Some(EmotionLabel::Excited));
    }

    #[test]
    fn test_case_insensitive_containment() {
        assert_eq!(parse_emotion("angry"), Some(EmotionLabel::Angry));
        assert_eq!(parse_emotion("The emotion is: LONELY."), Some(EmotionLabel::Lonely));
    }

    #[test]
    fn test_first_label_in_set_order_wins() {
        // Both "Sad" and "Tired" appear; Sad comes first in the set
        assert_eq!(parse_emotion("tired and sad"), Some(EmotionLabel::Sad));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(parse_emotion("Melancholy"), None);
        assert_eq!(parse_emotion(""), None);
    }

    #[test]
    fn test_prompt_lists_labels_and_input() {
        let prompt = build_prompt("I aced my exam");
        assert!(prompt.contains("Happy, Sad, Angry, Anxious, Stressed, Tired, Excited, Lonely"));
        assert!(prompt.contains("\"I aced my exam\""));
        assert!(prompt.contains("ONLY the emotion word"));
    }
}
