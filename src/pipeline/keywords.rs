// src/pipeline/keywords.rs
// Stage 3: three emotional keywords

use tracing::{debug, warn};

use super::state::{Keywords, WithKeywords, WithScores};
use crate::llm::{GenerationRequest, LlmClient};

/// Pads short answers up to three keywords
pub const FILLER_KEYWORD: &str = "reflective";
/// Used in full when generation fails
pub const FALLBACK_KEYWORDS: [&str; 3] = ["thoughtful", "reflective", "aware"];

const TEMPERATURE: f32 = 0.5;
const MAX_OUTPUT_TOKENS: u32 = 30;

pub fn build_prompt(user_input: &str) -> String {
    format!(
        "Extract 3 emotional keywords from: \"{}\"\n\nFormat: word1, word2, word3",
        user_input
    )
}

/// First three non-empty comma-separated tokens, padded with the filler word
pub fn parse_keywords(raw: &str) -> Keywords {
    let mut found = raw
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string);

    std::array::from_fn(|_| found.next().unwrap_or_else(|| FILLER_KEYWORD.to_string()))
}

pub fn fallback_keywords() -> Keywords {
    FALLBACK_KEYWORDS.map(str::to_string)
}

pub async fn extract_keywords(client: &dyn LlmClient, model: &str, state: WithScores) -> WithKeywords {
    let request = GenerationRequest::new(build_prompt(state.user_input()), model)
        .with_temperature(TEMPERATURE)
        .with_max_output_tokens(MAX_OUTPUT_TOKENS);

    let keywords = match client.generate(request).await {
        Ok(raw) => parse_keywords(raw.trim()),
        Err(e) => {
            warn!(stage = "keywords", error = %e, "Generation failed, using fallback keywords");
            fallback_keywords()
        }
    };

    debug!(stage = "keywords", keywords = ?keywords, "Stage complete");
    state.with_keywords(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_keywords() {
        assert_eq!(
            parse_keywords("overwhelmed, anxious, hopeful"),
            ["overwhelmed", "anxious", "hopeful"]
        );
    }

    #[test]
    fn test_extra_keywords_are_dropped() {
        assert_eq!(parse_keywords("a, b, c, d, e"), ["a", "b", "c"]);
    }

    #[test]
    fn test_short_answer_is_padded() {
        assert_eq!(parse_keywords("lonely"), ["lonely", "reflective", "reflective"]);
    }

    #[test]
    fn test_empty_tokens_are_skipped() {
        assert_eq!(parse_keywords(" , tense,, ,calm ,"), ["tense", "calm", "reflective"]);
        assert_eq!(parse_keywords(""), ["reflective", "reflective", "reflective"]);
    }

    #[test]
    fn test_fallback_triad() {
        assert_eq!(fallback_keywords(), ["thoughtful", "reflective", "aware"]);
    }

    #[test]
    fn test_prompt_format() {
        let prompt = build_prompt("new job tomorrow");
        assert!(prompt.contains("\"new job tomorrow\""));
        assert!(prompt.ends_with("word1, word2, word3"));
    }
}
