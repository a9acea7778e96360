// src/pipeline/scores.rs
// Stage 2: mood / energy / stress ratings

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

use super::state::{Scores, WithEmotion, WithScores};
use crate::llm::{GenerationRequest, LlmClient};

const TEMPERATURE: f32 = 0.3;
const MAX_OUTPUT_TOKENS: u32 = 50;

fn score_regex(label: &str) -> Regex {
    // SAFETY: label is one of three static words; compilation cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(&format!(r"(?m)^[ \t]*{}:[ \t]*([0-9])", label)).expect("score regex")
}

static MOOD_RE: LazyLock<Regex> = LazyLock::new(|| score_regex("Mood"));
static ENERGY_RE: LazyLock<Regex> = LazyLock::new(|| score_regex("Energy"));
static STRESS_RE: LazyLock<Regex> = LazyLock::new(|| score_regex("Stress"));

pub fn build_prompt(user_input: &str) -> String {
    format!(
        "Rate this on 1-5 scale:\n\n\"{}\"\n\nFormat:\nMood: X\nEnergy: Y\nStress: Z",
        user_input
    )
}

fn capture_digit(re: &Regex, text: &str) -> Option<u8> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u8>().ok())
}

/// Extract the three ratings. Each missing line defaults to the neutral
/// value on its own; digits are kept as emitted, even outside 1-5.
pub fn parse_scores(raw: &str) -> Scores {
    let field = |re: &Regex, name: &str| match capture_digit(re, raw) {
        Some(value) => {
            if !(1..=5).contains(&value) {
                warn!(stage = "scores", field = name, value, "Rating outside 1-5, keeping as-is");
            }
            value
        }
        None => {
            debug!(stage = "scores", field = name, "Rating missing, using neutral default");
            Scores::NEUTRAL
        }
    };

    Scores {
        mood: field(&MOOD_RE, "mood"),
        energy: field(&ENERGY_RE, "energy"),
        stress: field(&STRESS_RE, "stress"),
    }
}

pub async fn generate_scores(client: &dyn LlmClient, model: &str, state: WithEmotion) -> WithScores {
    let request = GenerationRequest::new(build_prompt(state.user_input()), model)
        .with_temperature(TEMPERATURE)
        .with_max_output_tokens(MAX_OUTPUT_TOKENS);

    let scores = match client.generate(request).await {
        Ok(raw) => parse_scores(raw.trim()),
        Err(e) => {
            warn!(stage = "scores", error = %e, "Generation failed, using neutral scores");
            Scores::neutral()
        }
    };

    debug!(
        stage = "scores",
        mood = scores.mood,
        energy = scores.energy,
        stress = scores.stress,
        "Stage complete"
    );
    state.with_scores(scores)
}
